//! The v1 resource API.
//!
//! This module binds the generic machinery together:
//!
//! - [`CrudClient`] + [`ResourceDescriptor`]: the uniform operation set
//!   over one collection
//! - [`Paginator`] / [`ListParams`]: marker pagination for list calls
//! - [`Resource`]: the lazy-loading record every operation returns
//! - [`Variables`]: the nested variable documents some resources carry
//!
//! [`CratonClient`] is the entry point: one accessor per collection the
//! v1 API exposes.
//!
//! # Example
//!
//! ```rust,no_run
//! use craton_api::auth::Session;
//! use craton_api::config::{CratonConfig, CratonUrl, ProjectId, Token, Username};
//! use craton_api::v1::{CratonClient, ListParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CratonConfig::builder()
//!     .url(CratonUrl::new("https://craton.example.com/v1")?)
//!     .build()?;
//! let session = Session::new(
//!     Username::new("demo")?,
//!     ProjectId::new("b9f10eca")?,
//!     Token::new("secret")?,
//! );
//!
//! let client = CratonClient::new(&config, &session);
//! let hosts = client.hosts().list(ListParams::new()).try_collect().await?;
//! # Ok(())
//! # }
//! ```

mod crud;
mod pagination;
mod resource;
mod variables;

pub use crud::{merge_fields, CrudClient, ResourceDescriptor, ResourceList};
pub use pagination::{ListParams, Page, Paginator};
pub use resource::{FieldError, Resolution, Resource};
pub use variables::{Variable, VariableValue, Variables};

use crate::auth::Session;
use crate::clients::HttpClient;
use crate::config::CratonConfig;

/// Regions collection.
pub const REGIONS: ResourceDescriptor = ResourceDescriptor::new("region", "/regions");
/// Clouds collection.
pub const CLOUDS: ResourceDescriptor = ResourceDescriptor::new("cloud", "/clouds");
/// Cells collection.
pub const CELLS: ResourceDescriptor = ResourceDescriptor::new("cell", "/cells");
/// Hosts collection.
pub const HOSTS: ResourceDescriptor = ResourceDescriptor::new("host", "/hosts");
/// Devices collection.
pub const DEVICES: ResourceDescriptor = ResourceDescriptor::new("device", "/devices");
/// Networks collection.
pub const NETWORKS: ResourceDescriptor = ResourceDescriptor::new("network", "/networks");
/// Network devices collection.
pub const NETWORK_DEVICES: ResourceDescriptor =
    ResourceDescriptor::new("network_device", "/network-devices");
/// Network interfaces collection.
pub const NETWORK_INTERFACES: ResourceDescriptor =
    ResourceDescriptor::new("network_interface", "/network-interfaces");
/// Projects collection.
pub const PROJECTS: ResourceDescriptor = ResourceDescriptor::new("project", "/projects");

/// The v1 Craton client.
///
/// Holds one shared transport; each accessor hands out a [`CrudClient`]
/// bound to its collection. Accessors are cheap, so call them per use
/// rather than caching the result.
#[derive(Clone, Debug)]
pub struct CratonClient {
    http: HttpClient,
}

// Verify CratonClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CratonClient>();
};

impl CratonClient {
    /// Creates a client for the given configuration and session.
    #[must_use]
    pub fn new(config: &CratonConfig, session: &Session) -> Self {
        Self {
            http: HttpClient::new(config, session),
        }
    }

    /// Wraps an existing transport.
    #[must_use]
    pub const fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The regions collection.
    #[must_use]
    pub fn regions(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), REGIONS)
    }

    /// The clouds collection.
    #[must_use]
    pub fn clouds(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), CLOUDS)
    }

    /// The cells collection.
    #[must_use]
    pub fn cells(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), CELLS)
    }

    /// The hosts collection.
    #[must_use]
    pub fn hosts(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), HOSTS)
    }

    /// The devices collection.
    #[must_use]
    pub fn devices(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), DEVICES)
    }

    /// The networks collection.
    #[must_use]
    pub fn networks(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), NETWORKS)
    }

    /// The network devices collection.
    #[must_use]
    pub fn network_devices(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), NETWORK_DEVICES)
    }

    /// The network interfaces collection.
    #[must_use]
    pub fn network_interfaces(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), NETWORK_INTERFACES)
    }

    /// The projects collection.
    #[must_use]
    pub fn projects(&self) -> CrudClient {
        CrudClient::new(self.http.clone(), PROJECTS)
    }
}
