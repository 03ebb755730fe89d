//! # Craton API Rust SDK
//!
//! A Rust client for the Craton fleet management API, providing type-safe
//! configuration, token authentication, and pagination-aware CRUD access to
//! the v1 inventory collections.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CratonConfig`] and [`CratonConfigBuilder`]
//! - Validated newtypes for credentials and the service URL
//! - Token-based session handling via [`Session`]
//! - An async HTTP transport with a typed per-status error taxonomy
//! - A generic CRUD client over every v1 collection (regions, clouds,
//!   cells, hosts, devices, networks, network devices, network interfaces,
//!   projects)
//! - Marker-based pagination with automatic `next`-link following
//! - Lazy-loading [`Resource`](v1::Resource) records and nested
//!   [`Variables`](v1::Variables) documents
//!
//! ## Quick Start
//!
//! ```rust
//! use craton_api::{CratonConfig, CratonUrl, ProjectId, Session, Token, Username};
//!
//! // Create configuration using the builder pattern
//! let config = CratonConfig::builder()
//!     .url(CratonUrl::new("https://craton.example.com/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Sessions carry the plain-token credentials sent with every request
//! let session = Session::new(
//!     Username::new("demo").unwrap(),
//!     ProjectId::new("b9f10eca").unwrap(),
//!     Token::new("secret-token").unwrap(),
//! );
//! ```
//!
//! ## Working with Collections
//!
//! ```rust,ignore
//! use craton_api::v1::{CratonClient, ListParams};
//! use serde_json::json;
//!
//! let client = CratonClient::new(&config, &session);
//!
//! // Create a host
//! let host = client.hosts().create(json!({
//!     "name": "compute-01",
//!     "region_id": 1,
//! })).await?;
//!
//! // List hosts, following pagination links automatically
//! let hosts = client.hosts().list(ListParams::new()).try_collect().await?;
//!
//! // Or walk items one page at a time
//! let mut list = client.hosts().list(ListParams::new().limit(30));
//! while let Some(host) = list.try_next().await? {
//!     println!("{:?}", host.get_field("name"));
//! }
//! ```
//!
//! ## Variables
//!
//! Some resources carry a nested key/value document:
//!
//! ```rust,ignore
//! let variables = client.hosts().get_variables("42").await?;
//! client.hosts().set_variables("42", json!({"rack": "c-12"})).await?;
//! client.hosts().delete_variables("42", &["rack"]).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: one request per call; retry policy belongs to
//!   the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod v1;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{CratonConfig, CratonConfigBuilder, CratonUrl, ProjectId, Token, Username};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, EndpointFilter, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, Link,
};

// Re-export the v1 entry point
pub use v1::CratonClient;
