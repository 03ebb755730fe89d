//! Client configuration types.
//!
//! This module provides [`CratonConfig`] and its builder, plus validated
//! newtypes for the values the client needs: the service URL, account
//! username, project id and auth token.
//!
//! # Example
//!
//! ```rust
//! use craton_api::{CratonConfig, CratonUrl};
//!
//! let config = CratonConfig::builder()
//!     .url(CratonUrl::new("https://craton.example.com/v1").unwrap())
//!     .user_agent_prefix("inventory-sync/2.1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url().as_ref(), "https://craton.example.com/v1");
//! ```

mod newtypes;

pub use newtypes::{CratonUrl, ProjectId, Token, Username};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a Craton API client.
///
/// Configuration is instance-based: nothing here is global, and the values
/// are immutable once built. Use [`CratonConfig::builder`] to construct one.
#[derive(Clone, Debug)]
pub struct CratonConfig {
    url: CratonUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl CratonConfig {
    /// Creates a new builder for constructing a `CratonConfig`.
    #[must_use]
    pub const fn builder() -> CratonConfigBuilder {
        CratonConfigBuilder::new()
    }

    /// Returns the service URL, with any trailing slashes already stripped.
    #[must_use]
    pub const fn url(&self) -> &CratonUrl {
        &self.url
    }

    /// Returns the configured User-Agent prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout passed through to the transport, if any.
    ///
    /// The client itself never interprets this value; it is handed to the
    /// underlying HTTP stack untouched.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Builder for [`CratonConfig`].
///
/// The URL is required; everything else is optional.
#[derive(Debug, Default)]
pub struct CratonConfigBuilder {
    url: Option<CratonUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl CratonConfigBuilder {
    const fn new() -> Self {
        Self {
            url: None,
            user_agent_prefix: None,
            timeout: None,
        }
    }

    /// Sets the service URL (required).
    #[must_use]
    pub fn url(mut self, url: CratonUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets an application prefix prepended to the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a request timeout handed through to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the URL was not set.
    pub fn build(self) -> Result<CratonConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;

        Ok(CratonConfig {
            url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
