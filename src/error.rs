//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! failures. HTTP and API errors live in [`crate::clients`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use craton_api::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the Craton account username.")]
    EmptyUsername,

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Craton auth token.")]
    EmptyToken,

    /// Project id cannot be empty.
    #[error("Project id cannot be empty. Please provide the Craton project id.")]
    EmptyProjectId,

    /// Service URL is invalid.
    #[error("Invalid Craton URL '{url}'. Expected an http(s) URL including the API version segment (e.g. 'https://craton.example.com/v1').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
