//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated Craton service URL.
///
/// The URL must carry an http(s) scheme and include whatever version segment
/// the deployment serves (e.g. `/v1`). Trailing slashes are stripped at
/// construction so path joining never duplicates a separator.
///
/// # Example
///
/// ```rust
/// use craton_api::CratonUrl;
///
/// let url = CratonUrl::new("https://craton.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://craton.example.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CratonUrl(String);

impl CratonUrl {
    /// Creates a new validated service URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL is empty or does not
    /// start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl { url });
        }

        let stripped = trimmed.trim_end_matches('/');
        if stripped.ends_with("//") || stripped.ends_with(':') {
            // A scheme with nothing behind it survives the prefix check.
            return Err(ConfigError::InvalidUrl { url });
        }

        Ok(Self(stripped.to_string()))
    }
}

impl AsRef<str> for CratonUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CratonUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Craton account username.
///
/// This newtype ensures the username is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use craton_api::Username;
///
/// let user = Username::new("demo").unwrap();
/// assert_eq!(user.as_ref(), "demo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Craton project id.
///
/// Craton scopes every request to a project; the id is an opaque string
/// (deployments commonly use UUIDs).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new validated project id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyProjectId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyProjectId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Craton auth token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `Token(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use craton_api::Token;
///
/// let token = Token::new("demo-token").unwrap();
/// assert_eq!(format!("{:?}", token), "Token(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slashes() {
        let url = CratonUrl::new("http://example.com/v1///").unwrap();
        assert_eq!(url.as_ref(), "http://example.com/v1");
    }

    #[test]
    fn test_url_without_trailing_slash_unchanged() {
        let url = CratonUrl::new("http://example.com/v1").unwrap();
        assert_eq!(url.as_ref(), "http://example.com/v1");
    }

    #[test]
    fn test_url_rejects_missing_scheme() {
        let result = CratonUrl::new("example.com/v1");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_url_rejects_bare_scheme() {
        assert!(CratonUrl::new("https://").is_err());
        assert!(CratonUrl::new("").is_err());
    }

    #[test]
    fn test_url_display_matches_as_ref() {
        let url = CratonUrl::new("https://craton.example.com/v1").unwrap();
        assert_eq!(url.to_string(), url.as_ref());
    }

    #[test]
    fn test_username_rejects_empty() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_project_id_rejects_empty() {
        assert!(matches!(
            ProjectId::new(""),
            Err(ConfigError::EmptyProjectId)
        ));
    }

    #[test]
    fn test_token_rejects_empty() {
        assert!(matches!(Token::new(""), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_token_debug_is_masked() {
        let token = Token::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "Token(*****)");
    }

    #[test]
    fn test_token_serializes_transparently() {
        let token = Token::new("abc").unwrap();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#""abc""#);
    }
}
