//! Token-based authentication sessions.
//!
//! Craton authenticates requests with three headers: `X-Auth-User`,
//! `X-Auth-Project` and `X-Auth-Token`. A [`Session`] bundles those
//! credentials and yields the header set the transport attaches to every
//! request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{ProjectId, Token, Username};

/// Header carrying the account username.
pub const AUTH_USER_HEADER: &str = "X-Auth-User";
/// Header carrying the project id requests are scoped to.
pub const AUTH_PROJECT_HEADER: &str = "X-Auth-Project";
/// Header carrying the auth token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// An authenticated session against a Craton deployment.
///
/// Sessions are immutable after creation and can be serialized for storage.
/// They carry no expiry: token lifecycle is the deployment's concern, and an
/// expired token simply surfaces as an HTTP 401 on the next request.
///
/// # Example
///
/// ```rust
/// use craton_api::{ProjectId, Session, Token, Username};
///
/// let session = Session::new(
///     Username::new("demo").unwrap(),
///     ProjectId::new("b9f10eca-66ac-4c27-9c13-9d01e65f96b4").unwrap(),
///     Token::new("demo-token").unwrap(),
/// );
///
/// let headers = session.auth_headers();
/// assert_eq!(headers.get("X-Auth-User").map(String::as_str), Some("demo"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The account username.
    pub username: Username,
    /// The project all requests are scoped to.
    pub project_id: ProjectId,
    /// The auth token (masked in debug output).
    pub token: Token,
}

impl Session {
    /// Creates a new session from validated credentials.
    #[must_use]
    pub const fn new(username: Username, project_id: ProjectId, token: Token) -> Self {
        Self {
            username,
            project_id,
            token,
        }
    }

    /// Returns the credential headers for this session.
    ///
    /// The transport merges these into every outgoing request.
    #[must_use]
    pub fn auth_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            AUTH_USER_HEADER.to_string(),
            self.username.as_ref().to_string(),
        );
        headers.insert(
            AUTH_PROJECT_HEADER.to_string(),
            self.project_id.as_ref().to_string(),
        );
        headers.insert(
            AUTH_TOKEN_HEADER.to_string(),
            self.token.as_ref().to_string(),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_session() -> Session {
        Session::new(
            Username::new("demo").unwrap(),
            ProjectId::new("project-1").unwrap(),
            Token::new("demo-token").unwrap(),
        )
    }

    #[test]
    fn test_auth_headers_contains_all_three() {
        let headers = demo_session().auth_headers();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(AUTH_USER_HEADER).map(String::as_str), Some("demo"));
        assert_eq!(
            headers.get(AUTH_PROJECT_HEADER).map(String::as_str),
            Some("project-1")
        );
        assert_eq!(
            headers.get(AUTH_TOKEN_HEADER).map(String::as_str),
            Some("demo-token")
        );
    }

    #[test]
    fn test_session_roundtrips_through_serde() {
        let session = demo_session();
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }

    #[test]
    fn test_session_debug_masks_token() {
        let debug = format!("{:?}", demo_session());
        assert!(!debug.contains("demo-token"));
    }
}
