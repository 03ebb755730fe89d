//! HTTP and API error types.
//!
//! The transport maps every non-success status code to a typed [`ApiError`]
//! variant before a response is handed to any caller, so the CRUD layer and
//! the pagination engine only ever see successfully decoded responses.
//!
//! # Error Handling
//!
//! - [`ApiError`]: one variant per status code the service is known to
//!   return, plus generic 4xx/5xx catch-alls
//! - [`HttpError`]: unified error type covering API, network and decode
//!   failures
//!
//! Errors are never caught and suppressed inside this crate; they propagate
//! to the caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use craton_api::clients::{ApiError, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Api(ApiError::NotFound { message })) => {
//!         println!("no such resource: {message}");
//!     }
//!     Err(HttpError::Network(e)) => println!("connection failed: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// A typed API error derived from a non-success HTTP status code.
///
/// Status codes with defined subtypes (per the Craton error contract) map to
/// their own variants; any other 4xx maps to [`ApiError::ClientError`] and
/// any other 5xx to [`ApiError::ServerError`]. The message is extracted from
/// the response body when the service provides one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 400.
    #[error("Bad Request (HTTP 400): {message}")]
    BadRequest {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 401.
    #[error("Unauthorized (HTTP 401): {message}")]
    Unauthorized {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 403.
    #[error("Forbidden (HTTP 403): {message}")]
    Forbidden {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 404.
    #[error("Not Found (HTTP 404): {message}")]
    NotFound {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 405.
    #[error("Method Not Allowed (HTTP 405): {message}")]
    MethodNotAllowed {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 406.
    #[error("Not Acceptable (HTTP 406): {message}")]
    NotAcceptable {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 407.
    #[error("Proxy Authentication Required (HTTP 407): {message}")]
    ProxyAuthenticationRequired {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 409.
    #[error("Conflict (HTTP 409): {message}")]
    Conflict {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 410.
    #[error("Gone (HTTP 410): {message}")]
    Gone {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 411.
    #[error("Length Required (HTTP 411): {message}")]
    LengthRequired {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 412.
    #[error("Precondition Failed (HTTP 412): {message}")]
    PreconditionFailed {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 413.
    #[error("Payload Too Large (HTTP 413): {message}")]
    PayloadTooLarge {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 414.
    #[error("URI Too Long (HTTP 414): {message}")]
    UriTooLong {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 415.
    #[error("Unsupported Media Type (HTTP 415): {message}")]
    UnsupportedMediaType {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 416.
    #[error("Range Not Satisfiable (HTTP 416): {message}")]
    RangeNotSatisfiable {
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 422.
    #[error("Unprocessable Entity (HTTP 422): {message}")]
    UnprocessableEntity {
        /// Message extracted from the response body.
        message: String,
    },

    /// Any other 4xx status code.
    #[error("Client error (HTTP {code}): {message}")]
    ClientError {
        /// The HTTP status code.
        code: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// HTTP 500.
    #[error("Internal Server Error (HTTP 500): {message}")]
    InternalServerError {
        /// Message extracted from the response body.
        message: String,
    },

    /// Any other 5xx status code.
    #[error("Server error (HTTP {code}): {message}")]
    ServerError {
        /// The HTTP status code.
        code: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

impl ApiError {
    /// Builds the typed error for a non-success status code.
    ///
    /// The message is taken from the body's `message` or `error` field when
    /// present, falling back to the serialized body.
    #[must_use]
    pub fn from_status(code: u16, body: &serde_json::Value) -> Self {
        let message = extract_message(body);
        match code {
            400 => Self::BadRequest { message },
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            404 => Self::NotFound { message },
            405 => Self::MethodNotAllowed { message },
            406 => Self::NotAcceptable { message },
            407 => Self::ProxyAuthenticationRequired { message },
            409 => Self::Conflict { message },
            410 => Self::Gone { message },
            411 => Self::LengthRequired { message },
            412 => Self::PreconditionFailed { message },
            413 => Self::PayloadTooLarge { message },
            414 => Self::UriTooLong { message },
            415 => Self::UnsupportedMediaType { message },
            416 => Self::RangeNotSatisfiable { message },
            422 => Self::UnprocessableEntity { message },
            500 => Self::InternalServerError { message },
            _ if code >= 500 => Self::ServerError { code, message },
            _ => Self::ClientError { code, message },
        }
    }

    /// Returns the HTTP status code behind this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::Unauthorized { .. } => 401,
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::NotAcceptable { .. } => 406,
            Self::ProxyAuthenticationRequired { .. } => 407,
            Self::Conflict { .. } => 409,
            Self::Gone { .. } => 410,
            Self::LengthRequired { .. } => 411,
            Self::PreconditionFailed { .. } => 412,
            Self::PayloadTooLarge { .. } => 413,
            Self::UriTooLong { .. } => 414,
            Self::UnsupportedMediaType { .. } => 415,
            Self::RangeNotSatisfiable { .. } => 416,
            Self::UnprocessableEntity { .. } => 422,
            Self::InternalServerError { .. } => 500,
            Self::ClientError { code, .. } | Self::ServerError { code, .. } => *code,
        }
    }

    /// Returns `true` for the not-found error class.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extracts a human-readable message from an error response body.
fn extract_message(body: &serde_json::Value) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| body.to_string(), ToString::to_string)
}

/// Unified error type for all request failures.
///
/// Use pattern matching to handle specific failure classes.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The service answered with a non-success status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The connection could not be established or timed out.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {reason}")]
    Decode {
        /// What was wrong with the body.
        reason: String,
    },

    /// The request failed validation before it was sent.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },
}

impl HttpError {
    /// Returns `true` if this error is the API not-found class.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_status_maps_enumerated_codes() {
        let body = json!({"message": "boom"});

        assert!(matches!(
            ApiError::from_status(400, &body),
            ApiError::BadRequest { .. }
        ));
        assert!(matches!(
            ApiError::from_status(404, &body),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(409, &body),
            ApiError::Conflict { .. }
        ));
        assert!(matches!(
            ApiError::from_status(422, &body),
            ApiError::UnprocessableEntity { .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, &body),
            ApiError::InternalServerError { .. }
        ));
    }

    #[test]
    fn test_from_status_maps_unlisted_codes_to_generic_variants() {
        let body = json!({});

        assert!(matches!(
            ApiError::from_status(418, &body),
            ApiError::ClientError { code: 418, .. }
        ));
        assert!(matches!(
            ApiError::from_status(503, &body),
            ApiError::ServerError { code: 503, .. }
        ));
    }

    #[test]
    fn test_status_roundtrips_for_all_enumerated_codes() {
        let body = json!({});
        for code in [
            400, 401, 403, 404, 405, 406, 407, 409, 410, 411, 412, 413, 414, 415, 416, 422, 500,
        ] {
            assert_eq!(ApiError::from_status(code, &body).status(), code);
        }
    }

    #[test]
    fn test_message_extracted_from_message_field() {
        let error = ApiError::from_status(404, &json!({"message": "host not found"}));
        assert!(error.to_string().contains("host not found"));
    }

    #[test]
    fn test_message_extracted_from_error_field() {
        let error = ApiError::from_status(400, &json!({"error": "bad marker"}));
        assert!(error.to_string().contains("bad marker"));
    }

    #[test]
    fn test_message_falls_back_to_body() {
        let error = ApiError::from_status(400, &json!({"detail": 42}));
        assert!(error.to_string().contains("detail"));
    }

    #[test]
    fn test_is_not_found() {
        let not_found = ApiError::from_status(404, &json!({}));
        assert!(not_found.is_not_found());
        assert!(HttpError::Api(not_found).is_not_found());

        let conflict = ApiError::from_status(409, &json!({}));
        assert!(!conflict.is_not_found());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::from_status(404, &json!({}));
        let _ = api_error;

        let decode_error: &dyn std::error::Error = &HttpError::Decode {
            reason: "missing key".to_string(),
        };
        let _ = decode_error;
    }
}
