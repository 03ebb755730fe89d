//! HTTP transport and error mapping.
//!
//! This module contains the pieces every API call flows through:
//!
//! - [`HttpClient`]: the transport; one authenticated request per call
//! - [`HttpRequest`] / [`HttpResponse`]: request construction and decoded
//!   responses, including pagination [`Link`]s
//! - [`ApiError`] / [`HttpError`]: the typed status-code taxonomy
//!
//! The resource-level API lives in [`crate::v1`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{EndpointFilter, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, Link};
