//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Craton API.

use std::fmt;

use crate::clients::errors::HttpError;

/// HTTP methods used by the Craton API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A service-routing hint attached to every request.
///
/// Deployments that resolve endpoints from a service catalog key off the
/// `service_type` value; the bundled transport passes it through untouched.
/// Craton registers itself under `fleet_management`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointFilter {
    /// The catalog service type this request targets.
    pub service_type: &'static str,
}

impl EndpointFilter {
    /// The filter selecting the Craton fleet management service.
    pub const FLEET_MANAGEMENT: Self = Self {
        service_type: "fleet_management",
    };
}

impl Default for EndpointFilter {
    fn default() -> Self {
        Self::FLEET_MANAGEMENT
    }
}

/// An HTTP request to be sent to the Craton API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. The URL is absolute: the CRUD layer builds it from the base URL
/// and resource path, and the pagination engine reuses `next` link URLs
/// verbatim.
///
/// # Example
///
/// ```rust
/// use craton_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get = HttpRequest::builder(HttpMethod::Get, "http://example.com/v1/hosts")
///     .query_param("limit", "30")
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let post = HttpRequest::builder(HttpMethod::Post, "http://example.com/v1/hosts")
///     .body(json!({"name": "compute-01"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL, in insertion order.
    pub query: Option<Vec<(String, String)>>,
    /// Routing hint identifying the target service.
    pub endpoint_filter: EndpointFilter,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the method is POST or PUT
    /// and no body was set.
    pub fn verify(&self) -> Result<(), HttpError> {
        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(HttpError::InvalidRequest {
                reason: format!("cannot use {} without a body", self.method),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    query: Option<Vec<(String, String)>>,
    endpoint_filter: EndpointFilter,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            query: None,
            endpoint_filter: EndpointFilter::FLEET_MANAGEMENT,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Overrides the endpoint filter (defaults to fleet management).
    #[must_use]
    pub const fn endpoint_filter(mut self, filter: EndpointFilter) -> Self {
        self.endpoint_filter = filter;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, HttpError> {
        let request = HttpRequest {
            method: self.method,
            url: self.url,
            body: self.body,
            query: self.query,
            endpoint_filter: self.endpoint_filter,
        };
        request.verify()?;
        Ok(request)
    }
}
