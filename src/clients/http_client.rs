//! HTTP transport for Craton API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests. The client performs exactly one request per call: retry policy,
//! if any, belongs to an outer layer, never here.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::CratonConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Craton API.
///
/// The client handles:
/// - Base URL storage (trailing slashes stripped by [`crate::CratonUrl`])
/// - Default headers including User-Agent and the session's auth headers
/// - JSON decoding of every response body
/// - Mapping non-success status codes to typed [`ApiError`]s
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone, making it safe to share
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use craton_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config, &session);
/// let request = HttpRequest::builder(HttpMethod::Get, format!("{}/hosts", client.base_url()))
///     .build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g. `https://craton.example.com/v1`), no trailing slash.
    base_url: String,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and session.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &CratonConfig, session: &Session) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Craton API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.extend(session.auth_headers());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one HTTP request to the Craton API.
    ///
    /// The request URL is used verbatim; callers build it from
    /// [`base_url`](Self::base_url) or take it from a pagination link.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection fails, times out, or drops while the body is being
    ///   read (`Network`)
    /// - A success response carries a non-JSON body (`Decode`)
    /// - The service answers with a 4xx or 5xx status (`Api`, typed per
    ///   status code)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            service_type = request.endpoint_filter.service_type,
            "dispatching request"
        );

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                // Non-JSON error bodies still map to their typed status
                // error, carrying the raw text as the message.
                Err(_) if code >= 400 => serde_json::json!({ "message": body_text }),
                Err(e) => {
                    return Err(HttpError::Decode {
                        reason: format!("response body is not valid JSON: {e}"),
                    })
                }
            }
        };

        if code >= 400 {
            let error = ApiError::from_status(code, &body);
            tracing::debug!(code, error = %error, "request failed");
            return Err(HttpError::Api(error));
        }

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
