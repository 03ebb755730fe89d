//! Marker-based pagination over list endpoints.
//!
//! Craton list endpoints page with an opaque `marker` cursor and advertise
//! the following page through a body-level `next` link. The [`Paginator`]
//! turns such an endpoint into a pull-based sequence of [`Page`]s with two
//! modes:
//!
//! - **auto-pagination** (default): every `next` link is followed until a
//!   page comes back empty or no `next` link remains
//! - **manual pagination**: exactly one page per `list()` call; the caller
//!   passes the next `marker` explicitly
//!
//! Pages are fetched strictly sequentially: the request for page N+1 is only
//! issued after page N has been decoded, and abandoning the sequence simply
//! stops issuing requests. There is no background prefetch.

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

/// Query parameters for a list operation.
///
/// Marker, limit and sort values are opaque to the pagination engine; they
/// are serialized into the first request's query string and never
/// re-derived. Follow-up requests use the server's `next` link verbatim,
/// which already encodes an updated marker and limit.
///
/// # Example
///
/// ```rust
/// use craton_api::v1::ListParams;
///
/// let params = ListParams::new()
///     .limit(30)
///     .marker("a2f5e0c0")
///     .autopaginate(false);
/// ```
#[derive(Clone, Debug)]
pub struct ListParams {
    pub(crate) autopaginate: bool,
    pub(crate) query: Vec<(String, String)>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            autopaginate: true,
            query: Vec::new(),
        }
    }
}

impl ListParams {
    /// Creates parameters with auto-pagination enabled and no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables following `next` links (default: enabled).
    #[must_use]
    pub const fn autopaginate(mut self, autopaginate: bool) -> Self {
        self.autopaginate = autopaginate;
        self
    }

    /// Sets the pagination cursor for the first fetched page.
    #[must_use]
    pub fn marker(self, marker: impl Into<String>) -> Self {
        self.param("marker", marker)
    }

    /// Sets the page size.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit.to_string())
    }

    /// Sets the field the server should sort by.
    #[must_use]
    pub fn sort_key(self, key: impl Into<String>) -> Self {
        self.param("sort_keys", key)
    }

    /// Sets the sort direction (`asc` or `desc`).
    #[must_use]
    pub fn sort_dir(self, dir: impl Into<String>) -> Self {
        self.param("sort_dir", dir)
    }

    /// Adds an arbitrary filter parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Returns `true` if the given query key is already set.
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }
}

/// One fetched page: the raw response plus the decoded item array.
#[derive(Clone, Debug)]
pub struct Page {
    /// The raw response the page was decoded from (carries the `next` link).
    pub response: HttpResponse,
    /// The items under the resource's plural key, in server order.
    pub items: Vec<Value>,
}

/// Pull-based page fetcher for one list call.
///
/// A `Paginator` is single-pass: each call to `try_next_page` issues at most
/// one GET. The cursor (the last-seen `next` link) lives only inside this
/// value and is dropped with it. It holds its own handle to the transport
/// (cloning one is cheap), so it stays usable independently of the client
/// that created it.
#[derive(Debug)]
pub struct Paginator {
    http: HttpClient,
    url: String,
    items_key: String,
    params: Vec<(String, String)>,
    autopaginate: bool,
    next_url: Option<String>,
    started: bool,
    done: bool,
}

impl Paginator {
    /// Creates a paginator for `url`, extracting items under `items_key`.
    #[must_use]
    pub fn new(
        http: HttpClient,
        url: impl Into<String>,
        items_key: impl Into<String>,
        params: ListParams,
    ) -> Self {
        Self {
            http,
            url: url.into(),
            items_key: items_key.into(),
            params: params.query,
            autopaginate: params.autopaginate,
            next_url: None,
            started: false,
            done: false,
        }
    }

    /// Fetches the next page, or returns `None` once pagination is exhausted.
    ///
    /// The first request uses the constructor's URL and parameters verbatim;
    /// in auto mode every later request uses the previous response's `next`
    /// link verbatim. Termination: a page with an empty item array, a
    /// response without a `next` link, or (in manual mode) the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures, typed API errors, or a
    /// list body missing the expected plural key.
    pub async fn try_next_page(&mut self) -> Result<Option<Page>, HttpError> {
        if self.done {
            return Ok(None);
        }

        let request = if self.started {
            let Some(url) = self.next_url.take() else {
                self.done = true;
                return Ok(None);
            };
            HttpRequest::builder(HttpMethod::Get, url).build()?
        } else {
            self.started = true;
            let mut builder = HttpRequest::builder(HttpMethod::Get, self.url.clone());
            if !self.params.is_empty() {
                builder = builder.query(self.params.clone());
            }
            builder.build()?
        };

        let response = self.http.request(request).await?;

        let items = response
            .body
            .get(&self.items_key)
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| HttpError::Decode {
                reason: format!("missing '{}' array in list response", self.items_key),
            })?;

        tracing::debug!(
            items_key = %self.items_key,
            count = items.len(),
            "fetched page"
        );

        if !self.autopaginate || items.is_empty() {
            self.done = true;
        } else if let Some(next) = response.next_link() {
            self.next_url = Some(next);
        } else {
            self.done = true;
        }

        Ok(Some(Page { response, items }))
    }

    /// Returns `true` once no further pages will be requested.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default_autopaginates() {
        let params = ListParams::new();
        assert!(params.autopaginate);
        assert!(params.query.is_empty());
    }

    #[test]
    fn test_list_params_builders_accumulate_query_pairs() {
        let params = ListParams::new()
            .limit(30)
            .marker("42")
            .sort_key("name")
            .sort_dir("asc")
            .param("region_id", "7");

        assert_eq!(params.query.len(), 5);
        assert!(params.contains("marker"));
        assert!(params.contains("limit"));
        assert!(params.contains("sort_keys"));
        assert!(!params.contains("cell_id"));
    }

    #[test]
    fn test_list_params_manual_mode() {
        let params = ListParams::new().autopaginate(false);
        assert!(!params.autopaginate);
    }
}
