//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type along with the [`Link`]
//! structure Craton embeds in list response bodies for pagination.

use std::collections::HashMap;

use serde::Deserialize;

/// A pagination link from a list response body.
///
/// List responses carry a body-level `"links"` array of `{rel, href}`
/// objects; an entry with `rel == "next"` signals more pages exist.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// The link relation (e.g. `"next"`, `"prev"`, `"self"`).
    pub rel: String,
    /// The absolute URL of the linked page.
    pub href: String,
}

/// An HTTP response from the Craton API.
///
/// Contains the response status code, headers and decoded JSON body. The
/// transport only returns responses the error mapper considers successful,
/// so consumers never have to inspect failure statuses themselves.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the pagination links from the body, if any.
    ///
    /// Entries that do not match the `{rel, href}` shape are skipped.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        self.body
            .get("links")
            .and_then(serde_json::Value::as_array)
            .map_or_else(Vec::new, |entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
    }

    /// Returns the URL of the next page, if the body advertises one.
    #[must_use]
    pub fn next_link(&self) -> Option<String> {
        self.links()
            .into_iter()
            .find(|link| link.rel == "next")
            .map(|link| link.href)
    }
}
