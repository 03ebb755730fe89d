//! The lazy-loading resource record.
//!
//! Every CRUD operation materializes its payload as a [`Resource`]: a typed
//! record wrapping the raw field map the server returned. Field access is
//! non-failing ([`Resource::get_field`]); [`Resource::resolve`] adds a
//! one-shot lazy fetch for records that were constructed from a partial
//! listing, reporting the outcome as a [`Resolution`] value rather than a
//! failure.
//!
//! A resource remembers whether it has already been (re)loaded from the
//! service. The first miss on an unloaded record triggers exactly one
//! refresh; later misses never touch the network again, even if that
//! refresh failed.

use serde_json::{Map, Value};

use crate::clients::HttpError;
use crate::v1::crud::CrudClient;

/// Outcome of resolving a field on a [`Resource`].
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The field is present; the value is a copy of the stored one.
    Found(Value),
    /// The field was absent, a refresh was performed, and it is still absent.
    NotFoundAfterFetch,
    /// The field is absent and the record was already loaded, so no fetch
    /// was attempted.
    NotFoundNoFetch,
}

impl Resolution {
    /// Returns the value for `Found`, discarding the not-found cases.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFoundAfterFetch | Self::NotFoundNoFetch => None,
        }
    }
}

/// Error from the failing field accessor [`Resource::field`].
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The field does not exist on the record, even after a refresh.
    #[error("no field '{name}' on {kind} resource")]
    NoSuchField {
        /// The resource kind (e.g. `"host"`).
        kind: &'static str,
        /// The requested field name.
        name: String,
    },

    /// The refresh request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// A record from the Craton API.
///
/// The wrapped field map is the source of truth: equality, field access and
/// serialization all go through it. A detached resource (no manager) still
/// supports every read; only the lazy refresh needs a manager.
///
/// # Example
///
/// ```rust,ignore
/// let mut host = client.hosts().get("42").await?;
///
/// // Field that is always present:
/// let name = host.get_field("name");
///
/// // Field that may require a refresh if the record came from a listing:
/// let note = host.resolve("note").await?;
/// ```
#[derive(Clone, Debug)]
pub struct Resource {
    kind: &'static str,
    manager: Option<CrudClient>,
    info: Map<String, Value>,
    loaded: bool,
}

// Equality compares the record itself, never the manager or load state.
impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.info == other.info
    }
}

impl Resource {
    /// Wraps a field map as a resource of the given kind.
    ///
    /// Everything the CRUD client materializes, list items included,
    /// arrives with `loaded` set. Callers constructing a record from
    /// partial data pass `false` so a later field miss can trigger one
    /// refresh.
    #[must_use]
    pub fn new(
        kind: &'static str,
        manager: Option<CrudClient>,
        info: Map<String, Value>,
        loaded: bool,
    ) -> Self {
        Self {
            kind,
            manager,
            info,
            loaded,
        }
    }

    /// Returns the resource kind (the descriptor key, e.g. `"host"`).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns `true` once the record reflects a full fetch (or one was
    /// already attempted).
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns a field by name without any fetching.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.info.get(name)
    }

    /// Returns the record's identifier, if it carries one.
    ///
    /// Numeric and string ids are both rendered as strings, matching how
    /// they are spliced into URLs.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.info.get("id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns the full field map.
    #[must_use]
    pub const fn info(&self) -> &Map<String, Value> {
        &self.info
    }

    /// Converts the record back to a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.info.clone())
    }

    /// Resolves a field, refreshing the record at most once.
    ///
    /// Present fields are returned immediately. On a miss, an unloaded
    /// record is marked loaded and refreshed through its manager, then the
    /// lookup is retried once. A record without a manager or id is marked
    /// loaded without a fetch.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only if the refresh request itself fails; an
    /// absent field is reported through the [`Resolution`] variants.
    pub async fn resolve(&mut self, name: &str) -> Result<Resolution, HttpError> {
        if let Some(value) = self.info.get(name) {
            return Ok(Resolution::Found(value.clone()));
        }

        if self.loaded {
            return Ok(Resolution::NotFoundNoFetch);
        }

        // Marked before the fetch so a failed refresh is never repeated.
        self.loaded = true;
        self.refresh().await?;

        Ok(self.info.get(name).map_or(
            Resolution::NotFoundAfterFetch,
            |value| Resolution::Found(value.clone()),
        ))
    }

    /// Resolves a field, turning the not-found outcomes into [`FieldError`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NoSuchField`] if the field is absent after the
    /// (at most one) refresh, or [`FieldError::Http`] if the refresh failed.
    pub async fn field(&mut self, name: &str) -> Result<Value, FieldError> {
        match self.resolve(name).await? {
            Resolution::Found(value) => Ok(value),
            Resolution::NotFoundAfterFetch | Resolution::NotFoundNoFetch => {
                Err(FieldError::NoSuchField {
                    kind: self.kind,
                    name: name.to_string(),
                })
            }
        }
    }

    /// Re-fetches the record by id and merges the fresh fields in.
    ///
    /// A record without a manager or an id becomes loaded without any
    /// request. Fetched fields overwrite stored ones; stored fields the
    /// fetch did not return are kept.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the fetch fails.
    pub async fn refresh(&mut self) -> Result<(), HttpError> {
        self.loaded = true;

        let (Some(manager), Some(id)) = (self.manager.clone(), self.id()) else {
            tracing::debug!(kind = self.kind, "refresh skipped, record is detached");
            return Ok(());
        };

        let fresh = manager.get(&id).await?;
        for (key, value) in fresh.info {
            self.info.insert(key, value);
        }
        Ok(())
    }
}
