//! Generic CRUD client bound to one resource collection.
//!
//! A [`CrudClient`] pairs the HTTP transport with a [`ResourceDescriptor`]
//! (the collection's key and base path) and implements the uniform
//! operation set every Craton collection supports: create, get, list,
//! update, delete and the `/variables` sub-resource.
//!
//! URL construction is pure and deterministic ([`CrudClient::build_url`]);
//! every operation issues exactly one request per page or item, with no
//! retries at this layer.

use std::collections::VecDeque;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::v1::pagination::{ListParams, Paginator};
use crate::v1::resource::Resource;
use crate::v1::variables::Variables;

/// The URL shape of one resource collection.
///
/// Both fields are fixed at definition time and never change; the derived
/// names (`{key}_id` path argument, `{key}s` list items key) follow from
/// `key` mechanically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// The singular resource name, e.g. `"host"`.
    pub key: &'static str,
    /// The collection path segment, e.g. `"/hosts"`.
    pub base_path: &'static str,
}

impl ResourceDescriptor {
    /// The sub-path every variable-carrying collection exposes.
    pub const VARIABLES_PATH: &'static str = "variables";

    /// Creates a descriptor for a collection.
    #[must_use]
    pub const fn new(key: &'static str, base_path: &'static str) -> Self {
        Self { key, base_path }
    }

    /// The path-argument name carrying an item id, e.g. `"host_id"`.
    #[must_use]
    pub fn key_id(&self) -> String {
        format!("{}_id", self.key)
    }

    /// The key list responses store their items under, e.g. `"hosts"`.
    #[must_use]
    pub fn plural(&self) -> String {
        format!("{}s", self.key)
    }
}

/// Merges per-client default fields under explicit ones.
///
/// Returns a fresh mapping; neither input is mutated. Explicit `fields`
/// always win over `defaults`, and `skip_merge` drops the defaults
/// entirely.
#[must_use]
pub fn merge_fields(
    defaults: &Map<String, Value>,
    fields: &Map<String, Value>,
    skip_merge: bool,
) -> Map<String, Value> {
    if skip_merge {
        return fields.clone();
    }
    let mut merged = defaults.clone();
    for (key, value) in fields {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// CRUD operations for one resource collection.
///
/// Cloning is cheap (the transport is reference-counted internally), so a
/// client can be handed to every [`Resource`] it materializes.
///
/// # Example
///
/// ```rust,ignore
/// use craton_api::v1::{CrudClient, ListParams, ResourceDescriptor};
///
/// let hosts = CrudClient::new(http, ResourceDescriptor::new("host", "/hosts"));
/// let host = hosts.create(json!({"name": "compute-01"})).await?;
/// let all = hosts.list(ListParams::new()).try_collect().await?;
/// ```
#[derive(Clone, Debug)]
pub struct CrudClient {
    http: HttpClient,
    descriptor: ResourceDescriptor,
    defaults: Map<String, Value>,
}

impl CrudClient {
    /// Creates a client with no default fields.
    #[must_use]
    pub fn new(http: HttpClient, descriptor: ResourceDescriptor) -> Self {
        Self::with_defaults(http, descriptor, Map::new())
    }

    /// Creates a client whose `defaults` are merged into every create,
    /// update and list call.
    ///
    /// The defaults are read-only after construction; each call copies
    /// them into its own parameter set.
    #[must_use]
    pub fn with_defaults(
        http: HttpClient,
        descriptor: ResourceDescriptor,
        defaults: Map<String, Value>,
    ) -> Self {
        Self {
            http,
            descriptor,
            defaults,
        }
    }

    /// Returns the descriptor this client is bound to.
    #[must_use]
    pub const fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Builds the URL for a request against this collection.
    ///
    /// Starts from `base_url + base_path`; a `"base_path"` entry in
    /// `path_args` overrides the instance path and is consumed (it is read
    /// fresh on every call, never cached). A `"{key}_id"` entry appends
    /// `/{id}`, and `variables` appends `/variables`.
    #[must_use]
    pub fn build_url(&self, mut path_args: Map<String, Value>, variables: bool) -> String {
        let base_path = match path_args.remove("base_path") {
            Some(Value::String(path)) => path,
            _ => self.descriptor.base_path.to_string(),
        };

        let mut url = format!("{}{base_path}", self.http.base_url());

        if let Some(id) = path_args.get(&self.descriptor.key_id()) {
            match id {
                Value::String(s) => url = format!("{url}/{s}"),
                other => url = format!("{url}/{other}"),
            }
        }

        if variables {
            url.push('/');
            url.push_str(ResourceDescriptor::VARIABLES_PATH);
        }

        url
    }

    /// Path arguments for an item operation.
    ///
    /// The positional id is defaulted in: an entry already present under
    /// `"{key}_id"` wins over `item_id`.
    fn item_args(&self, item_id: &str, mut path_args: Map<String, Value>) -> Map<String, Value> {
        path_args
            .entry(self.descriptor.key_id())
            .or_insert_with(|| Value::String(item_id.to_string()));
        path_args
    }

    fn item_url(&self, item_id: &str, variables: bool) -> String {
        self.build_url(self.item_args(item_id, Map::new()), variables)
    }

    fn resource_from(&self, body: &Value) -> Result<Resource, HttpError> {
        let info = body.as_object().cloned().ok_or_else(|| HttpError::Decode {
            reason: format!("{} response body is not a JSON object", self.descriptor.key),
        })?;
        Ok(Resource::new(
            self.descriptor.key,
            Some(self.clone()),
            info,
            true,
        ))
    }

    /// Creates a new item from `fields`, merged over the client defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures, typed API errors
    /// (422 for validation failures), or a non-object response body.
    pub async fn create(&self, fields: Value) -> Result<Resource, HttpError> {
        self.create_inner(fields, false).await
    }

    /// Creates a new item from `fields` alone, ignoring client defaults.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn create_skip_merge(&self, fields: Value) -> Result<Resource, HttpError> {
        self.create_inner(fields, true).await
    }

    async fn create_inner(&self, fields: Value, skip_merge: bool) -> Result<Resource, HttpError> {
        let fields = as_object(&fields)?;
        let body = Value::Object(merge_fields(&self.defaults, &fields, skip_merge));

        let request = HttpRequest::builder(HttpMethod::Post, self.build_url(Map::new(), false))
            .body(body)
            .build()?;
        let response = self.http.request(request).await?;
        self.resource_from(&response.body)
    }

    /// Fetches one item by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with [`ApiError::NotFound`] if no such
    /// item exists, or any other transport/API error.
    ///
    /// [`ApiError::NotFound`]: crate::clients::ApiError::NotFound
    pub async fn get(&self, item_id: &str) -> Result<Resource, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, self.item_url(item_id, false)).build()?;
        let response = self.http.request(request).await?;
        self.resource_from(&response.body)
    }

    /// Starts a list over this collection.
    ///
    /// The returned [`ResourceList`] is lazy and single-pass: items are
    /// pulled page by page, and abandoning it stops issuing requests. Each
    /// `list` call starts pagination fresh. Client defaults are merged
    /// into the query unless the same key is already set on `params`.
    #[must_use]
    pub fn list(&self, mut params: ListParams) -> ResourceList {
        for (key, value) in &self.defaults {
            if !params.contains(key) {
                params = params.param(key.clone(), query_string(value));
            }
        }

        let paginator = Paginator::new(
            self.http.clone(),
            self.build_url(Map::new(), false),
            self.descriptor.plural(),
            params,
        );
        ResourceList {
            paginator,
            manager: self.clone(),
            buffer: VecDeque::new(),
        }
    }

    /// Updates one item with `fields`, merged over the client defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or typed API errors
    /// (404 if the item does not exist).
    pub async fn update(&self, item_id: &str, fields: Value) -> Result<Resource, HttpError> {
        let fields = as_object(&fields)?;
        let body = Value::Object(merge_fields(&self.defaults, &fields, false));

        let request = HttpRequest::builder(HttpMethod::Put, self.item_url(item_id, false))
            .body(body)
            .build()?;
        let response = self.http.request(request).await?;
        self.resource_from(&response.body)
    }

    /// Deletes one item.
    ///
    /// Returns `true` iff the response status is in `[200, 300)`. All 4xx
    /// and 5xx statuses, including 404, surface as typed errors rather
    /// than `false`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or typed API errors.
    pub async fn delete(&self, item_id: &str) -> Result<bool, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, self.item_url(item_id, false)).build()?;
        let response = self.http.request(request).await?;
        Ok(response.is_ok())
    }

    /// Fetches the variable document attached to one item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures, typed API errors, or
    /// a body missing the `variables` object.
    pub async fn get_variables(&self, item_id: &str) -> Result<Variables, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, self.item_url(item_id, true)).build()?;
        let response = self.http.request(request).await?;
        Variables::from_response(&response.body)
    }

    /// Partially updates the variable document attached to one item.
    ///
    /// `fields` is a JSON object of variables to set; keys not named are
    /// left untouched by the service.
    ///
    /// # Errors
    ///
    /// Same as [`get_variables`](Self::get_variables).
    pub async fn set_variables(&self, item_id: &str, fields: Value) -> Result<Variables, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, self.item_url(item_id, true))
            .body(fields)
            .build()?;
        let response = self.http.request(request).await?;
        Variables::from_response(&response.body)
    }

    /// Deletes variables by key from one item's document.
    ///
    /// The key list is sent as the JSON body of the DELETE. Returns `true`
    /// iff the response status is in `[200, 300)`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport failures or typed API errors.
    pub async fn delete_variables(&self, item_id: &str, keys: &[&str]) -> Result<bool, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, self.item_url(item_id, true))
            .body(Value::Array(
                keys.iter().map(|k| Value::String((*k).to_string())).collect(),
            ))
            .build()?;
        let response = self.http.request(request).await?;
        Ok(response.is_ok())
    }
}

fn as_object(fields: &Value) -> Result<Map<String, Value>, HttpError> {
    fields
        .as_object()
        .cloned()
        .ok_or_else(|| HttpError::InvalidRequest {
            reason: "fields must be a JSON object".to_string(),
        })
}

/// Renders a default value as a query-string value.
fn query_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A lazy, single-pass sequence of [`Resource`]s from one `list()` call.
///
/// Pages are fetched on demand; page N+1 is requested only once page N has
/// been fully handed out. Dropping the list mid-way stops all further
/// requests.
#[derive(Debug)]
pub struct ResourceList {
    paginator: Paginator,
    manager: CrudClient,
    buffer: VecDeque<Value>,
}

impl ResourceList {
    /// Pulls the next item, fetching the next page when the current one is
    /// exhausted. Returns `None` once pagination has finished.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if a page request fails or an item is not a
    /// JSON object.
    pub async fn try_next(&mut self) -> Result<Option<Resource>, HttpError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(self.manager.resource_from(&item)?));
            }
            match self.paginator.try_next_page().await? {
                Some(page) => self.buffer.extend(page.items),
                None => return Ok(None),
            }
        }
    }

    /// Drains the whole sequence into a vector.
    ///
    /// With auto-pagination enabled this walks every page; in manual mode
    /// it returns exactly one page's items.
    ///
    /// # Errors
    ///
    /// Same as [`try_next`](Self::try_next).
    pub async fn try_collect(mut self) -> Result<Vec<Resource>, HttpError> {
        let mut items = Vec::new();
        while let Some(resource) = self.try_next().await? {
            items.push(resource);
        }
        Ok(items)
    }
}
