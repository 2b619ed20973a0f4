use crate::retry::{RetryPolicy, with_retry, with_retry_if};
use crate::ttl_cache::TtlCache;
use crate::{CliClientResult, ClientError};

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use futures::future::try_join_all;
use iam_config::Config;
use iam_core::{ListOptions, PagedData, Role, UNKNOWN_ROLE_NAME, User, UserRecord, Validate};
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

const JSON_CONTENT_TYPE: &str = "application/json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_CAPACITY: usize = 100;
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

const USERS_PATH: &str = "users";
const ROLES_PATH: &str = "roles";

/// HTTP client for the IAM REST API
pub struct Client {
    base_url: Url,
    http: ReqwestClient,
    retry: RetryPolicy,
    roles_by_id: TtlCache<Role>,
    users_by_id: TtlCache<User>,
}

impl Client {
    /// Create a client with default retry, timeout and cache settings
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:3002")
    pub fn new(base_url: &str) -> CliClientResult<Self> {
        Self::build(
            base_url,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            RetryPolicy::default(),
            DEFAULT_CACHE_CAPACITY,
            Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        )
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> CliClientResult<Self> {
        Self::build(
            &config.api.base_url,
            config.api.timeout(),
            RetryPolicy::from(&config.retry),
            config.cache.capacity,
            config.cache.ttl(),
        )
    }

    fn build(
        base_url: &str,
        timeout: Duration,
        retry: RetryPolicy,
        cache_capacity: usize,
        cache_ttl: Duration,
    ) -> CliClientResult<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let http = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            http,
            retry,
            roles_by_id: TtlCache::new("role", cache_capacity, cache_ttl),
            users_by_id: TtlCache::new("user", cache_capacity, cache_ttl),
        })
    }

    fn parse_base_url(base_url: &str) -> CliClientResult<Url> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| ClientError::invalid_url(base_url, e.to_string()))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::invalid_url(
                base_url,
                "expected an absolute http(s) URL",
            ));
        }

        Ok(url)
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Roles cached by id
    pub fn role_cache(&self) -> &TtlCache<Role> {
        &self.roles_by_id
    }

    /// Users cached by id
    pub fn user_cache(&self) -> &TtlCache<User> {
        &self.users_by_id
    }

    /// Drop every cached user and role
    pub fn clear_caches(&self) {
        self.roles_by_id.clear();
        self.users_by_id.clear();
    }

    /// Build an endpoint URL below the base URL.
    /// Segments are percent-encoded, so an id can never change the path.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> CliClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(self.base_url.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Send a request and return its JSON body.
    ///
    /// Fails on non-2xx status and on a non-JSON `content-type`. An empty
    /// success body yields `None` unless a GET declares a non-JSON type.
    async fn execute(&self, method: Method, url: &Url) -> CliClientResult<Option<Value>> {
        debug!("{} {}", method, url);

        let response = self.http.request(method.clone(), url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status"),
                url.as_str(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE));
        let is_blank = body.iter().all(u8::is_ascii_whitespace);

        if is_blank && (is_json || content_type.is_none() || method == Method::DELETE) {
            return Ok(None);
        }

        if !is_json {
            return Err(ClientError::not_json(
                url.as_str(),
                content_type.unwrap_or_default(),
            ));
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// GET a JSON document; an empty body is treated as malformed
    async fn fetch_json(&self, url: &Url) -> CliClientResult<Value> {
        self.execute(Method::GET, url)
            .await?
            .ok_or_else(|| ClientError::validation(format!("{} returned an empty body", url)))
    }

    /// Decode and validate a response body. Fails closed on any shape mismatch.
    fn parse<T: DeserializeOwned + Validate>(value: Value) -> CliClientResult<T> {
        let parsed: T =
            serde_json::from_value(value).map_err(|e| ClientError::validation(e.to_string()))?;
        Ok(parsed.into_validated()?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List one page of users, each joined with its role name
    pub async fn fetch_users(&self, options: &ListOptions) -> CliClientResult<PagedData<User>> {
        let url = self.endpoint(&[USERS_PATH], &options.query_pairs())?;

        let json = with_retry(&self.retry, "fetch_users", || self.fetch_json(&url)).await?;
        let page: PagedData<UserRecord> = Self::parse(json)?;

        let mut seen = HashSet::new();
        let role_ids: Vec<String> = page
            .data
            .iter()
            .filter(|user| seen.insert(user.role_id))
            .map(|user| user.role_id.to_string())
            .collect();

        let roles = try_join_all(role_ids.iter().map(|id| self.fetch_role_by_id(id))).await?;
        let role_names: HashMap<Uuid, String> =
            roles.into_iter().map(|role| (role.id, role.name)).collect();

        let users = page
            .data
            .iter()
            .map(|record| {
                let role = role_names
                    .get(&record.role_id)
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_ROLE_NAME);
                User::from_record(record.clone(), role)
            })
            .collect();

        Ok(page.with_data(users))
    }

    /// Get a user by ID, served from cache while fresh
    pub async fn fetch_user_by_id(&self, id: &str) -> CliClientResult<User> {
        if let Some(user) = Self::cached(&self.users_by_id, id) {
            return Ok(user);
        }

        let url = self.endpoint(&[USERS_PATH, id], &[])?;
        let json = with_retry_if(
            &self.retry,
            "fetch_user_by_id",
            |e: &ClientError| !e.is_not_found(),
            || self.fetch_json(&url),
        )
        .await?;
        let record: UserRecord = Self::parse(json)?;

        let role = self.fetch_role_by_id(&record.role_id.to_string()).await?;
        let user = User::from_record(record, role.name);

        self.users_by_id.set(id, user.clone());
        Ok(user)
    }

    /// Delete a user by ID.
    ///
    /// The cached copy is dropped before the request and again once it
    /// settles, whatever the outcome.
    pub async fn delete_user_by_id(&self, id: &str) -> CliClientResult<()> {
        self.users_by_id.delete(id);

        let result = match self.endpoint(&[USERS_PATH, id], &[]) {
            Ok(url) => {
                with_retry_if(
                    &self.retry,
                    "delete_user_by_id",
                    |e: &ClientError| !e.is_not_found(),
                    || self.execute(Method::DELETE, &url),
                )
                .await
            }
            Err(e) => Err(e),
        };

        self.users_by_id.delete(id);
        result.map(|_| ())
    }

    // =========================================================================
    // Role Operations
    // =========================================================================

    /// List one page of roles. Every role on the page is cached by id.
    pub async fn fetch_roles(&self, options: &ListOptions) -> CliClientResult<PagedData<Role>> {
        let url = self.endpoint(&[ROLES_PATH], &options.query_pairs())?;

        let json = with_retry(&self.retry, "fetch_roles", || self.fetch_json(&url)).await?;
        let page: PagedData<Role> = Self::parse(json)?;

        for role in &page.data {
            self.roles_by_id.set(role.id.to_string(), role.clone());
        }

        Ok(page)
    }

    /// Get a role by ID, served from cache while fresh
    pub async fn fetch_role_by_id(&self, id: &str) -> CliClientResult<Role> {
        if let Some(role) = Self::cached(&self.roles_by_id, id) {
            return Ok(role);
        }

        let url = self.endpoint(&[ROLES_PATH, id], &[])?;
        let json = with_retry_if(
            &self.retry,
            "fetch_role_by_id",
            |e: &ClientError| !e.is_not_found(),
            || self.fetch_json(&url),
        )
        .await?;
        let role: Role = Self::parse(json)?;

        self.roles_by_id.set(id, role.clone());
        Ok(role)
    }

    /// Cached value for `id`, re-validated; an invalid entry is evicted
    fn cached<V: Clone + Validate>(cache: &TtlCache<V>, id: &str) -> Option<V> {
        let value = cache.get(id)?;

        match value.validate() {
            Ok(()) => {
                debug!("cache hit for {}", id);
                Some(value)
            }
            Err(e) => {
                warn!("discarding invalid cache entry {}: {}", id, e);
                cache.delete(id);
                None
            }
        }
    }
}
