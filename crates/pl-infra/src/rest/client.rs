use std::time::Duration;

use pl_core::config::StoreConfig;
use pl_core::ports::QueryError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::query::TableQuery;

/// Path of the REST interface below the store's base URL.
pub const REST_PATH: &str = "/rest/v1";

const API_KEY_HEADER: &str = "apikey";

/// Handle to the remote store.
///
/// Cheap to share behind an `Arc`; the underlying `reqwest::Client` pools
/// connections. Every request carries the access key both as `apikey` and as
/// a bearer token.
pub struct RestClient {
    http: reqwest::Client,
    rest_url: String,
}

impl RestClient {
    pub fn new(config: &StoreConfig, timeout: Duration) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.anon_key)
            .map_err(|e| QueryError::InvalidRequest(format!("invalid access key: {}", e)))?;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| QueryError::InvalidRequest(format!("invalid access key: {}", e)))?;
        bearer.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| QueryError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            rest_url: format!("{}{}", config.url.trim_end_matches('/'), REST_PATH),
        })
    }

    /// Scoped accessor for one table.
    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery::new(self, name)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}
