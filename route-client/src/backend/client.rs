//! HTTP client for the routing backend.

use serde::de::DeserializeOwned;

use crate::planner::RoutingBackend;

use super::error::BackendError;
use super::types::{RouteQuery, RouteResponse, Stop};

/// Default origin of the routing backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the routing backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the routing backend's `/api` endpoints.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutingClient {
    /// Create a new routing backend client.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full stop catalog, in backend order.
    pub async fn fetch_stops(&self) -> Result<Vec<Stop>, BackendError> {
        let url = format!("{}/api/stops", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// Ask the backend for route options.
    pub async fn fetch_route(&self, query: &RouteQuery) -> Result<RouteResponse, BackendError> {
        let url = format!("{}/api/route", self.base_url);
        self.get_json(&url, &query.query_pairs()).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| BackendError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl RoutingBackend for RoutingClient {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, BackendError> {
        RoutingClient::fetch_stops(self).await
    }

    async fn fetch_route(&self, query: &RouteQuery) -> Result<RouteResponse, BackendError> {
        RoutingClient::fetch_route(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = BackendConfig::default()
            .with_base_url("http://routing.internal:9000/")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://routing.internal:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = RoutingClient::new(BackendConfig::default()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
