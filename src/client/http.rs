//! REST client for the MySQL Router management API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{
    ClientError, ItemList, MetadataConfig, MetadataEntry, MetadataStatus, Route, RouteConnection,
    RouteDestination, RouteHealth, RouteStatus, RouterClient, RouterStatus,
};

/// REST API version path segment served by MySQL Router 8.0.
pub const API_VERSION: &str = "20190715";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`RouterClient`] backed by the router's REST API over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpRouterClient {
    client: Client,
    base: Url,
    username: String,
    password: String,
}

impl HttpRouterClient {
    /// Creates a new builder for configuring the client.
    pub fn builder() -> HttpRouterClientBuilder {
        HttpRouterClientBuilder::default()
    }

    /// Builds a client and checks that the router answers with the given
    /// credentials.
    pub async fn connect(
        url: &str,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Self::builder()
            .endpoint(url)
            .credentials(username, password)
            .timeout(timeout)
            .build()?;

        let status = client.router_status().await?;
        tracing::info!(
            router = %status.hostname,
            version = %status.version,
            "Connected to router API"
        );

        Ok(client)
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("api")
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.url(segments)?;
        tracing::trace!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ClientError::Auth(url.to_string()));
            }
            status if !status.is_success() => {
                return Err(ClientError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(format!("{url}: {e}")))
    }

    async fn get_items<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, ClientError> {
        let list: ItemList<T> = self.get(segments).await?;
        Ok(list.items)
    }
}

#[async_trait]
impl RouterClient for HttpRouterClient {
    async fn router_status(&self) -> Result<RouterStatus, ClientError> {
        self.get(&["router", "status"]).await
    }

    async fn all_metadata(&self) -> Result<Vec<MetadataEntry>, ClientError> {
        self.get_items(&["metadata"]).await
    }

    async fn metadata_config(&self, name: &str) -> Result<MetadataConfig, ClientError> {
        self.get(&["metadata", name, "config"]).await
    }

    async fn metadata_status(&self, name: &str) -> Result<MetadataStatus, ClientError> {
        self.get(&["metadata", name, "status"]).await
    }

    async fn all_routes(&self) -> Result<Vec<Route>, ClientError> {
        self.get_items(&["routes"]).await
    }

    async fn route_status(&self, name: &str) -> Result<RouteStatus, ClientError> {
        self.get(&["routes", name, "status"]).await
    }

    async fn route_health(&self, name: &str) -> Result<RouteHealth, ClientError> {
        self.get(&["routes", name, "health"]).await
    }

    async fn route_destinations(&self, name: &str) -> Result<Vec<RouteDestination>, ClientError> {
        self.get_items(&["routes", name, "destinations"]).await
    }

    async fn route_connections(&self, name: &str) -> Result<Vec<RouteConnection>, ClientError> {
        self.get_items(&["routes", name, "connections"]).await
    }
}

/// Builder for [`HttpRouterClient`].
#[derive(Debug, Default)]
pub struct HttpRouterClientBuilder {
    endpoint: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout: Option<Duration>,
}

impl HttpRouterClientBuilder {
    /// Sets the router API base URL (e.g. "https://router:8443").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the basic auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets the per-request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client without contacting the router.
    pub fn build(self) -> Result<HttpRouterClient, ClientError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::InvalidUrl("no endpoint configured".to_string()))?;
        let base = Url::parse(&endpoint).map_err(|e| ClientError::InvalidUrl(format!("{endpoint}: {e}")))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(endpoint));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(HttpRouterClient {
            client,
            base,
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}
