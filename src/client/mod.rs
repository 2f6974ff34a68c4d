//! Access to the router management API.
//!
//! The sampler only depends on the [`RouterClient`] trait. Two
//! implementations ship with the crate: [`HttpRouterClient`] talks to a
//! live router over its REST API, and [`MockRouterClient`] serves fixed
//! in-memory data for tests.

mod http;
mod mock;
mod types;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

pub use http::{HttpRouterClient, HttpRouterClientBuilder, API_VERSION};
pub use mock::{MetadataFixture, MockRouterClient, RouteFixture};
pub use types::{
    ConfigNode, ItemList, MetadataConfig, MetadataEntry, MetadataStatus, Route, RouteConnection,
    RouteDestination, RouteHealth, RouteStatus, RouterStatus,
};

/// Errors returned by a [`RouterClient`] call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL cannot be used to build API paths.
    #[error("invalid router API url: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// The router rejected the credentials.
    #[error("authentication failed for {0}")]
    Auth(String),

    /// The router answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The router could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// No answer within the request timeout.
    #[error("request timed out")]
    Timeout,

    /// The response body did not match the expected payload.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Any other transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failure injected by [`MockRouterClient`].
    #[error("injected failure: {0}")]
    Injected(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

/// The nine router API calls, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /router/status`
    RouterStatus,
    /// `GET /metadata`
    AllMetadata,
    /// `GET /metadata/{name}/config`
    MetadataConfig,
    /// `GET /metadata/{name}/status`
    MetadataStatus,
    /// `GET /routes`
    AllRoutes,
    /// `GET /routes/{name}/status`
    RouteStatus,
    /// `GET /routes/{name}/health`
    RouteHealth,
    /// `GET /routes/{name}/destinations`
    RouteDestinations,
    /// `GET /routes/{name}/connections`
    RouteConnections,
}

impl Operation {
    /// Human-readable name used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RouterStatus => "router status",
            Self::AllMetadata => "metadata list",
            Self::MetadataConfig => "metadata config",
            Self::MetadataStatus => "metadata status",
            Self::AllRoutes => "route list",
            Self::RouteStatus => "route status",
            Self::RouteHealth => "route health",
            Self::RouteDestinations => "route destinations",
            Self::RouteConnections => "route connections",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to a router's runtime state.
///
/// Each call is an independent request; implementations must not cache
/// across calls, since the sampler expects fresh data every cycle.
#[async_trait]
pub trait RouterClient: Send + Sync {
    /// Fetches the router process identity.
    async fn router_status(&self) -> Result<RouterStatus, ClientError>;

    /// Lists all metadata caches.
    async fn all_metadata(&self) -> Result<Vec<MetadataEntry>, ClientError>;

    /// Fetches the configuration of one metadata cache.
    async fn metadata_config(&self, name: &str) -> Result<MetadataConfig, ClientError>;

    /// Fetches the refresh status of one metadata cache.
    async fn metadata_status(&self, name: &str) -> Result<MetadataStatus, ClientError>;

    /// Lists all routes.
    async fn all_routes(&self) -> Result<Vec<Route>, ClientError>;

    /// Fetches the connection counters of one route.
    async fn route_status(&self, name: &str) -> Result<RouteStatus, ClientError>;

    /// Fetches the liveness of one route.
    async fn route_health(&self, name: &str) -> Result<RouteHealth, ClientError>;

    /// Lists the destinations of one route.
    async fn route_destinations(&self, name: &str) -> Result<Vec<RouteDestination>, ClientError>;

    /// Lists the open connections of one route.
    async fn route_connections(&self, name: &str) -> Result<Vec<RouteConnection>, ClientError>;
}
