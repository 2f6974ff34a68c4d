//! Router management API payloads.
//!
//! Every type here is a read-only snapshot deserialized from one API
//! response. None of them outlive the sampling cycle that fetched them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper used by every list endpoint (`{"items": [...]}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// Entries of the list; absent means empty.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Identity of the router process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterStatus {
    /// Operating system process id.
    pub process_id: u32,
    /// Product edition string, e.g. "MySQL Community - GPL".
    pub product_edition: String,
    /// When the router process started.
    pub time_started: DateTime<Utc>,
    /// Router version.
    pub version: String,
    /// Hostname the router runs on.
    pub hostname: String,
}

/// A named cluster metadata cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Cache name, used in the per-cache endpoints.
    pub name: String,
}

/// Configuration of a metadata cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataConfig {
    /// InnoDB cluster the cache tracks.
    pub cluster_name: String,
    /// Refresh interval in milliseconds.
    pub time_refresh_in_ms: u64,
    /// Group replication id of the cluster.
    #[serde(default)]
    pub group_replication_id: String,
    /// Metadata servers, in the order the router reports them.
    #[serde(default)]
    pub nodes: Vec<ConfigNode>,
}

/// One metadata server of a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Server host.
    pub hostname: String,
    /// Server port.
    pub port: u16,
}

/// Refresh state of a metadata cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataStatus {
    /// Failed refreshes since start.
    pub refresh_failed: u64,
    /// Successful refreshes since start.
    #[serde(default)]
    pub refresh_succeeded: u64,
    /// Absent until the first successful refresh.
    #[serde(default)]
    pub time_last_refresh_succeeded: Option<DateTime<Utc>>,
    /// Server used by the last refresh.
    #[serde(default)]
    pub last_refresh_hostname: String,
    /// Port of the server used by the last refresh.
    #[serde(default)]
    pub last_refresh_port: u16,
}

/// A named routing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route name, used in the per-route endpoints.
    pub name: String,
}

/// Connection counters of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatus {
    /// Connections currently open.
    pub active_connections: u64,
    /// Connections accepted since start.
    pub total_connections: u64,
    /// Client hosts blocked for too many errors.
    pub blocked_hosts: u64,
}

/// Liveness of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteHealth {
    /// Whether the route accepts connections.
    pub is_alive: bool,
}

/// A backend a route forwards to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDestination {
    /// Destination host.
    pub address: String,
    /// Destination port.
    pub port: u16,
}

/// A client connection currently held by a route.
///
/// Timestamps are `None` when the event has not happened yet (for example
/// nothing was sent to the server so far).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConnection {
    /// Bytes received from the backend.
    pub bytes_from_server: u64,
    /// Bytes sent to the backend.
    pub bytes_to_server: u64,
    /// Client `host:port`.
    pub source_address: String,
    /// Backend `host:port`.
    pub destination_address: String,
    /// When the client connected.
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    /// When the backend connection was established.
    #[serde(default)]
    pub time_connected_to_server: Option<DateTime<Utc>>,
    /// Last write to the backend.
    #[serde(default)]
    pub time_last_sent_to_server: Option<DateTime<Utc>>,
    /// Last read from the backend.
    #[serde(default)]
    pub time_last_received_from_server: Option<DateTime<Utc>>,
}
