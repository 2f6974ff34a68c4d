//! Gauge families exported for a MySQL Router.

use super::{MetricSet, MetricsError};

/// Prefix shared by every exported family.
pub const NAMESPACE: &str = "mysqlrouter";

/// Router identity, one series.
pub const ROUTER_STATUS: &str = "mysqlrouter_router_status";
/// One series per metadata cache.
pub const METADATA: &str = "mysqlrouter_metadata";
/// Metadata cache configuration.
pub const METADATA_CONFIG: &str = "mysqlrouter_metadata_config";
/// One series per metadata server.
pub const METADATA_CONFIG_NODE: &str = "mysqlrouter_metadata_config_node";
/// Metadata cache refresh state.
pub const METADATA_STATUS: &str = "mysqlrouter_metadata_status";
/// One series per route.
pub const ROUTE: &str = "mysqlrouter_route";
/// Open connections of a route.
pub const ROUTE_ACTIVE_CONNECTIONS: &str = "mysqlrouter_route_active_connections";
/// Accepted connections of a route.
pub const ROUTE_TOTAL_CONNECTIONS: &str = "mysqlrouter_route_total_connections";
/// Blocked client hosts of a route.
pub const ROUTE_BLOCKED_HOSTS: &str = "mysqlrouter_route_blocked_hosts";
/// 1 when the route is alive, 0 otherwise.
pub const ROUTE_HEALTH: &str = "mysqlrouter_route_health";
/// One series per route destination.
pub const ROUTE_DESTINATIONS: &str = "mysqlrouter_route_destinations";
/// Bytes received from the backend, per connection.
pub const ROUTE_CONNECTIONS_BYTE_FROM_SERVER: &str = "mysqlrouter_route_connections_byte_from_server";
/// Bytes sent to the backend, per connection.
pub const ROUTE_CONNECTIONS_BYTE_TO_SERVER: &str = "mysqlrouter_route_connections_byte_to_server";
/// Connection start, ms since epoch.
pub const ROUTE_CONNECTIONS_TIME_STARTED: &str = "mysqlrouter_route_connections_time_started";
/// Backend connect time, ms since epoch.
pub const ROUTE_CONNECTIONS_TIME_CONNECTED_TO_SERVER: &str =
    "mysqlrouter_route_connections_time_connected_to_server";
/// Last write to the backend, ms since epoch.
pub const ROUTE_CONNECTIONS_TIME_LAST_SENT_TO_SERVER: &str =
    "mysqlrouter_route_connections_time_last_sent_to_server";
/// Last read from the backend, ms since epoch.
pub const ROUTE_CONNECTIONS_TIME_LAST_RECEIVED_FROM_SERVER: &str =
    "mysqlrouter_route_connections_time_last_received_from_server";

const ROUTE_LABELS: &[&str] = &["name", "router_hostname"];
const CONNECTION_LABELS: &[&str] = &[
    "name",
    "router_hostname",
    "source_address",
    "destination_address",
];

/// Every family as (name, help, label names).
pub const FAMILIES: &[(&str, &str, &[&str])] = &[
    (
        ROUTER_STATUS,
        "MySQL Router information",
        &["process_id", "product_edition", "time_started", "version", "hostname"],
    ),
    (METADATA, "metadata list", &["name"]),
    (
        METADATA_CONFIG,
        "metadata config",
        &["name", "cluster_name", "time_refresh_in_ms", "group_replication_id"],
    ),
    (
        METADATA_CONFIG_NODE,
        "metadata config node",
        &["name", "router_host", "cluster_name", "hostname", "port"],
    ),
    (
        METADATA_STATUS,
        "metadata status",
        &[
            "name",
            "refresh_failed",
            "time_last_refresh_succeeded",
            "last_refresh_hostname",
            "last_refresh_port",
        ],
    ),
    (ROUTE, "route name", &["name"]),
    (ROUTE_ACTIVE_CONNECTIONS, "route active connections", ROUTE_LABELS),
    (ROUTE_TOTAL_CONNECTIONS, "route total connections", ROUTE_LABELS),
    (ROUTE_BLOCKED_HOSTS, "route blocked hosts", ROUTE_LABELS),
    (ROUTE_HEALTH, "0: not active, 1: active", ROUTE_LABELS),
    (ROUTE_DESTINATIONS, "route destinations", &["name", "address", "port"]),
    (
        ROUTE_CONNECTIONS_BYTE_FROM_SERVER,
        "Route connections byte from server",
        CONNECTION_LABELS,
    ),
    (
        ROUTE_CONNECTIONS_BYTE_TO_SERVER,
        "Route connections byte to server",
        CONNECTION_LABELS,
    ),
    (
        ROUTE_CONNECTIONS_TIME_STARTED,
        "Route connections time started (ms since epoch)",
        CONNECTION_LABELS,
    ),
    (
        ROUTE_CONNECTIONS_TIME_CONNECTED_TO_SERVER,
        "Route connections time connected to server (ms since epoch)",
        CONNECTION_LABELS,
    ),
    (
        ROUTE_CONNECTIONS_TIME_LAST_SENT_TO_SERVER,
        "Route connections time last sent to server (ms since epoch)",
        CONNECTION_LABELS,
    ),
    (
        ROUTE_CONNECTIONS_TIME_LAST_RECEIVED_FROM_SERVER,
        "Route connections time last received from server (ms since epoch)",
        CONNECTION_LABELS,
    ),
];

impl MetricSet {
    /// Creates a set with all router families declared.
    pub fn with_router_families() -> Result<Self, MetricsError> {
        let metrics = Self::new();
        for (name, help, labels) in FAMILIES {
            metrics.declare(name, help, labels)?;
        }
        Ok(metrics)
    }
}
