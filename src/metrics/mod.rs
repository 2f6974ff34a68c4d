//! Prometheus metric storage and scrape endpoint.
//!
//! [`MetricSet`] is the only state shared between the sampling loop and
//! the HTTP server. The sampler writes into it every cycle; the server
//! renders it on each scrape.
//!
//! # Metrics Exposed
//!
//! ## Identity (value always 0)
//! - `mysqlrouter_router_status` - router process, edition, start time, version, host
//! - `mysqlrouter_metadata` - one series per metadata cache
//! - `mysqlrouter_metadata_config` - cluster name, refresh interval, replication group
//! - `mysqlrouter_metadata_config_node` - one series per metadata server
//! - `mysqlrouter_metadata_status` - refresh failures and last refresh source
//! - `mysqlrouter_route` - one series per route
//! - `mysqlrouter_route_destinations` - one series per route destination
//!
//! ## Route Gauges
//! - `mysqlrouter_route_active_connections`
//! - `mysqlrouter_route_total_connections`
//! - `mysqlrouter_route_blocked_hosts`
//! - `mysqlrouter_route_health` - 1 when alive, 0 otherwise
//!
//! ## Connection Gauges
//! - `mysqlrouter_route_connections_byte_from_server`
//! - `mysqlrouter_route_connections_byte_to_server`
//! - `mysqlrouter_route_connections_time_started` and the three other
//!   `time_*` gauges, in milliseconds since the Unix epoch
//!
//! Series of routes or caches that disappear keep their last value until
//! restart, unless stale eviction is enabled on the sampler.
//!
//! # Example
//!
//! ```no_run
//! use mysqlrouter_exporter::metrics::{families, MetricSet};
//!
//! let metrics = MetricSet::with_router_families().expect("Failed to create registry");
//! metrics
//!     .set(families::ROUTE_ACTIVE_CONNECTIONS, &["route1", "r1"], 3.0)
//!     .unwrap();
//! println!("{}", metrics.encode().unwrap());
//! ```

pub mod families;
mod server;
mod set;

pub use server::{MetricsServer, MetricsServerConfig, ServerError, DEFAULT_PORT};
pub use set::{MetricSet, MetricsError};
