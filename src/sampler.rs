//! One full traversal of the router state per cycle.
//!
//! A cycle runs in two phases:
//!
//! ```text
//! collect:  router status → metadata (config, status) → routes (status,
//!           health, destinations, connections)          [RouterClient]
//! project:  RouterSnapshot → gauge families             [MetricSet]
//! ```
//!
//! Nothing is written before the whole traversal has been fetched, so a
//! cycle aborted by a fetch failure leaves the exported state exactly as
//! the previous cycle left it.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{
    ClientError, MetadataConfig, MetadataStatus, Operation, RouteConnection, RouteDestination,
    RouteHealth, RouteStatus, RouterClient, RouterStatus,
};
use crate::error::ExporterError;
use crate::metrics::{families, MetricSet, MetricsError};

/// What to do when a per-metadata or per-route fetch fails.
///
/// Router status and the metadata/route list fetches are always fatal for
/// the cycle: without them nothing consistent can be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchPolicy {
    /// Abort the whole cycle.
    #[default]
    Abort,
    /// Log the failure, leave that piece out and continue.
    Skip,
}

/// Sampler settings.
#[derive(Debug, Clone, Default)]
pub struct SamplerConfig {
    /// Per-entry fetch failure handling.
    pub policy: FetchPolicy,
    /// Remove series that were not written again in the latest cycle.
    pub evict_stale: bool,
}

/// A per-entry fetch left out under [`FetchPolicy::Skip`].
#[derive(Debug, Clone)]
pub struct SkippedFetch {
    /// The call that failed.
    pub operation: Operation,
    /// Metadata or route name.
    pub target: String,
    /// Rendered client error.
    pub error: String,
}

/// Fetched state of one metadata cache.
#[derive(Debug, Clone)]
pub struct MetadataSnapshot {
    /// Cache name.
    /// Route name.
    pub name: String,
    /// `None` when the fetch was skipped.
    pub config: Option<MetadataConfig>,
    /// `None` when the fetch was skipped.
    pub status: Option<MetadataStatus>,
}

/// Fetched state of one route.
#[derive(Debug, Clone)]
pub struct RouteSnapshot {
    pub name: String,
    /// `None` when the fetch was skipped.
    pub status: Option<RouteStatus>,
    /// `None` when the fetch was skipped.
    pub health: Option<RouteHealth>,
    /// `None` when the fetch was skipped.
    pub destinations: Option<Vec<RouteDestination>>,
    /// `None` when the fetch was skipped.
    pub connections: Option<Vec<RouteConnection>>,
}

/// Everything fetched in one cycle.
#[derive(Debug, Clone)]
pub struct RouterSnapshot {
    /// Router identity; its hostname labels the whole cycle.
    pub router: RouterStatus,
    /// One entry per listed metadata cache.
    pub metadata: Vec<MetadataSnapshot>,
    /// One entry per listed route.
    pub routes: Vec<RouteSnapshot>,
    /// Fetches left out under [`FetchPolicy::Skip`].
    pub skipped: Vec<SkippedFetch>,
}

/// Summary of a completed cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Hostname used as `router_hostname` label.
    pub router_hostname: String,
    /// Metadata caches seen.
    pub metadata: usize,
    /// Routes seen.
    pub routes: usize,
    /// Connections seen across all routes.
    pub connections: usize,
    /// Gauge writes, including zero-valued info series.
    pub series_written: usize,
    /// Fetches left out under [`FetchPolicy::Skip`].
    pub skipped: Vec<SkippedFetch>,
    /// Series removed by stale eviction.
    pub evicted: usize,
}

type SeriesKey = (&'static str, Vec<String>);

/// Walks the router state and projects it into a [`MetricSet`].
pub struct Sampler {
    client: Arc<dyn RouterClient>,
    metrics: Arc<MetricSet>,
    config: SamplerConfig,
    /// Series written by the last successful cycle, for eviction.
    previous: HashSet<SeriesKey>,
}

impl Sampler {
    /// Creates a sampler writing into `metrics`, which must have the
    /// router families declared.
    pub fn new(client: Arc<dyn RouterClient>, metrics: Arc<MetricSet>, config: SamplerConfig) -> Self {
        Self {
            client,
            metrics,
            config,
            previous: HashSet::new(),
        }
    }

    /// Fetches and projects one cycle.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, ExporterError> {
        let snapshot = self.collect().await?;
        Ok(self.project(&snapshot)?)
    }

    /// Fetches the full router state without touching the metric set.
    pub async fn collect(&self) -> Result<RouterSnapshot, ExporterError> {
        let policy = self.config.policy;
        let client = self.client.as_ref();
        let mut skipped = Vec::new();

        let router = required(Operation::RouterStatus, client.router_status()).await?;

        let entries = required(Operation::AllMetadata, client.all_metadata()).await?;
        let mut metadata = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name;
            let config = optional(
                policy,
                Operation::MetadataConfig,
                &name,
                client.metadata_config(&name),
                &mut skipped,
            )
            .await?;
            let status = optional(
                policy,
                Operation::MetadataStatus,
                &name,
                client.metadata_status(&name),
                &mut skipped,
            )
            .await?;
            metadata.push(MetadataSnapshot {
                name,
                config,
                status,
            });
        }

        let route_list = required(Operation::AllRoutes, client.all_routes()).await?;
        let mut routes = Vec::with_capacity(route_list.len());
        for route in route_list {
            let name = route.name;
            let status = optional(
                policy,
                Operation::RouteStatus,
                &name,
                client.route_status(&name),
                &mut skipped,
            )
            .await?;
            let health = optional(
                policy,
                Operation::RouteHealth,
                &name,
                client.route_health(&name),
                &mut skipped,
            )
            .await?;
            let destinations = optional(
                policy,
                Operation::RouteDestinations,
                &name,
                client.route_destinations(&name),
                &mut skipped,
            )
            .await?;
            let connections = optional(
                policy,
                Operation::RouteConnections,
                &name,
                client.route_connections(&name),
                &mut skipped,
            )
            .await?;
            routes.push(RouteSnapshot {
                name,
                status,
                health,
                destinations,
                connections,
            });
        }

        Ok(RouterSnapshot {
            router,
            metadata,
            routes,
            skipped,
        })
    }

    /// Writes a snapshot into the metric set.
    pub fn project(&mut self, snapshot: &RouterSnapshot) -> Result<CycleReport, MetricsError> {
        let mut out = Writer {
            metrics: &self.metrics,
            track: self.config.evict_stale,
            written: HashSet::new(),
            count: 0,
        };
        let router = &snapshot.router;
        let host = router.hostname.as_str();

        out.touch(
            families::ROUTER_STATUS,
            &[
                &router.process_id.to_string(),
                &router.product_edition,
                &router.time_started.to_rfc3339(),
                &router.version,
                host,
            ],
        )?;

        for m in &snapshot.metadata {
            let name = m.name.as_str();
            out.touch(families::METADATA, &[name])?;

            if let Some(config) = &m.config {
                out.touch(
                    families::METADATA_CONFIG,
                    &[
                        name,
                        &config.cluster_name,
                        &config.time_refresh_in_ms.to_string(),
                        &config.group_replication_id,
                    ],
                )?;
                for node in &config.nodes {
                    out.touch(
                        families::METADATA_CONFIG_NODE,
                        &[
                            name,
                            host,
                            &config.cluster_name,
                            &node.hostname,
                            &node.port.to_string(),
                        ],
                    )?;
                }
            }

            if let Some(status) = &m.status {
                out.touch(
                    families::METADATA_STATUS,
                    &[
                        name,
                        &status.refresh_failed.to_string(),
                        &rfc3339(status.time_last_refresh_succeeded),
                        &status.last_refresh_hostname,
                        &status.last_refresh_port.to_string(),
                    ],
                )?;
            }
        }

        let mut connection_count = 0;
        for r in &snapshot.routes {
            let name = r.name.as_str();
            out.touch(families::ROUTE, &[name])?;

            if let Some(status) = &r.status {
                let labels = [name, host];
                out.set(
                    families::ROUTE_ACTIVE_CONNECTIONS,
                    &labels,
                    status.active_connections as f64,
                )?;
                out.set(
                    families::ROUTE_TOTAL_CONNECTIONS,
                    &labels,
                    status.total_connections as f64,
                )?;
                out.set(
                    families::ROUTE_BLOCKED_HOSTS,
                    &labels,
                    status.blocked_hosts as f64,
                )?;
            }

            if let Some(health) = &r.health {
                let value = if health.is_alive { 1.0 } else { 0.0 };
                out.set(families::ROUTE_HEALTH, &[name, host], value)?;
            }

            for d in r.destinations.iter().flatten() {
                out.touch(
                    families::ROUTE_DESTINATIONS,
                    &[name, &d.address, &d.port.to_string()],
                )?;
            }

            for c in r.connections.iter().flatten() {
                connection_count += 1;
                let labels = [
                    name,
                    host,
                    c.source_address.as_str(),
                    c.destination_address.as_str(),
                ];
                out.set(
                    families::ROUTE_CONNECTIONS_BYTE_FROM_SERVER,
                    &labels,
                    c.bytes_from_server as f64,
                )?;
                out.set(
                    families::ROUTE_CONNECTIONS_BYTE_TO_SERVER,
                    &labels,
                    c.bytes_to_server as f64,
                )?;
                out.set(
                    families::ROUTE_CONNECTIONS_TIME_STARTED,
                    &labels,
                    millis(c.time_started),
                )?;
                out.set(
                    families::ROUTE_CONNECTIONS_TIME_CONNECTED_TO_SERVER,
                    &labels,
                    millis(c.time_connected_to_server),
                )?;
                out.set(
                    families::ROUTE_CONNECTIONS_TIME_LAST_SENT_TO_SERVER,
                    &labels,
                    millis(c.time_last_sent_to_server),
                )?;
                out.set(
                    families::ROUTE_CONNECTIONS_TIME_LAST_RECEIVED_FROM_SERVER,
                    &labels,
                    millis(c.time_last_received_from_server),
                )?;
            }
        }

        let series_written = out.count;
        let written = out.written;

        let mut evicted = 0;
        if self.config.evict_stale {
            if snapshot.skipped.is_empty() {
                for (family, labels) in self.previous.difference(&written) {
                    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                    if self.metrics.remove(family, &labels)? {
                        evicted += 1;
                    }
                }
                self.previous = written;
            } else {
                // A skipped fetch is not evidence that its series are gone.
                tracing::debug!(
                    skipped = snapshot.skipped.len(),
                    "Stale series eviction deferred"
                );
                self.previous.extend(written);
            }
        }

        Ok(CycleReport {
            router_hostname: router.hostname.clone(),
            metadata: snapshot.metadata.len(),
            routes: snapshot.routes.len(),
            connections: connection_count,
            series_written,
            skipped: snapshot.skipped.clone(),
            evicted,
        })
    }

    /// Returns the metric set this sampler writes into.
    pub fn metrics(&self) -> &Arc<MetricSet> {
        &self.metrics
    }
}

/// Records which series a cycle wrote, for eviction.
struct Writer<'a> {
    metrics: &'a MetricSet,
    track: bool,
    written: HashSet<SeriesKey>,
    count: usize,
}

impl Writer<'_> {
    fn set(&mut self, family: &'static str, labels: &[&str], value: f64) -> Result<(), MetricsError> {
        self.metrics.set(family, labels, value)?;
        self.record(family, labels);
        Ok(())
    }

    fn touch(&mut self, family: &'static str, labels: &[&str]) -> Result<(), MetricsError> {
        self.metrics.touch(family, labels)?;
        self.record(family, labels);
        Ok(())
    }

    fn record(&mut self, family: &'static str, labels: &[&str]) {
        self.count += 1;
        if self.track {
            self.written
                .insert((family, labels.iter().map(|l| l.to_string()).collect()));
        }
    }
}

async fn required<T>(
    operation: Operation,
    fetch: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ExporterError> {
    fetch.await.map_err(|source| ExporterError::Fetch {
        operation,
        target: None,
        source,
    })
}

async fn optional<T>(
    policy: FetchPolicy,
    operation: Operation,
    target: &str,
    fetch: impl Future<Output = Result<T, ClientError>>,
    skipped: &mut Vec<SkippedFetch>,
) -> Result<Option<T>, ExporterError> {
    match fetch.await {
        Ok(value) => Ok(Some(value)),
        Err(source) => match policy {
            FetchPolicy::Abort => Err(ExporterError::Fetch {
                operation,
                target: Some(target.to_string()),
                source,
            }),
            FetchPolicy::Skip => {
                tracing::warn!(
                    operation = %operation,
                    target,
                    error = %source,
                    "Fetch failed, skipping"
                );
                skipped.push(SkippedFetch {
                    operation,
                    target: target.to_string(),
                    error: source.to_string(),
                });
                Ok(None)
            }
        },
    }
}

fn millis(ts: Option<DateTime<Utc>>) -> f64 {
    ts.map(|t| t.timestamp_millis() as f64).unwrap_or(0.0)
}

fn rfc3339(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockRouterClient;
    use crate::metrics::families::*;

    const ROUTE1: [&str; 2] = ["route1", "r1"];
    const CONN1: [&str; 4] = ["route1", "r1", "10.0.0.9:50122", "10.0.0.1:3306"];

    fn sampler(mock: &Arc<MockRouterClient>, config: SamplerConfig) -> Sampler {
        let metrics = Arc::new(MetricSet::with_router_families().unwrap());
        Sampler::new(mock.clone(), metrics, config)
    }

    #[tokio::test]
    async fn test_full_cycle_over_example_router() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(&mock, SamplerConfig::default());

        let report = sampler.run_cycle().await.unwrap();
        assert_eq!(report.router_hostname, "r1");
        assert_eq!((report.metadata, report.routes, report.connections), (1, 1, 1));
        assert!(report.skipped.is_empty());

        let m = sampler.metrics();
        assert_eq!(m.series_count(ROUTER_STATUS), 1);
        assert_eq!(m.series_count(METADATA), 1);
        assert_eq!(m.series_count(METADATA_CONFIG), 1);
        assert_eq!(m.series_count(METADATA_CONFIG_NODE), 2);
        assert_eq!(m.series_count(METADATA_STATUS), 1);
        assert_eq!(m.series_count(ROUTE), 1);
        assert_eq!(m.series_count(ROUTE_DESTINATIONS), 1);
        for family in [
            ROUTE_ACTIVE_CONNECTIONS,
            ROUTE_TOTAL_CONNECTIONS,
            ROUTE_BLOCKED_HOSTS,
            ROUTE_HEALTH,
            ROUTE_CONNECTIONS_BYTE_FROM_SERVER,
            ROUTE_CONNECTIONS_BYTE_TO_SERVER,
            ROUTE_CONNECTIONS_TIME_STARTED,
        ] {
            assert_eq!(m.series_count(family), 1, "{family}");
        }

        assert_eq!(m.get(ROUTE_ACTIVE_CONNECTIONS, &ROUTE1), Some(3.0));
        assert_eq!(m.get(ROUTE_TOTAL_CONNECTIONS, &ROUTE1), Some(10.0));
        assert_eq!(m.get(ROUTE_BLOCKED_HOSTS, &ROUTE1), Some(0.0));
        assert_eq!(m.get(ROUTE_HEALTH, &ROUTE1), Some(1.0));
        assert_eq!(
            m.get(ROUTE_DESTINATIONS, &["route1", "10.0.0.1", "3306"]),
            Some(0.0)
        );

        assert_eq!(m.get(ROUTE_CONNECTIONS_BYTE_FROM_SERVER, &CONN1), Some(100.0));
        assert_eq!(m.get(ROUTE_CONNECTIONS_BYTE_TO_SERVER, &CONN1), Some(50.0));
        assert_eq!(
            m.get(ROUTE_CONNECTIONS_TIME_STARTED, &CONN1),
            Some(1_704_067_200_000.0)
        );
        for family in [
            ROUTE_CONNECTIONS_TIME_CONNECTED_TO_SERVER,
            ROUTE_CONNECTIONS_TIME_LAST_SENT_TO_SERVER,
            ROUTE_CONNECTIONS_TIME_LAST_RECEIVED_FROM_SERVER,
        ] {
            assert_eq!(m.get(family, &CONN1), Some(1_704_067_201_000.0));
            assert_eq!(m.series_count(family), 1);
        }
    }

    #[tokio::test]
    async fn test_router_host_labels_every_downstream_series() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(&mock, SamplerConfig::default());
        sampler.run_cycle().await.unwrap();

        let m = sampler.metrics();
        assert_eq!(
            m.get(
                METADATA_CONFIG_NODE,
                &["meta1", "r1", "cluster1", "db2", "3306"]
            ),
            Some(0.0)
        );
        assert_eq!(
            m.get(
                ROUTER_STATUS,
                &[
                    "1234",
                    "MySQL Community - GPL",
                    "2024-01-01T00:00:00+00:00",
                    "8.0.36",
                    "r1"
                ]
            ),
            Some(0.0)
        );
    }

    #[tokio::test]
    async fn test_dead_route_uses_same_label_set() {
        let mock = Arc::new(MockRouterClient::example());
        mock.update_route("route1", |r| r.health.is_alive = false);
        let mut sampler = sampler(&mock, SamplerConfig::default());
        sampler.run_cycle().await.unwrap();

        let m = sampler.metrics();
        assert_eq!(m.get(ROUTE_HEALTH, &ROUTE1), Some(0.0));
        assert_eq!(m.series_count(ROUTE_HEALTH), 1);
        assert_eq!(
            m.label_names(ROUTE_HEALTH),
            m.label_names(ROUTE_ACTIVE_CONNECTIONS)
        );
    }

    #[tokio::test]
    async fn test_abort_policy_publishes_nothing_from_failed_cycle() {
        let mock = Arc::new(MockRouterClient::example());
        mock.fail(Operation::RouteHealth, Some("route1"));
        let mut sampler = sampler(&mock, SamplerConfig::default());

        let err = sampler.run_cycle().await.unwrap_err();
        assert!(matches!(
            err,
            ExporterError::Fetch {
                operation: Operation::RouteHealth,
                target: Some(ref t),
                ..
            } if t == "route1"
        ));

        let m = sampler.metrics();
        for family in [ROUTE_HEALTH, ROUTE_DESTINATIONS, ROUTE_CONNECTIONS_BYTE_FROM_SERVER] {
            assert_eq!(m.series_count(family), 0);
        }
        assert_eq!(m.series_count(ROUTER_STATUS), 0);
        // The traversal stopped at the failing call.
        assert_eq!(mock.calls(), 7);
    }

    #[tokio::test]
    async fn test_abort_keeps_previous_cycle_values() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(&mock, SamplerConfig::default());
        sampler.run_cycle().await.unwrap();

        mock.update_route("route1", |r| r.status.active_connections = 9);
        mock.fail(Operation::RouteConnections, None);
        assert!(sampler.run_cycle().await.is_err());

        assert_eq!(
            sampler.metrics().get(ROUTE_ACTIVE_CONNECTIONS, &ROUTE1),
            Some(3.0)
        );
    }

    #[tokio::test]
    async fn test_router_status_failure_is_fatal_under_skip() {
        let mock = Arc::new(MockRouterClient::example());
        mock.fail(Operation::RouterStatus, None);
        let mut sampler = sampler(
            &mock,
            SamplerConfig {
                policy: FetchPolicy::Skip,
                evict_stale: false,
            },
        );

        assert!(matches!(
            sampler.run_cycle().await,
            Err(ExporterError::Fetch {
                operation: Operation::RouterStatus,
                ..
            })
        ));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_skip_policy_leaves_out_failed_piece_only() {
        let mock = Arc::new(MockRouterClient::example());
        mock.fail(Operation::RouteHealth, Some("route1"));
        let mut sampler = sampler(
            &mock,
            SamplerConfig {
                policy: FetchPolicy::Skip,
                evict_stale: false,
            },
        );

        let report = sampler.run_cycle().await.unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].operation, Operation::RouteHealth);
        assert_eq!(report.skipped[0].target, "route1");

        let m = sampler.metrics();
        assert_eq!(m.series_count(ROUTE_HEALTH), 0);
        assert_eq!(m.get(ROUTE_ACTIVE_CONNECTIONS, &ROUTE1), Some(3.0));
        assert_eq!(m.get(ROUTE_CONNECTIONS_BYTE_TO_SERVER, &CONN1), Some(50.0));
    }

    #[tokio::test]
    async fn test_removed_route_keeps_last_values() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(&mock, SamplerConfig::default());
        sampler.run_cycle().await.unwrap();

        mock.remove_route("route1");
        let report = sampler.run_cycle().await.unwrap();
        assert_eq!(report.routes, 0);

        let m = sampler.metrics();
        assert_eq!(m.get(ROUTE, &["route1"]), Some(0.0));
        assert_eq!(m.get(ROUTE_TOTAL_CONNECTIONS, &ROUTE1), Some(10.0));
        assert_eq!(m.get(ROUTE_CONNECTIONS_BYTE_FROM_SERVER, &CONN1), Some(100.0));
    }

    #[tokio::test]
    async fn test_eviction_removes_vanished_route() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(
            &mock,
            SamplerConfig {
                policy: FetchPolicy::Abort,
                evict_stale: true,
            },
        );
        let first = sampler.run_cycle().await.unwrap();
        assert_eq!(first.evicted, 0);

        mock.remove_route("route1");
        let second = sampler.run_cycle().await.unwrap();
        // route, 3 status gauges, health, destination, 6 connection gauges
        assert_eq!(second.evicted, 12);

        let m = sampler.metrics();
        assert_eq!(m.series_count(ROUTE), 0);
        assert_eq!(m.get(ROUTE_TOTAL_CONNECTIONS, &ROUTE1), None);
        assert_eq!(m.series_count(METADATA), 1);
        assert_eq!(m.series_count(ROUTER_STATUS), 1);
    }

    #[tokio::test]
    async fn test_eviction_deferred_when_fetch_skipped() {
        let mock = Arc::new(MockRouterClient::example());
        let mut sampler = sampler(
            &mock,
            SamplerConfig {
                policy: FetchPolicy::Skip,
                evict_stale: true,
            },
        );
        sampler.run_cycle().await.unwrap();

        mock.fail(Operation::RouteConnections, Some("route1"));
        let report = sampler.run_cycle().await.unwrap();
        assert_eq!(report.evicted, 0);
        assert_eq!(
            sampler.metrics().get(ROUTE_CONNECTIONS_BYTE_FROM_SERVER, &CONN1),
            Some(100.0)
        );
    }

    #[tokio::test]
    async fn test_zero_counts_are_rendered() {
        let mock = Arc::new(MockRouterClient::example());
        mock.update_route("route1", |r| {
            r.status.active_connections = 0;
            r.status.total_connections = 0;
            r.connections[0].bytes_from_server = 0;
            r.connections[0].bytes_to_server = 0;
        });
        let mut sampler = sampler(&mock, SamplerConfig::default());
        sampler.run_cycle().await.unwrap();

        let output = sampler.metrics().encode().unwrap();
        assert!(output.contains(
            r#"mysqlrouter_route_active_connections{name="route1",router_hostname="r1"} 0"#
        ));
        assert!(output.contains(
            r#"mysqlrouter_route_connections_byte_to_server{destination_address="10.0.0.1:3306",name="route1",router_hostname="r1",source_address="10.0.0.9:50122"} 0"#
        ));
    }

    #[test]
    fn test_missing_timestamp_is_zero() {
        assert_eq!(millis(None), 0.0);
        assert_eq!(rfc3339(None), "");
    }
}
