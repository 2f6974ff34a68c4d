//! In-memory router for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use super::{
    ClientError, ConfigNode, MetadataConfig, MetadataEntry, MetadataStatus, Operation, Route,
    RouteConnection, RouteDestination, RouteHealth, RouteStatus, RouterClient, RouterStatus,
};

/// Fixture data for one metadata cache.
#[derive(Debug, Clone)]
pub struct MetadataFixture {
    /// Cache name.
    pub name: String,
    /// Returned by `metadata_config`.
    pub config: MetadataConfig,
    /// Returned by `metadata_status`.
    pub status: MetadataStatus,
}

/// Fixture data for one route.
#[derive(Debug, Clone)]
pub struct RouteFixture {
    /// Route name.
    pub name: String,
    /// Returned by `route_status`.
    pub status: RouteStatus,
    /// Returned by `route_health`.
    pub health: RouteHealth,
    /// Returned by `route_destinations`.
    pub destinations: Vec<RouteDestination>,
    /// Returned by `route_connections`.
    pub connections: Vec<RouteConnection>,
}

#[derive(Debug)]
struct MockState {
    router: RouterStatus,
    metadata: Vec<MetadataFixture>,
    routes: Vec<RouteFixture>,
    failures: Vec<(Operation, Option<String>)>,
}

/// [`RouterClient`] serving fixture data, with failure injection.
///
/// The fixture can be changed between cycles through `&self`, so a test
/// can share one mock with a running sampler.
#[derive(Debug)]
pub struct MockRouterClient {
    state: Mutex<MockState>,
    calls: AtomicUsize,
}

impl MockRouterClient {
    /// Creates a router with no metadata caches and no routes.
    pub fn new(router: RouterStatus) -> Self {
        Self {
            state: Mutex::new(MockState {
                router,
                metadata: Vec::new(),
                routes: Vec::new(),
                failures: Vec::new(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// One router "r1" with metadata cache "meta1" (two nodes) and route
    /// "route1" (one destination, one connection).
    pub fn example() -> Self {
        // 2024-01-01T00:00:00Z
        let started = DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(1_704_067_200);
        let connected = started + Duration::seconds(1);

        Self::new(RouterStatus {
            process_id: 1234,
            product_edition: "MySQL Community - GPL".to_string(),
            time_started: started,
            version: "8.0.36".to_string(),
            hostname: "r1".to_string(),
        })
        .with_metadata(MetadataFixture {
            name: "meta1".to_string(),
            config: MetadataConfig {
                cluster_name: "cluster1".to_string(),
                time_refresh_in_ms: 500,
                group_replication_id: "gr-1".to_string(),
                nodes: vec![
                    ConfigNode {
                        hostname: "db1".to_string(),
                        port: 3306,
                    },
                    ConfigNode {
                        hostname: "db2".to_string(),
                        port: 3306,
                    },
                ],
            },
            status: MetadataStatus {
                refresh_failed: 0,
                refresh_succeeded: 42,
                time_last_refresh_succeeded: Some(connected),
                last_refresh_hostname: "db1".to_string(),
                last_refresh_port: 3306,
            },
        })
        .with_route(RouteFixture {
            name: "route1".to_string(),
            status: RouteStatus {
                active_connections: 3,
                total_connections: 10,
                blocked_hosts: 0,
            },
            health: RouteHealth { is_alive: true },
            destinations: vec![RouteDestination {
                address: "10.0.0.1".to_string(),
                port: 3306,
            }],
            connections: vec![RouteConnection {
                bytes_from_server: 100,
                bytes_to_server: 50,
                source_address: "10.0.0.9:50122".to_string(),
                destination_address: "10.0.0.1:3306".to_string(),
                time_started: Some(started),
                time_connected_to_server: Some(connected),
                time_last_sent_to_server: Some(connected),
                time_last_received_from_server: Some(connected),
            }],
        })
    }

    /// Adds a metadata cache.
    pub fn with_metadata(self, metadata: MetadataFixture) -> Self {
        self.state.lock().metadata.push(metadata);
        self
    }

    /// Adds a route.
    pub fn with_route(self, route: RouteFixture) -> Self {
        self.state.lock().routes.push(route);
        self
    }

    /// Makes `op` fail. With a target, only calls for that metadata or
    /// route name fail.
    pub fn fail(&self, op: Operation, target: Option<&str>) {
        self.state
            .lock()
            .failures
            .push((op, target.map(str::to_string)));
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        self.state.lock().failures.clear();
    }

    /// Drops a route from the fixture.
    pub fn remove_route(&self, name: &str) {
        self.state.lock().routes.retain(|r| r.name != name);
    }

    /// Applies `f` to the named route, if present.
    pub fn update_route(&self, name: &str, f: impl FnOnce(&mut RouteFixture)) {
        if let Some(route) = self.state.lock().routes.iter_mut().find(|r| r.name == name) {
            f(route);
        }
    }

    /// Total number of client calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, op: Operation, target: Option<&str>) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock();
        let injected = state.failures.iter().any(|(failing, failing_target)| {
            *failing == op
                && match failing_target {
                    Some(t) => Some(t.as_str()) == target,
                    None => true,
                }
        });
        if injected {
            return Err(ClientError::Injected(match target {
                Some(t) => format!("{op} for '{t}'"),
                None => op.to_string(),
            }));
        }
        Ok(())
    }

    fn metadata<T>(
        &self,
        name: &str,
        f: impl FnOnce(&MetadataFixture) -> T,
    ) -> Result<T, ClientError> {
        let state = self.state.lock();
        state
            .metadata
            .iter()
            .find(|m| m.name == name)
            .map(f)
            .ok_or_else(|| ClientError::Status {
                url: format!("mock://metadata/{name}"),
                status: 404,
            })
    }

    fn route<T>(&self, name: &str, f: impl FnOnce(&RouteFixture) -> T) -> Result<T, ClientError> {
        let state = self.state.lock();
        state
            .routes
            .iter()
            .find(|r| r.name == name)
            .map(f)
            .ok_or_else(|| ClientError::Status {
                url: format!("mock://routes/{name}"),
                status: 404,
            })
    }
}

#[async_trait]
impl RouterClient for MockRouterClient {
    async fn router_status(&self) -> Result<RouterStatus, ClientError> {
        self.check(Operation::RouterStatus, None)?;
        Ok(self.state.lock().router.clone())
    }

    async fn all_metadata(&self) -> Result<Vec<MetadataEntry>, ClientError> {
        self.check(Operation::AllMetadata, None)?;
        Ok(self
            .state
            .lock()
            .metadata
            .iter()
            .map(|m| MetadataEntry {
                name: m.name.clone(),
            })
            .collect())
    }

    async fn metadata_config(&self, name: &str) -> Result<MetadataConfig, ClientError> {
        self.check(Operation::MetadataConfig, Some(name))?;
        self.metadata(name, |m| m.config.clone())
    }

    async fn metadata_status(&self, name: &str) -> Result<MetadataStatus, ClientError> {
        self.check(Operation::MetadataStatus, Some(name))?;
        self.metadata(name, |m| m.status.clone())
    }

    async fn all_routes(&self) -> Result<Vec<Route>, ClientError> {
        self.check(Operation::AllRoutes, None)?;
        Ok(self
            .state
            .lock()
            .routes
            .iter()
            .map(|r| Route {
                name: r.name.clone(),
            })
            .collect())
    }

    async fn route_status(&self, name: &str) -> Result<RouteStatus, ClientError> {
        self.check(Operation::RouteStatus, Some(name))?;
        self.route(name, |r| r.status)
    }

    async fn route_health(&self, name: &str) -> Result<RouteHealth, ClientError> {
        self.check(Operation::RouteHealth, Some(name))?;
        self.route(name, |r| r.health)
    }

    async fn route_destinations(&self, name: &str) -> Result<Vec<RouteDestination>, ClientError> {
        self.check(Operation::RouteDestinations, Some(name))?;
        self.route(name, |r| r.destinations.clone())
    }

    async fn route_connections(&self, name: &str) -> Result<Vec<RouteConnection>, ClientError> {
        self.check(Operation::RouteConnections, Some(name))?;
        self.route(name, |r| r.connections.clone())
    }
}
