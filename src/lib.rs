//! MySQL Router Prometheus Exporter Library
//!
//! Polls a MySQL Router's REST management API on a fixed cadence and
//! republishes its runtime state (router identity, metadata caches,
//! routes, destinations and connections) as labeled Prometheus gauges.
//!
//! # Architecture
//!
//! ```text
//! Scheduler → Sampler → RouterClient (read)
//!                ↓
//!            MetricSet (write) ← MetricsServer (read, per scrape)
//! ```
//!
//! The sampling loop and the scrape server never talk to each other; they
//! share a single `Arc<MetricSet>`.
//!
//! # Design Principles
//!
//! - **Full refresh**: every cycle walks the whole router state; nothing is
//!   incremental and no history is kept
//! - **Consistent router label**: the hostname fetched at the start of a
//!   cycle labels every series written in that cycle
//! - **Explicit failure policy**: a failed fetch aborts the cycle by
//!   default; [`FetchPolicy::Skip`] trades completeness for availability
//! - **Stale series persist**: series of vanished routes keep their last
//!   value unless eviction is enabled
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use mysqlrouter_exporter::{
//!     client::HttpRouterClient,
//!     metrics::{MetricSet, MetricsServer, MetricsServerConfig},
//!     sampler::{Sampler, SamplerConfig},
//!     scheduler::Scheduler,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpRouterClient::connect(
//!     "https://localhost:8443",
//!     "admin",
//!     "secret",
//!     Duration::from_secs(10),
//! )
//! .await?;
//! let metrics = Arc::new(MetricSet::with_router_families()?);
//!
//! let sampler = Sampler::new(Arc::new(client), Arc::clone(&metrics), SamplerConfig::default());
//! let sampling = Scheduler::new(sampler, Duration::from_secs(60)).spawn();
//!
//! MetricsServer::new(MetricsServerConfig::default(), metrics)
//!     .run(async move {
//!         let _ = sampling.await;
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod sampler;
pub mod scheduler;

// Re-export commonly used types at crate root
pub use client::{ClientError, HttpRouterClient, MockRouterClient, RouterClient};
pub use config::{ConfigError, ExporterConfig, FileConfig, Overrides};
pub use error::ExporterError;
pub use metrics::{MetricSet, MetricsError, MetricsServer, MetricsServerConfig};
pub use sampler::{CycleReport, FetchPolicy, Sampler, SamplerConfig};
pub use scheduler::Scheduler;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
