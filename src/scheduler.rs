//! Fixed-cadence sampling loop.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::ExporterError;
use crate::sampler::Sampler;

/// Default pause between the end of one cycle and the start of the next.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Minimum allowed interval (1 second).
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Runs the sampler forever, one cycle at a time.
///
/// A cycle is awaited to completion before the interval sleep starts, so
/// cycles never overlap and the effective period is interval plus cycle
/// duration.
pub struct Scheduler {
    sampler: Sampler,
    interval: Duration,
}

impl Scheduler {
    /// Creates a scheduler. Intervals below one second are clamped.
    pub fn new(sampler: Sampler, interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            tracing::warn!(
                min_interval = ?MIN_INTERVAL,
                "Interval is less than minimum allowed. Using minimum interval."
            );
            MIN_INTERVAL
        } else {
            interval
        };
        Self { sampler, interval }
    }

    /// Effective interval after clamping.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Samples until a cycle fails, then returns that failure.
    pub async fn run(mut self) -> Result<(), ExporterError> {
        tracing::info!(interval = ?self.interval, "Sampling started");
        let mut cycle: u64 = 0;

        loop {
            cycle += 1;
            let report = match self.sampler.run_cycle().await {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!(cycle, error = %e, "Sampling cycle failed");
                    return Err(e);
                }
            };

            tracing::info!(
                cycle,
                router = %report.router_hostname,
                metadata = report.metadata,
                routes = report.routes,
                connections = report.connections,
                series = report.series_written,
                skipped = report.skipped.len(),
                evicted = report.evicted,
                "Sampling cycle complete"
            );

            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs the loop on a background task.
    pub fn spawn(self) -> JoinHandle<Result<(), ExporterError>> {
        tokio::spawn(self.run())
    }
}
