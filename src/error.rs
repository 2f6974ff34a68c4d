//! Process-level error taxonomy.
//!
//! None of these are recovered from inside the exporter. Whatever reaches
//! `main` terminates the process with a non-zero exit code and a diagnostic,
//! leaving restarts to the process supervisor.

use thiserror::Error;

use crate::client::{ClientError, Operation};
use crate::config::ConfigError;
use crate::metrics::{MetricsError, ServerError};

/// Errors that stop the exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// A required parameter is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The router API client could not be set up.
    #[error("failed to connect to router API: {0}")]
    Connection(#[source] ClientError),

    /// A router API call failed during a sampling cycle.
    #[error("failed to fetch {}: {}", fetch_context(.operation, .target), .source)]
    Fetch {
        /// The call that failed.
        operation: Operation,
        /// Metadata or route name, for per-entry calls.
        target: Option<String>,
        /// Underlying client error.
        #[source]
        source: ClientError,
    },

    /// The metric registry rejected a declaration or write.
    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),

    /// The scrape endpoint could not bind or serve.
    #[error("metrics server error: {0}")]
    Server(#[from] ServerError),
}

fn fetch_context(operation: &Operation, target: &Option<String>) -> String {
    match target {
        Some(t) => format!("{operation} for '{t}'"),
        None => operation.to_string(),
    }
}
