//! Exporter configuration.
//!
//! Values come from three layers, lowest precedence first: an optional
//! TOML file, environment variables, then command-line flags. The binary
//! folds the last two into [`Overrides`] through clap; this module merges
//! them over the file and validates the result.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::metrics::DEFAULT_PORT;
use crate::sampler::{FetchPolicy, SamplerConfig};
use crate::scheduler::DEFAULT_INTERVAL;

/// Router API base URL.
pub const ENV_URL: &str = "MYSQLROUTER_EXPORTER_URL";
/// Router API user.
pub const ENV_USER: &str = "MYSQLROUTER_EXPORTER_USER";
/// Router API password.
pub const ENV_PASS: &str = "MYSQLROUTER_EXPORTER_PASS";
/// Scrape endpoint port.
pub const ENV_PORT: &str = "MYSQLROUTER_EXPORTER_PORT";

/// Default router API request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// One or more of URL, user and password is unset.
    #[error("missing required configuration: {} (set the environment variables or pass the matching flags)", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
    /// The router URL is not an absolute http(s) URL with a host.
    #[error("invalid router API url '{0}': must be an http(s) URL")]
    InvalidUrl(String),
    /// Sampling interval of zero.
    #[error("invalid sampling interval (must be at least 1 second)")]
    InvalidInterval,
    /// Request timeout of zero.
    #[error("invalid request timeout (must be at least 1 second)")]
    InvalidTimeout,
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The config file is not valid TOML for this format.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// `[router]` section: how to reach the management API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterSection {
    /// Router API base URL.
    pub url: Option<String>,
    /// Router API user.
    pub user: Option<String>,
    /// Router API password.
    pub pass: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[exporter]` section: scrape endpoint and sampling behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    /// Scrape endpoint port.
    pub port: Option<u16>,
    /// Seconds between sampling cycles.
    pub interval_secs: Option<u64>,
    /// Per-entry fetch failure handling.
    pub fetch_policy: Option<FetchPolicy>,
    /// Drop series that were not rewritten.
    pub evict_stale: Option<bool>,
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[router]` table.
    #[serde(default)]
    pub router: RouterSection,
    /// `[exporter]` table.
    #[serde(default)]
    pub exporter: ExporterSection,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Router API base URL.
    pub url: Option<String>,
    /// Router API user.
    pub user: Option<String>,
    /// Router API password.
    pub pass: Option<String>,
    /// Scrape endpoint port.
    pub port: Option<u16>,
    /// Seconds between sampling cycles.
    pub interval_secs: Option<u64>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Per-entry fetch failure handling.
    pub fetch_policy: Option<FetchPolicy>,
    /// Set only when the flag was given.
    pub evict_stale: Option<bool>,
}

/// Validated exporter configuration.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Router REST API base URL.
    pub url: String,
    /// Router API user.
    pub user: String,
    /// Router API password.
    pub pass: String,
    /// Scrape endpoint port (all interfaces).
    pub port: u16,
    /// Pause between sampling cycles.
    pub interval: Duration,
    /// Router API request timeout.
    pub timeout: Duration,
    /// Per-entry fetch failure handling.
    pub fetch_policy: FetchPolicy,
    /// Drop series that were not rewritten.
    pub evict_stale: bool,
}

impl ExporterConfig {
    /// Merges overrides over the file and validates.
    ///
    /// Every missing required parameter is reported at once.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let FileConfig { router, exporter } = file;

        let url = non_empty(overrides.url.or(router.url));
        let user = non_empty(overrides.user.or(router.user));
        let pass = non_empty(overrides.pass.or(router.pass));

        let (url, user, pass) = match (url, user, pass) {
            (Some(url), Some(user), Some(pass)) => (url, user, pass),
            (url, user, pass) => {
                let missing = [
                    (url.is_none(), ENV_URL),
                    (user.is_none(), ENV_USER),
                    (pass.is_none(), ENV_PASS),
                ]
                .into_iter()
                .filter_map(|(missing, name)| missing.then_some(name))
                .collect();
                return Err(ConfigError::MissingParameters(missing));
            }
        };

        validate_url(&url)?;

        let interval_secs = overrides
            .interval_secs
            .or(exporter.interval_secs)
            .unwrap_or(DEFAULT_INTERVAL.as_secs());
        if interval_secs == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        let timeout_secs = overrides
            .timeout_secs
            .or(router.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            url,
            user,
            pass,
            port: overrides.port.or(exporter.port).unwrap_or(DEFAULT_PORT),
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(timeout_secs),
            fetch_policy: overrides
                .fetch_policy
                .or(exporter.fetch_policy)
                .unwrap_or_default(),
            evict_stale: overrides
                .evict_stale
                .or(exporter.evict_stale)
                .unwrap_or(false),
        })
    }

    /// Sampler settings derived from this configuration.
    pub fn sampler(&self) -> SamplerConfig {
        SamplerConfig {
            policy: self.fetch_policy,
            evict_stale: self.evict_stale,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accepts the same URLs the router client can build API paths from.
fn validate_url(url: &str) -> Result<(), ConfigError> {
    match Url::parse(url) {
        Ok(parsed)
            if !parsed.cannot_be_a_base()
                && parsed.has_host()
                && matches!(parsed.scheme(), "http" | "https") =>
        {
            Ok(())
        }
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}
