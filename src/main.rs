//! MySQL Router Exporter CLI
//!
//! Polls a MySQL Router REST API and serves the result on `/metrics`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mysqlrouter_exporter::{
    config::{ENV_PASS, ENV_PORT, ENV_URL, ENV_USER},
    ExporterConfig, ExporterError, FetchPolicy, FileConfig, HttpRouterClient, MetricSet,
    MetricsServer, MetricsServerConfig, Overrides, Sampler, Scheduler,
};
use tracing::{error, info};

/// Prometheus exporter for MySQL Router.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Router REST API base URL, e.g. https://localhost:8443
    #[arg(long, env = ENV_URL)]
    url: Option<String>,

    /// Router REST API user
    #[arg(long, env = ENV_USER)]
    user: Option<String>,

    /// Router REST API password
    #[arg(long, env = ENV_PASS, hide_env_values = true)]
    pass: Option<String>,

    /// Port for the /metrics endpoint [default: 49152]
    #[arg(long, env = ENV_PORT)]
    port: Option<u16>,

    /// Seconds to wait between sampling cycles [default: 60]
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Router API request timeout in seconds [default: 10]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// What to do when a per-route or per-metadata fetch fails [default: abort]
    #[arg(long, value_enum)]
    fetch_policy: Option<FetchPolicy>,

    /// Drop series of routes and caches that disappeared
    #[arg(long)]
    evict_stale: bool,

    /// Optional TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            user: self.user.clone(),
            pass: self.pass.clone(),
            port: self.port,
            interval_secs: self.interval_secs,
            timeout_secs: self.timeout_secs,
            fetch_policy: self.fetch_policy,
            evict_stale: self.evict_stale.then_some(true),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Exporter stopped");
            eprintln!("mysqlrouter-exporter: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ExporterError> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let config = ExporterConfig::resolve(file, cli.overrides())?;

    info!("MySQL Router Exporter v{}", mysqlrouter_exporter::VERSION);
    info!(
        url = %config.url,
        interval = ?config.interval,
        policy = ?config.fetch_policy,
        evict_stale = config.evict_stale,
        "Starting"
    );

    let client = HttpRouterClient::connect(&config.url, &config.user, &config.pass, config.timeout)
        .await
        .map_err(ExporterError::Connection)?;

    let metrics = Arc::new(MetricSet::with_router_families()?);
    let sampler = Sampler::new(Arc::new(client), Arc::clone(&metrics), config.sampler());
    let mut sampling = Scheduler::new(sampler, config.interval).spawn();

    let server = MetricsServer::new(MetricsServerConfig::with_port(config.port), metrics);
    let serving = server.run(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    });

    tokio::select! {
        served = serving => {
            sampling.abort();
            served?;
            Ok(())
        }
        sampled = &mut sampling => match sampled {
            Ok(result) => result,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}
