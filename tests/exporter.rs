//! End-to-end: fake router API → sampler → scrape endpoint.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use mysqlrouter_exporter::client::{HttpRouterClient, Operation};
use mysqlrouter_exporter::metrics::families;
use mysqlrouter_exporter::{
    ExporterError, FetchPolicy, MetricSet, MetricsServer, MetricsServerConfig, Sampler,
    SamplerConfig,
};
use tokio::net::TcpListener;

async fn sampler_for(url: &str, config: SamplerConfig) -> (Sampler, Arc<MetricSet>) {
    let client = HttpRouterClient::connect(url, common::USER, common::PASS, Duration::from_secs(5))
        .await
        .expect("connect");
    let metrics = Arc::new(MetricSet::with_router_families().unwrap());
    let sampler = Sampler::new(Arc::new(client), Arc::clone(&metrics), config);
    (sampler, metrics)
}

/// Serves the scrape router on a random port and returns its base URL.
async fn start_scrape_server(metrics: Arc<MetricSet>) -> String {
    let server = MetricsServer::new(MetricsServerConfig::default(), metrics);
    let app = server.router();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_scrape_after_one_cycle() {
    let (router_url, _fake) = common::start_fake_router().await;
    let (mut sampler, metrics) = sampler_for(&router_url, SamplerConfig::default()).await;
    sampler.run_cycle().await.unwrap();

    let scrape_url = start_scrape_server(metrics).await;
    let response = reqwest::get(format!("{scrape_url}/metrics")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let body = response.text().await.unwrap();
    assert!(body.contains(
        r#"mysqlrouter_route_total_connections{name="route1",router_hostname="r1"} 10"#
    ));
    assert!(body.contains(r#"mysqlrouter_route_health{name="route1",router_hostname="r1"} 1"#));
    assert!(body.contains(
        r#"mysqlrouter_metadata_status{last_refresh_hostname="db1",last_refresh_port="3306",name="meta1",refresh_failed="2",time_last_refresh_succeeded="2024-01-01T00:05:00+00:00"} 0"#
    ));
    assert!(body.contains(
        r#"mysqlrouter_route_connections_time_last_received_from_server{destination_address="10.0.0.1:3306",name="route1",router_hostname="r1",source_address="10.0.0.9:50122"} 0"#
    ));
    assert!(body.contains("# HELP mysqlrouter_route_health 0: not active, 1: active"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let scrape_url = start_scrape_server(Arc::new(MetricSet::new())).await;
    let response = reqwest::get(format!("{scrape_url}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_dead_route_toggles_same_series() {
    let (router_url, fake) = common::start_fake_router().await;
    let (mut sampler, metrics) = sampler_for(&router_url, SamplerConfig::default()).await;

    sampler.run_cycle().await.unwrap();
    fake.route_dead.store(true, Ordering::SeqCst);
    sampler.run_cycle().await.unwrap();

    assert_eq!(metrics.series_count(families::ROUTE_HEALTH), 1);
    assert_eq!(
        metrics.get(families::ROUTE_HEALTH, &["route1", "r1"]),
        Some(0.0)
    );
}

#[tokio::test]
async fn test_failure_policies_over_http() {
    let (router_url, fake) = common::start_fake_router().await;
    fake.break_health.store(true, Ordering::SeqCst);

    let (mut aborting, metrics) = sampler_for(&router_url, SamplerConfig::default()).await;
    let err = aborting.run_cycle().await.unwrap_err();
    assert!(matches!(
        err,
        ExporterError::Fetch {
            operation: Operation::RouteHealth,
            ..
        }
    ));
    assert_eq!(metrics.series_count(families::ROUTE), 0);

    let (mut skipping, metrics) = sampler_for(
        &router_url,
        SamplerConfig {
            policy: FetchPolicy::Skip,
            evict_stale: false,
        },
    )
    .await;
    let report = skipping.run_cycle().await.unwrap();
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(metrics.series_count(families::ROUTE_HEALTH), 0);
    assert_eq!(
        metrics.get(families::ROUTE_ACTIVE_CONNECTIONS, &["route1", "r1"]),
        Some(3.0)
    );
}
