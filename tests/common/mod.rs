//! Fake MySQL Router REST API for integration tests.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const USER: &str = "admin";
pub const PASS: &str = "secret";

/// base64("admin:secret")
const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// Knobs shared with the running fake.
#[derive(Default)]
pub struct FakeRouter {
    /// When set, `/routes/{name}/health` answers 500.
    pub break_health: AtomicBool,
    /// When set, `route1` reports itself dead.
    pub route_dead: AtomicBool,
    /// When set, `/routes/{name}/status` answers after [`SLOW_RESPONSE`].
    pub slow_status: AtomicBool,
}

/// Delay used by the `slow_status` knob.
pub const SLOW_RESPONSE: Duration = Duration::from_secs(3);

type Shared = Arc<FakeRouter>;
type ApiResult = Result<Json<Value>, StatusCode>;

fn authorize(headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value == BASIC_AUTH => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn known_route(name: &str) -> Result<(), StatusCode> {
    if name == "route1" {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn router_status(headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    Ok(Json(json!({
        "processId": 4242,
        "productEdition": "MySQL Community - GPL",
        "timeStarted": "2024-01-01T00:00:00.000Z",
        "version": "8.0.36",
        "hostname": "r1"
    })))
}

async fn metadata_list(headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    Ok(Json(json!({ "items": [{ "name": "meta1" }] })))
}

async fn metadata_config(headers: HeaderMap, Path(name): Path<String>) -> ApiResult {
    authorize(&headers)?;
    if name != "meta1" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "clusterName": "cluster1",
        "timeRefreshInMs": 500,
        "groupReplicationId": "gr-1",
        "nodes": [
            { "hostname": "db1", "port": 3306 },
            { "hostname": "db2", "port": 3306 }
        ]
    })))
}

async fn metadata_status(headers: HeaderMap, Path(name): Path<String>) -> ApiResult {
    authorize(&headers)?;
    if name != "meta1" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "refreshFailed": 2,
        "refreshSucceeded": 40,
        "timeLastRefreshSucceeded": "2024-01-01T00:05:00.000Z",
        "lastRefreshHostname": "db1",
        "lastRefreshPort": 3306
    })))
}

async fn route_list(headers: HeaderMap) -> ApiResult {
    authorize(&headers)?;
    Ok(Json(json!({ "items": [{ "name": "route1" }] })))
}

async fn route_status(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ApiResult {
    authorize(&headers)?;
    known_route(&name)?;
    if fake.slow_status.load(Ordering::SeqCst) {
        tokio::time::sleep(SLOW_RESPONSE).await;
    }
    Ok(Json(json!({
        "activeConnections": 3,
        "totalConnections": 10,
        "blockedHosts": 0
    })))
}

async fn route_health(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ApiResult {
    authorize(&headers)?;
    known_route(&name)?;
    if fake.break_health.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let alive = !fake.route_dead.load(Ordering::SeqCst);
    Ok(Json(json!({ "isAlive": alive })))
}

async fn route_destinations(headers: HeaderMap, Path(name): Path<String>) -> ApiResult {
    authorize(&headers)?;
    known_route(&name)?;
    Ok(Json(json!({ "items": [{ "address": "10.0.0.1", "port": 3306 }] })))
}

async fn route_connections(headers: HeaderMap, Path(name): Path<String>) -> ApiResult {
    authorize(&headers)?;
    known_route(&name)?;
    Ok(Json(json!({
        "items": [{
            "bytesFromServer": 100,
            "bytesToServer": 50,
            "sourceAddress": "10.0.0.9:50122",
            "destinationAddress": "10.0.0.1:3306",
            "timeStarted": "2024-01-01T00:00:00.000Z",
            "timeConnectedToServer": "2024-01-01T00:00:01.000Z",
            "timeLastSentToServer": "2024-01-01T00:00:02.500Z",
            "timeLastReceivedFromServer": null
        }]
    })))
}

/// Starts the fake API on a random port and returns its base URL.
pub async fn start_fake_router() -> (String, Shared) {
    let fake: Shared = Arc::new(FakeRouter::default());
    let app = Router::new()
        .route("/api/20190715/router/status", get(router_status))
        .route("/api/20190715/metadata", get(metadata_list))
        .route("/api/20190715/metadata/:name/config", get(metadata_config))
        .route("/api/20190715/metadata/:name/status", get(metadata_status))
        .route("/api/20190715/routes", get(route_list))
        .route("/api/20190715/routes/:name/status", get(route_status))
        .route("/api/20190715/routes/:name/health", get(route_health))
        .route(
            "/api/20190715/routes/:name/destinations",
            get(route_destinations),
        )
        .route(
            "/api/20190715/routes/:name/connections",
            get(route_connections),
        )
        .with_state(Arc::clone(&fake));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), fake)
}
