#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sakila_api::app::build_router;
use sakila_api::config::ServerConfig;
use sakila_api::state::AppState;
use sakila_db::{DbPool, PoolConfig};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults (any CORS origin,
/// no request timeout).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// A pool that never connects unless a query runs.
///
/// Used by tests whose requests must be answered before any database
/// access (validation failures, non-numeric film ids). Points at a closed
/// port with a short acquire timeout so an accidental query fails quickly.
pub fn lazy_pool() -> DbPool {
    let config = PoolConfig {
        host: "127.0.0.1".into(),
        port: 9,
        acquire_timeout: Duration::from_secs(1),
        ..PoolConfig::default()
    };
    sakila_db::create_lazy_pool(&config)
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract one string field from every element of a JSON array.
pub fn strings(rows: &serde_json::Value, field: &str) -> Vec<String> {
    rows.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|row| row[field].as_str().unwrap_or_default().to_string())
        .collect()
}
