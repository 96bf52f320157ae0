//! HTTP surface: one prediction route plus a health probe.

mod error;
mod handlers;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer};

use crate::{infrastructure::shutdown::ShutdownListener, workflow::SafetyWorkflow};

use handlers::{handle_health, handle_predict};

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s). Expiry is a server-side failure, answered with 504.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub workflow: SafetyWorkflow,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub message: String,
}

pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route("/predict", post(handle_predict))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ));

    if !cors_origins.is_empty() {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    app
}

/// Serves until the shutdown listener fires.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    cors_origins: &[String],
    mut shutdown: ShutdownListener,
) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("get listener local address")?;
    let app = build_app(state, cors_origins);

    tracing::info!(target: "http", %addr, "listening: POST /predict, GET /health");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.notified().await })
        .await
        .context("serve HTTP API")?;
    tracing::info!(target: "http", "HTTP server stopped");
    Ok(())
}
