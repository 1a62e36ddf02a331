//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (catalog loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the catalog is installed and the sidebar can render.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.catalog_loaded().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (catalog_ok, widgets) = {
        let dashboard = state.dashboard.read().await;
        (dashboard.catalog().is_some(), dashboard.registry().len())
    };

    Json(HealthResponse {
        status: if catalog_ok { "healthy" } else { "degraded" }.to_string(),
        catalog: if catalog_ok { "loaded" } else { "missing" }.to_string(),
        widgets,
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
