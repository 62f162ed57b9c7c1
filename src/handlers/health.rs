//! Liveness and gateway reachability

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when the gateway answered, `degraded` otherwise
    pub status: &'static str,
    pub gateway: &'static str,
    pub version: &'static str,
}

/// Reports 503 while the hosted store cannot be reached
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, gateway) = match state.gateway().ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "reachable"),
        Err(e) => {
            warn!("Health check could not reach gateway: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            gateway,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
