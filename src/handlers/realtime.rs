//! Realtime connection settings for browser clients

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Parameters a client needs to open its own realtime subscription
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeConfigResponse {
    pub realtime_url: Option<String>,
    pub realtime_anon_key: Option<String>,
}

async fn get_config(State(state): State<AppState>) -> Json<RealtimeConfigResponse> {
    let realtime = &state.config().realtime;
    Json(RealtimeConfigResponse {
        realtime_url: realtime.url.clone(),
        realtime_anon_key: realtime.anon_key.clone(),
    })
}

/// Realtime config routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_config))
}
