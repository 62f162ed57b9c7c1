//! Event handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::AppResult, models::Event, services::EventService, state::AppState};

/// List all predefined events
async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventService::list_events(state.gateway()).await?;
    Ok(Json(events))
}

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_events))
}
