//! Institute handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::AppResult, models::Institute, services::InstituteService, state::AppState};

/// List all institutes
async fn list_institutes(State(state): State<AppState>) -> AppResult<Json<Vec<Institute>>> {
    let institutes = InstituteService::list_institutes(state.gateway()).await?;
    Ok(Json(institutes))
}

/// Institute routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_institutes))
}
