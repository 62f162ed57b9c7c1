//! Leaderboard handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    error::AppResult, models::LeaderboardEntry, services::LeaderboardService, state::AppState,
};

/// Ranked institute standings, highest total first
async fn get_leaderboard(State(state): State<AppState>) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let entries = LeaderboardService::get_leaderboard(state.gateway(), state.point_table()).await?;
    Ok(Json(entries))
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_leaderboard))
}
