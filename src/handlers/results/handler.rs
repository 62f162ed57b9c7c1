//! Result handler implementations

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::EventResult,
    services::ResultService,
    state::AppState,
};

use super::{request::CreateResultRequest, response::CreateResultResponse};

/// List all recorded results
pub async fn list_results(State(state): State<AppState>) -> AppResult<Json<Vec<EventResult>>> {
    let results = ResultService::list_results(state.gateway()).await?;
    Ok(Json(results))
}

/// Record a new result
pub async fn create_result(
    State(state): State<AppState>,
    payload: Result<Json<CreateResultRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateResultResponse>)> {
    let Json(payload) = payload?;

    let stored = ResultService::record_result(state.gateway(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateResultResponse {
            message: "Result recorded successfully".to_string(),
            data: stored,
        }),
    ))
}
