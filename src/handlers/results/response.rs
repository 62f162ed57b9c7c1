//! Result response DTOs

use serde::Serialize;

use crate::models::EventResult;

/// Response for a newly recorded result
#[derive(Debug, Serialize)]
pub struct CreateResultResponse {
    pub message: String,
    pub data: EventResult,
}
