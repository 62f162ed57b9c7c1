//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.
//!
//! Data anomalies met while scoring are not errors and never reach this
//! module; see [`crate::scoring::PlacementOutcome`].

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::GatewayError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Data gateway errors
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Gateway(_) => "GATEWAY_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Gateway messages are passed on to the caller
        let message = match &self {
            AppError::Gateway(e) => {
                tracing::error!("Gateway error: {}", e);
                tracing::debug!("Gateway error details: {:?}", e);
                e.to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::InvalidInput(err.body_text())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::pool_timeout;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("event_name is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Gateway(pool_timeout()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gateway_message_is_surfaced() {
        let err = AppError::from(GatewayError::Read {
            table: "institutes",
            source: sqlx::Error::PoolTimedOut,
        });
        assert!(err.to_string().starts_with("Failed to read from institutes: "));
        assert_eq!(err.error_code(), "GATEWAY_ERROR");
    }
}
