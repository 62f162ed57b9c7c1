//! Logging middleware

use std::time::Instant;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

/// How a finished request should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestOutcome {
    Success,
    ClientError,
    ServerError,
}

impl RequestOutcome {
    fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
            Self::ClientError
        } else {
            Self::Success
        }
    }
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method: Method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match RequestOutcome::from_status(status) {
        RequestOutcome::ServerError => error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        ),
        RequestOutcome::ClientError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        ),
        RequestOutcome::Success => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(RequestOutcome::from_status(StatusCode::OK), RequestOutcome::Success);
        assert_eq!(RequestOutcome::from_status(StatusCode::CREATED), RequestOutcome::Success);
        assert_eq!(
            RequestOutcome::from_status(StatusCode::BAD_REQUEST),
            RequestOutcome::ClientError
        );
        // Unknown paths are routine noise
        assert_eq!(RequestOutcome::from_status(StatusCode::NOT_FOUND), RequestOutcome::Success);
        assert_eq!(
            RequestOutcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            RequestOutcome::ServerError
        );
    }
}
