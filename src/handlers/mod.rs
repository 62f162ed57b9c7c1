//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod events;
pub mod health;
pub mod institutes;
pub mod leaderboard;
pub mod realtime;
pub mod results;


use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/leaderboard", leaderboard::routes())
        .nest("/institutes", institutes::routes())
        .nest("/events", events::routes())
        .nest("/results", results::routes())
        .nest("/config", realtime::routes())
}

/// Build the application router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
