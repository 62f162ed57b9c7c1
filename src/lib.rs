//! Medalboard - Competition Leaderboard Backend
//!
//! This library serves an institute medal leaderboard backed by a hosted
//! Postgres database. It lists institutes and events, records event results
//! and ranks institutes by the points their placements earn.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Scoring**: Pure leaderboard aggregation
//! - **Db**: The data gateway and its repositories
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
