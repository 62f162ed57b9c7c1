//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::DataGateway, scoring::PointTable};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Access to the hosted store
    gateway: Arc<dyn DataGateway>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(gateway: Arc<dyn DataGateway>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { gateway, config }),
        }
    }

    /// Get a reference to the data gateway
    pub fn gateway(&self) -> &dyn DataGateway {
        self.inner.gateway.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Point table used for leaderboard aggregation
    pub fn point_table(&self) -> &PointTable {
        &self.inner.config.scoring
    }
}
