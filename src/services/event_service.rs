//! Event service

use crate::{db::DataGateway, error::AppResult, models::Event};

/// Event service for business logic
pub struct EventService;

impl EventService {
    /// List all predefined events
    pub async fn list_events(gateway: &dyn DataGateway) -> AppResult<Vec<Event>> {
        Ok(gateway.list_events().await?)
    }
}
