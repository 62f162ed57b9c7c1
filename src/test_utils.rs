//! Test utilities: a mocked data gateway and row fixtures

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use mockall::mock;

use crate::{
    config::Config,
    db::{DataGateway, GatewayError, GatewayResult},
    handlers,
    models::{Event, EventResult, Institute, NewEventResult},
    state::AppState,
};

mock! {
    pub Gateway {}

    #[async_trait]
    impl DataGateway for Gateway {
        async fn ping(&self) -> GatewayResult<()>;
        async fn list_institutes(&self) -> GatewayResult<Vec<Institute>>;
        async fn list_events(&self) -> GatewayResult<Vec<Event>>;
        async fn list_results(&self) -> GatewayResult<Vec<EventResult>>;
        async fn insert_result(&self, result: NewEventResult) -> GatewayResult<EventResult>;
    }
}

/// Gateway error as produced when the connection pool is exhausted
pub fn pool_timeout() -> GatewayError {
    GatewayError::Unreachable {
        source: sqlx::Error::PoolTimedOut,
    }
}

/// Build the full router around a mocked gateway
pub fn test_app(gateway: MockGateway) -> Router {
    test_app_with_config(gateway, Config::default())
}

pub fn test_app_with_config(gateway: MockGateway, config: Config) -> Router {
    handlers::build_router(AppState::new(Arc::new(gateway), config))
}

pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::EventResult;

    pub fn result(id: i64, event_type: &str, places: [Option<i64>; 3]) -> EventResult {
        EventResult {
            id,
            event_name: format!("Event {}", id),
            event_type: event_type.to_string(),
            first_place_id: places[0],
            second_place_id: places[1],
            third_place_id: places[2],
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }
}
