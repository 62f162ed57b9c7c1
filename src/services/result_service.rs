//! Result service

use tracing::{info, warn};
use validator::Validate;

use crate::{
    db::DataGateway,
    error::{AppError, AppResult},
    handlers::results::request::{CreateResultRequest, PlacementField},
    models::{EventResult, NewEventResult},
    utils::{is_scored_event_type, validate_required},
};

/// Result service for business logic
pub struct ResultService;

impl ResultService {
    /// List all recorded results
    pub async fn list_results(gateway: &dyn DataGateway) -> AppResult<Vec<EventResult>> {
        Ok(gateway.list_results().await?)
    }

    /// Validate a submitted result and write it.
    ///
    /// Validation failures return before the gateway is touched.
    pub async fn record_result(
        gateway: &dyn DataGateway,
        payload: CreateResultRequest,
    ) -> AppResult<EventResult> {
        let new_result = Self::normalize(payload)?;

        if !is_scored_event_type(&new_result.event_type) {
            warn!(
                event_type = %new_result.event_type,
                "Recording result with an event type the leaderboard does not score"
            );
        }

        let stored = gateway.insert_result(new_result).await?;

        info!(result_id = stored.id, event = %stored.event_name, "Result recorded");

        Ok(stored)
    }

    /// Turn a request into a storable result
    pub fn normalize(payload: CreateResultRequest) -> AppResult<NewEventResult> {
        payload.validate()?;

        let event_name = validate_required(payload.event_name.as_deref())
            .map_err(|e| AppError::Validation(format!("event_name {}", e)))?
            .to_string();
        let event_type = validate_required(payload.event_type.as_deref())
            .map_err(|e| AppError::Validation(format!("event_type {}", e)))?
            .to_string();

        Ok(NewEventResult {
            event_name,
            event_type,
            first_place_id: placement("first_place_id", payload.first_place_id)?,
            second_place_id: placement("second_place_id", payload.second_place_id)?,
            third_place_id: placement("third_place_id", payload.third_place_id)?,
        })
    }
}

fn placement(field: &str, value: Option<PlacementField>) -> AppResult<Option<i64>> {
    match value {
        Some(value) => value
            .into_id()
            .map_err(|e| AppError::Validation(format!("{} {}", field, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::GatewayError,
        test_utils::{fixtures, MockGateway},
    };

    fn request(json: serde_json::Value) -> CreateResultRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_empty_placements_become_absent() {
        let new_result = ResultService::normalize(request(serde_json::json!({
            "event_name": " Chess ",
            "event_type": "INDIVIDUAL",
            "first_place_id": "5",
            "second_place_id": "",
            "third_place_id": 8
        })))
        .unwrap();

        assert_eq!(
            new_result,
            NewEventResult {
                event_name: "Chess".to_string(),
                event_type: "INDIVIDUAL".to_string(),
                first_place_id: Some(5),
                second_place_id: None,
                third_place_id: Some(8),
            }
        );
    }

    #[test]
    fn test_blank_event_name_rejected() {
        let err = ResultService::normalize(request(serde_json::json!({
            "event_name": "   ",
            "event_type": "GROUP"
        })))
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_non_numeric_placement_rejected() {
        let err = ResultService::normalize(request(serde_json::json!({
            "event_name": "Chess",
            "event_type": "GROUP",
            "first_place_id": "first"
        })))
        .unwrap_err();

        assert!(err.to_string().contains("first_place_id"));
    }

    #[tokio::test]
    async fn test_missing_event_type_skips_write() {
        let mut gateway = MockGateway::new();
        gateway.expect_insert_result().never();

        let result = ResultService::record_result(
            &gateway,
            request(serde_json::json!({ "event_name": "Chess" })),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_records_normalized_result() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_insert_result()
            .withf(|new_result| {
                new_result.event_name == "Relay"
                    && new_result.first_place_id == Some(2)
                    && new_result.second_place_id.is_none()
            })
            .times(1)
            .returning(|new_result| {
                let mut stored = fixtures::result(11, &new_result.event_type, [Some(2), None, None]);
                stored.event_name = new_result.event_name;
                Ok(stored)
            });

        let stored = ResultService::record_result(
            &gateway,
            request(serde_json::json!({
                "event_name": "Relay",
                "event_type": "GROUP",
                "first_place_id": 2,
                "second_place_id": ""
            })),
        )
        .await
        .unwrap();

        assert_eq!(stored.id, 11);
        assert_eq!(stored.event_type, "GROUP");
    }

    #[tokio::test]
    async fn test_write_failure_is_propagated() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_insert_result()
            .returning(|_| {
                Err(GatewayError::Write {
                    table: "results",
                    source: sqlx::Error::PoolClosed,
                })
            });

        let result = ResultService::record_result(
            &gateway,
            request(serde_json::json!({ "event_name": "Chess", "event_type": "INDIVIDUAL" })),
        )
        .await;

        assert!(matches!(result, Err(AppError::Gateway(_))));
    }
}
