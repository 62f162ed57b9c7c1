//! Result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::scoring::Placement;

/// Recorded outcome of one event instance
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct EventResult {
    pub id: i64,
    pub event_name: String,
    pub event_type: String,
    pub first_place_id: Option<i64>,
    pub second_place_id: Option<i64>,
    pub third_place_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl EventResult {
    /// Institute holding the given placement, if one was recorded
    pub fn placement_id(&self, placement: Placement) -> Option<i64> {
        match placement {
            Placement::First => self.first_place_id,
            Placement::Second => self.second_place_id,
            Placement::Third => self.third_place_id,
        }
    }

    /// Recorded placements in rank order, skipping vacant ranks
    pub fn placements(&self) -> impl Iterator<Item = (Placement, i64)> + '_ {
        Placement::ALL
            .into_iter()
            .filter_map(|placement| self.placement_id(placement).map(|id| (placement, id)))
    }
}

/// Validated result ready to be written to the `results` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEventResult {
    pub event_name: String,
    pub event_type: String,
    pub first_place_id: Option<i64>,
    pub second_place_id: Option<i64>,
    pub third_place_id: Option<i64>,
}
