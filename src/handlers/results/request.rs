//! Result request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_EVENT_NAME_LENGTH, MAX_EVENT_TYPE_LENGTH},
    utils::parse_placement_id,
};

/// Placement id as sent by clients: a number, a numeric string, or an
/// empty string for a vacant rank
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PlacementField {
    Id(i64),
    Text(String),
}

impl PlacementField {
    /// Normalize to an institute id, `None` meaning the rank is vacant
    pub fn into_id(self) -> Result<Option<i64>, &'static str> {
        match self {
            Self::Id(id) => Ok(Some(id)),
            Self::Text(raw) => parse_placement_id(&raw),
        }
    }
}

/// Record result request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateResultRequest {
    #[validate(
        required(message = "event_name is required"),
        length(min = 1, max = MAX_EVENT_NAME_LENGTH)
    )]
    pub event_name: Option<String>,

    /// INDIVIDUAL or GROUP
    #[validate(
        required(message = "event_type is required"),
        length(min = 1, max = MAX_EVENT_TYPE_LENGTH)
    )]
    pub event_type: Option<String>,

    #[serde(default)]
    pub first_place_id: Option<PlacementField>,

    #[serde(default)]
    pub second_place_id: Option<PlacementField>,

    #[serde(default)]
    pub third_place_id: Option<PlacementField>,
}
