//! Event model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Predefined competition category
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Stored as free text, INDIVIDUAL or GROUP
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub event_type: String,
}
