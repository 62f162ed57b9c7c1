//! Institute model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A competing organization tracked on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Institute {
    pub id: i64,
    pub name: String,
}

impl Institute {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
