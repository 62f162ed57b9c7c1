//! Leaderboard model

use serde::Serialize;

/// Medal counts indexed gold, silver, bronze
pub type MedalCounts = [u32; 3];

/// One institute's standing, derived per request and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(skip)]
    pub institute_id: i64,
    pub name: String,
    pub individual_medals: MedalCounts,
    pub group_medals: MedalCounts,
    pub total: u64,
}

impl LeaderboardEntry {
    /// Zeroed entry for an institute with no placements yet
    pub fn empty(institute_id: i64, name: impl Into<String>) -> Self {
        Self {
            institute_id,
            name: name.into(),
            individual_medals: [0; 3],
            group_medals: [0; 3],
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_without_id() {
        let entry = LeaderboardEntry {
            institute_id: 7,
            name: "A".to_string(),
            individual_medals: [1, 0, 2],
            group_medals: [0, 1, 0],
            total: 35,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "individualMedals": [1, 0, 2],
                "groupMedals": [0, 1, 0],
                "total": 35
            })
        );
    }
}
