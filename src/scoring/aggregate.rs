//! Leaderboard aggregation

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{EventResult, Institute, LeaderboardEntry};

use super::points::{EventType, Placement, PointTable};

/// What happened to a single recorded placement during aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Points and a medal were credited to the institute
    Applied {
        institute_id: i64,
        placement: Placement,
        points: u32,
    },
    /// The enclosing result has an unrecognized event type
    SkippedUnknownType { placement: Placement },
    /// The placement names an institute that is not on the board
    SkippedUnknownInstitute {
        institute_id: i64,
        placement: Placement,
    },
}

/// Per-request accumulator keyed by institute id
#[derive(Debug)]
pub struct Leaderboard<'a> {
    table: &'a PointTable,
    entries: BTreeMap<i64, LeaderboardEntry>,
}

impl<'a> Leaderboard<'a> {
    /// Start a board with one zeroed entry per distinct institute id.
    /// When an id repeats, the first name seen is kept.
    pub fn new(table: &'a PointTable, institutes: &[Institute]) -> Self {
        let mut entries = BTreeMap::new();
        for institute in institutes {
            entries
                .entry(institute.id)
                .or_insert_with(|| LeaderboardEntry::empty(institute.id, institute.name.as_str()));
        }

        Self { table, entries }
    }

    /// Credit every placement of a result. Vacant ranks produce no outcome.
    pub fn record(&mut self, result: &EventResult) -> Vec<PlacementOutcome> {
        let mut outcomes = Vec::with_capacity(3);
        self.apply(result, |outcome| outcomes.push(outcome));
        outcomes
    }

    fn apply(&mut self, result: &EventResult, mut on_outcome: impl FnMut(PlacementOutcome)) {
        let event_type = match result.event_type.parse::<EventType>() {
            Ok(event_type) => event_type,
            Err(err) => {
                debug!(result_id = result.id, event = %result.event_name, "Skipping result: {}", err);
                for (placement, _) in result.placements() {
                    on_outcome(PlacementOutcome::SkippedUnknownType { placement });
                }
                return;
            }
        };

        for (placement, institute_id) in result.placements() {
            on_outcome(self.award(event_type, placement, institute_id));
        }
    }

    fn award(
        &mut self,
        event_type: EventType,
        placement: Placement,
        institute_id: i64,
    ) -> PlacementOutcome {
        let Some(entry) = self.entries.get_mut(&institute_id) else {
            debug!(institute_id, ?placement, "Skipping placement for unknown institute");
            return PlacementOutcome::SkippedUnknownInstitute {
                institute_id,
                placement,
            };
        };

        let points = self.table.points_for(event_type, placement);
        let medals = match event_type {
            EventType::Individual => &mut entry.individual_medals,
            EventType::Group => &mut entry.group_medals,
        };
        medals[placement.index()] += 1;
        entry.total += u64::from(points);

        PlacementOutcome::Applied {
            institute_id,
            placement,
            points,
        }
    }

    /// Entries sorted by total descending, ties broken by institute id ascending
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        // BTreeMap yields ascending ids and sort_by is stable
        let mut entries: Vec<LeaderboardEntry> = self.entries.into_values().collect();
        entries.sort_by(|a, b| b.total.cmp(&a.total));
        entries
    }
}

/// Aggregate results into a ranked leaderboard
pub fn aggregate(
    table: &PointTable,
    institutes: &[Institute],
    results: &[EventResult],
) -> Vec<LeaderboardEntry> {
    let mut board = Leaderboard::new(table, institutes);
    for result in results {
        board.apply(result, |_| {});
    }
    board.into_entries()
}
