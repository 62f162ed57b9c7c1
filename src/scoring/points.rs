//! Point table
//!
//! Maps an event type and a finishing position to the points awarded.

use std::fmt;
use std::str::FromStr;

use crate::constants::{event_types, DEFAULT_GROUP_POINTS, DEFAULT_INDIVIDUAL_POINTS};

/// Category of an event, which selects both the point row and the medal
/// array a placement is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Individual,
    Group,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => event_types::INDIVIDUAL,
            Self::Group => event_types::GROUP,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored event type is not one of the recognized values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    /// Matching is exact: stored rows use the upper-case identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            event_types::INDIVIDUAL => Ok(Self::Individual),
            event_types::GROUP => Ok(Self::Group),
            other => Err(UnknownEventType(other.to_string())),
        }
    }
}

/// Finishing position within a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    First,
    Second,
    Third,
}

impl Placement {
    /// All placements in rank order
    pub const ALL: [Placement; 3] = [Placement::First, Placement::Second, Placement::Third];

    /// Slot of this placement in a medal array (gold, silver, bronze)
    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// Points for 1st, 2nd and 3rd place of one event type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPoints(pub [u32; 3]);

impl PlacementPoints {
    pub fn get(&self, placement: Placement) -> u32 {
        self.0[placement.index()]
    }
}

/// Immutable scoring configuration passed to the aggregation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointTable {
    pub individual: PlacementPoints,
    pub group: PlacementPoints,
}

impl PointTable {
    pub fn new(individual: [u32; 3], group: [u32; 3]) -> Self {
        Self {
            individual: PlacementPoints(individual),
            group: PlacementPoints(group),
        }
    }

    /// Point row for an event type
    pub fn row(&self, event_type: EventType) -> &PlacementPoints {
        match event_type {
            EventType::Individual => &self.individual,
            EventType::Group => &self.group,
        }
    }

    /// Points awarded for a placement in an event of the given type
    pub fn points_for(&self, event_type: EventType, placement: Placement) -> u32 {
        self.row(event_type).get(placement)
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self::new(DEFAULT_INDIVIDUAL_POINTS, DEFAULT_GROUP_POINTS)
    }
}
