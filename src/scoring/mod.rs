//! Scoring engine
//!
//! Turns institutes and recorded results into a ranked leaderboard.
//!
//! The engine is pure and infallible. Data anomalies (unrecognized event
//! types, placements naming unknown institutes) are excluded from scoring
//! and reported only through [`PlacementOutcome`].

pub mod aggregate;
pub mod points;

pub use aggregate::{aggregate, Leaderboard, PlacementOutcome};
pub use points::{EventType, Placement, PlacementPoints, PointTable, UnknownEventType};
