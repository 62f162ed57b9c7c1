//! Utility functions

pub mod validation;

pub use validation::{is_scored_event_type, parse_placement_id, validate_required};
