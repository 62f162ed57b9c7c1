//! Input validation utilities

use crate::scoring::EventType;

/// Require a value that is present and not blank, returning it trimmed
pub fn validate_required(value: Option<&str>) -> Result<&str, &'static str> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err("is required"),
    }
}

/// Parse a placement id submitted as text.
///
/// An empty (or blank) string means the rank was left vacant.
pub fn parse_placement_id(raw: &str) -> Result<Option<i64>, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| "must be an institute id")
}

/// Check whether an event type will be scored by the leaderboard
pub fn is_scored_event_type(event_type: &str) -> bool {
    event_type.parse::<EventType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required(Some("Chess")), Ok("Chess"));
        assert_eq!(validate_required(Some("  Chess ")), Ok("Chess"));
        assert!(validate_required(Some("")).is_err());
        assert!(validate_required(Some("   ")).is_err());
        assert!(validate_required(None).is_err());
    }

    #[test]
    fn test_parse_placement_id() {
        assert_eq!(parse_placement_id("12"), Ok(Some(12)));
        assert_eq!(parse_placement_id(" 7 "), Ok(Some(7)));
        assert_eq!(parse_placement_id(""), Ok(None));
        assert_eq!(parse_placement_id("  "), Ok(None));
        assert!(parse_placement_id("abc").is_err());
        assert!(parse_placement_id("1.5").is_err());
    }

    #[test]
    fn test_is_scored_event_type() {
        assert!(is_scored_event_type("INDIVIDUAL"));
        assert!(is_scored_event_type("GROUP"));
        assert!(!is_scored_event_type("RELAY"));
        assert!(!is_scored_event_type("group"));
    }
}
