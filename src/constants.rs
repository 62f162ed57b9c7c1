//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections per pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Table names exposed by the hosted store
pub mod tables {
    pub const INSTITUTES: &str = "institutes";
    pub const EVENTS: &str = "events";
    pub const RESULTS: &str = "results";
}

// =============================================================================
// SCORING
// =============================================================================

/// Event type identifiers as stored in the `events` and `results` tables
pub mod event_types {
    pub const INDIVIDUAL: &str = "INDIVIDUAL";
    pub const GROUP: &str = "GROUP";
}

/// Default points for 1st, 2nd and 3rd place in an individual event
pub const DEFAULT_INDIVIDUAL_POINTS: [u32; 3] = [10, 7, 5];

/// Default points for 1st, 2nd and 3rd place in a group event
pub const DEFAULT_GROUP_POINTS: [u32; 3] = [20, 15, 10];

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum length of a submitted event name
pub const MAX_EVENT_NAME_LENGTH: u64 = 200;

/// Maximum length of a submitted event type
pub const MAX_EVENT_TYPE_LENGTH: u64 = 32;
