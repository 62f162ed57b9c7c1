//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod event;
pub mod institute;
pub mod leaderboard;
pub mod result;

pub use event::*;
pub use institute::*;
pub use leaderboard::*;
pub use result::*;
