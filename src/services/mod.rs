//! Business logic services

pub mod event_service;
pub mod institute_service;
pub mod leaderboard_service;
pub mod result_service;

pub use event_service::EventService;
pub use institute_service::InstituteService;
pub use leaderboard_service::LeaderboardService;
pub use result_service::ResultService;
