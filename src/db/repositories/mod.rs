//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod event_repo;
pub mod institute_repo;
pub mod result_repo;

pub use event_repo::EventRepository;
pub use institute_repo::InstituteRepository;
pub use result_repo::ResultRepository;
