//! Event repository

use sqlx::PgPool;

use crate::models::Event;

/// Repository for event database operations
pub struct EventRepository;

impl EventRepository {
    /// List all predefined events
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(r#"SELECT id, name, type FROM events ORDER BY id"#)
            .fetch_all(pool)
            .await
    }
}
