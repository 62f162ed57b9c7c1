//! Institute repository

use sqlx::PgPool;

use crate::models::Institute;

/// Repository for institute database operations
pub struct InstituteRepository;

impl InstituteRepository {
    /// List all institutes
    pub async fn list(pool: &PgPool) -> Result<Vec<Institute>, sqlx::Error> {
        sqlx::query_as::<_, Institute>(r#"SELECT id, name FROM institutes ORDER BY id"#)
            .fetch_all(pool)
            .await
    }
}
