//! Result repository

use sqlx::PgPool;

use crate::models::{EventResult, NewEventResult};

/// Repository for result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Insert a result and return the stored row
    pub async fn create(pool: &PgPool, result: &NewEventResult) -> Result<EventResult, sqlx::Error> {
        sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (
                event_name, event_type, first_place_id, second_place_id, third_place_id
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_name, event_type, first_place_id, second_place_id,
                      third_place_id, created_at
            "#,
        )
        .bind(&result.event_name)
        .bind(&result.event_type)
        .bind(result.first_place_id)
        .bind(result.second_place_id)
        .bind(result.third_place_id)
        .fetch_one(pool)
        .await
    }

    /// List all results, oldest first
    pub async fn list(pool: &PgPool) -> Result<Vec<EventResult>, sqlx::Error> {
        sqlx::query_as::<_, EventResult>(
            r#"
            SELECT id, event_name, event_type, first_place_id, second_place_id,
                   third_place_id, created_at
            FROM results
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
