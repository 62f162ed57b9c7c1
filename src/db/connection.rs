//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

/// Connection pools for the read and write credentials
#[derive(Debug, Clone)]
pub struct Pools {
    pub reader: PgPool,
    pub writer: PgPool,
}

/// Create a new database connection pool
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Create the reader and writer pools.
///
/// When no separate write URL is configured both pools share one connection
/// pool.
pub async fn create_pools(config: &DatabaseConfig) -> Result<Pools, sqlx::Error> {
    let reader = create_pool(&config.read_url, config.max_connections).await?;
    let writer = match &config.write_url {
        Some(url) if url != &config.read_url => create_pool(url, config.max_connections).await?,
        _ => reader.clone(),
    };

    Ok(Pools { reader, writer })
}

/// Test database connection
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
