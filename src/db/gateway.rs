//! Data gateway
//!
//! The hosted store is reached only through the [`DataGateway`] trait so
//! services and handlers can run against a mock in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    constants::tables,
    models::{Event, EventResult, Institute, NewEventResult},
};

use super::{
    connection::{test_connection, Pools},
    repositories::{EventRepository, InstituteRepository, ResultRepository},
};

/// Failure talking to the hosted store. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to read from {table}: {source}")]
    Read {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to write to {table}: {source}")]
    Write {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Gateway unreachable: {source}")]
    Unreachable {
        #[source]
        source: sqlx::Error,
    },
}

impl GatewayError {
    fn read(table: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Read { table, source }
    }

    fn write(table: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Write { table, source }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Select and insert operations over the `institutes`, `events` and
/// `results` tables
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Round trip to the store without touching any table
    async fn ping(&self) -> GatewayResult<()>;

    async fn list_institutes(&self) -> GatewayResult<Vec<Institute>>;

    async fn list_events(&self) -> GatewayResult<Vec<Event>>;

    async fn list_results(&self) -> GatewayResult<Vec<EventResult>>;

    async fn insert_result(&self, result: NewEventResult) -> GatewayResult<EventResult>;
}

/// Postgres-backed gateway using separate read and write credentials
#[derive(Debug, Clone)]
pub struct PgGateway {
    reader: PgPool,
    writer: PgPool,
}

impl PgGateway {
    pub fn new(pools: Pools) -> Self {
        Self {
            reader: pools.reader,
            writer: pools.writer,
        }
    }
}

#[async_trait]
impl DataGateway for PgGateway {
    async fn ping(&self) -> GatewayResult<()> {
        test_connection(&self.reader)
            .await
            .map_err(|source| GatewayError::Unreachable { source })
    }

    async fn list_institutes(&self) -> GatewayResult<Vec<Institute>> {
        let institutes = InstituteRepository::list(&self.reader)
            .await
            .map_err(GatewayError::read(tables::INSTITUTES))?;
        debug!(count = institutes.len(), "Fetched institutes");
        Ok(institutes)
    }

    async fn list_events(&self) -> GatewayResult<Vec<Event>> {
        let events = EventRepository::list(&self.reader)
            .await
            .map_err(GatewayError::read(tables::EVENTS))?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    async fn list_results(&self) -> GatewayResult<Vec<EventResult>> {
        let results = ResultRepository::list(&self.reader)
            .await
            .map_err(GatewayError::read(tables::RESULTS))?;
        debug!(count = results.len(), "Fetched results");
        Ok(results)
    }

    async fn insert_result(&self, result: NewEventResult) -> GatewayResult<EventResult> {
        let stored = ResultRepository::create(&self.writer, &result)
            .await
            .map_err(GatewayError::write(tables::RESULTS))?;
        debug!(result_id = stored.id, event = %stored.event_name, "Inserted result");
        Ok(stored)
    }
}
