//! Leaderboard service

use tracing::info;

use crate::{
    db::DataGateway,
    error::AppResult,
    models::LeaderboardEntry,
    scoring::{self, PointTable},
};

/// Leaderboard service for business logic
pub struct LeaderboardService;

impl LeaderboardService {
    /// Read a fresh snapshot of institutes and results and rank them.
    ///
    /// Either read failing fails the whole request.
    pub async fn get_leaderboard(
        gateway: &dyn DataGateway,
        table: &PointTable,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let (institutes, results) =
            tokio::try_join!(gateway.list_institutes(), gateway.list_results())?;

        let entries = scoring::aggregate(table, &institutes, &results);

        info!(
            institutes = institutes.len(),
            results = results.len(),
            "Computed leaderboard"
        );

        Ok(entries)
    }
}
