//! Institute service

use crate::{db::DataGateway, error::AppResult, models::Institute};

/// Institute service for business logic
pub struct InstituteService;

impl InstituteService {
    /// List all institutes
    pub async fn list_institutes(gateway: &dyn DataGateway) -> AppResult<Vec<Institute>> {
        Ok(gateway.list_institutes().await?)
    }
}
