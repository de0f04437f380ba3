use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::stats::dtos::StatsDto;

/// Service for aggregate platform statistics
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count all four collections and derive the hours estimate
    pub async fn summary(&self) -> Result<StatsDto> {
        let (volunteers, ngos, opportunities, applications) = tokio::try_join!(
            self.count("volunteers"),
            self.count("ngos"),
            self.count("opportunities"),
            self.count("applications"),
        )?;

        Ok(StatsDto::from_counts(
            volunteers,
            ngos,
            opportunities,
            applications,
        ))
    }

    async fn count(&self, table: &str) -> Result<i64> {
        // `table` is one of the four fixed collection names above
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", table, e);
                AppError::Database(e)
            })
    }
}
