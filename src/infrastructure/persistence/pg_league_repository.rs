//! PostgreSQL implementation of league repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::LeagueRepository;
use crate::error::AppError;

/// PostgreSQL repository for league records.
pub struct PgLeagueRepository {
    pool: Arc<PgPool>,
}

impl PgLeagueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeagueRepository for PgLeagueRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
