//! Repository trait for league metadata storage.

use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the storage holding league records.
///
/// The gateway never writes to storage; it only checks that the store is
/// reachable when reporting health.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLeagueRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Runs a trivial query against the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached or the
    /// query fails.
    async fn ping(&self) -> Result<(), AppError>;
}
