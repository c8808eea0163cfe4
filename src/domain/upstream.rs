//! Contract of the external scraping service.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::{StandingsEntry, TeamStatistics};

/// Classification of an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamErrorKind {
    /// The call did not complete within its deadline.
    Timeout,
    /// No connection could be established.
    Unreachable,
    /// The upstream answered with an error status or `success: false`.
    UpstreamRejected,
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timeout => "upstream timeout",
            Self::Unreachable => "upstream unreachable",
            Self::UpstreamRejected => "upstream rejected request",
        };
        f.write_str(name)
    }
}

/// Typed failure of a single upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    /// The upstream's own message for rejections, a transport description otherwise.
    pub message: String,
    /// HTTP status returned by the upstream, if it answered at all.
    pub status: Option<u16>,
    /// Team names the upstream suggested when it could not find the requested one.
    pub available_teams: Vec<String>,
}

impl UpstreamError {
    pub fn timeout(deadline: Duration) -> Self {
        Self {
            kind: UpstreamErrorKind::Timeout,
            message: format!("no response within {}s", deadline.as_secs_f64()),
            status: None,
            available_teams: Vec::new(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Unreachable,
            message: message.into(),
            status: None,
            available_teams: Vec::new(),
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::UpstreamRejected,
            message: message.into(),
            status: Some(status),
            available_teams: Vec::new(),
        }
    }

    /// Attaches the upstream's list of known team names.
    pub fn with_available_teams(mut self, teams: Vec<String>) -> Self {
        self.available_teams = teams;
        self
    }

    /// Returns true for failures where the upstream never produced an answer.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self.kind,
            UpstreamErrorKind::Timeout | UpstreamErrorKind::Unreachable
        )
    }
}

/// Client of the upstream scraping service.
///
/// Each method issues exactly one outbound request bounded by `deadline` and
/// never retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::scraper::ScraperClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsUpstream: Send + Sync {
    /// Fetches season statistics of a team in the given region.
    async fn fetch_team_stats(
        &self,
        region: &str,
        team_name: &str,
        deadline: Duration,
    ) -> Result<TeamStatistics, UpstreamError>;

    /// Fetches the league table of the given region, ordered by position.
    async fn fetch_standings(
        &self,
        region: &str,
        deadline: Duration,
    ) -> Result<Vec<StandingsEntry>, UpstreamError>;

    /// Checks that the upstream is up and reports itself healthy.
    async fn check_health(&self, deadline: Duration) -> Result<(), UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_classification() {
        assert!(UpstreamError::timeout(Duration::from_secs(35)).is_connectivity());
        assert!(UpstreamError::unreachable("connection refused").is_connectivity());
        assert!(!UpstreamError::rejected(404, "not found").is_connectivity());
    }

    #[test]
    fn test_display() {
        let err = UpstreamError::rejected(404, "Equipo 'Foo' no encontrado en spain");
        assert_eq!(
            err.to_string(),
            "upstream rejected request: Equipo 'Foo' no encontrado en spain"
        );
        assert_eq!(
            UpstreamError::timeout(Duration::from_secs(5)).message,
            "no response within 5s"
        );
    }
}
