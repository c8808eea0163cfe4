//! Statistics gateway: league translation, upstream calls and fallback policy.

use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::services::HealthAggregator;
use crate::domain::entities::{HealthReport, StandingsEntry, TeamStatistics};
use crate::domain::fallback;
use crate::domain::league_codes::LeagueCodes;
use crate::domain::upstream::{StatsUpstream, UpstreamError};
use crate::error::AppError;

/// Where the data of a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Upstream,
    Fallback,
}

/// Successful gateway answer.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse<T> {
    pub data: T,
    pub source: DataSource,
    /// Wall-clock time spent serving the request.
    pub duration: Duration,
}

/// Gateway tunables, taken from the service configuration.
#[derive(Debug, Clone, Copy)]
pub struct GatewaySettings {
    /// Deadline of each statistics call to the upstream.
    pub stats_timeout: Duration,
    /// Serve built-in data when the upstream cannot be reached.
    pub fallback_enabled: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            stats_timeout: Duration::from_secs(35),
            fallback_enabled: true,
        }
    }
}

/// Orchestrates the league code table, the upstream client and the fallback
/// dataset for each inbound request.
///
/// Fallback policy differs per operation:
///
/// - team statistics fall back only when the upstream could not be reached
///   (timeout or connection failure); an upstream rejection usually means the
///   team does not exist and is surfaced to the caller
/// - standings fall back on any upstream failure
pub struct StatsGateway {
    league_codes: Arc<LeagueCodes>,
    upstream: Arc<dyn StatsUpstream>,
    health: Arc<HealthAggregator>,
    settings: GatewaySettings,
}

impl StatsGateway {
    /// Creates a new gateway.
    pub fn new(
        league_codes: Arc<LeagueCodes>,
        upstream: Arc<dyn StatsUpstream>,
        health: Arc<HealthAggregator>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            league_codes,
            upstream,
            health,
            settings,
        }
    }

    /// Returns season statistics of a team.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if either parameter is blank; no
    /// upstream call is made in that case.
    /// Returns [`AppError::UpstreamRejected`] with the upstream's message when
    /// the scraper answered with a failure.
    /// Returns [`AppError::Unavailable`] when the scraper could not be reached
    /// and fallback is disabled.
    pub async fn get_team_stats(
        &self,
        league_slug: &str,
        team_name: &str,
    ) -> Result<GatewayResponse<TeamStatistics>, AppError> {
        let started = Instant::now();
        let league = league_slug.trim();
        let team = team_name.trim();

        if league.is_empty() || team.is_empty() {
            return Err(AppError::invalid_request(
                "League and team are required",
                json!({ "league": league_slug, "team": team_name }),
            ));
        }

        let region = self.league_codes.translate(league);
        tracing::debug!(league, region = %region, team, "Fetching team statistics");

        match self
            .upstream
            .fetch_team_stats(&region, team, self.settings.stats_timeout)
            .await
        {
            Ok(stats) => {
                record_outcome("team", DataSource::Upstream);
                tracing::info!(
                    league,
                    team,
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Team statistics served from upstream"
                );
                Ok(GatewayResponse {
                    data: stats,
                    source: DataSource::Upstream,
                    duration: started.elapsed(),
                })
            }
            Err(e) if e.is_connectivity() && self.settings.fallback_enabled => {
                record_outcome("team", DataSource::Fallback);
                tracing::warn!(league, team, error = %e, "Degraded: serving fallback team statistics");
                Ok(GatewayResponse {
                    data: fallback::team_fallback(team, league),
                    source: DataSource::Fallback,
                    duration: started.elapsed(),
                })
            }
            Err(e) => {
                tracing::warn!(league, team, error = %e, "Team statistics request failed");
                Err(AppError::from(e))
            }
        }
    }

    /// Returns the league table, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the league is blank.
    /// Returns [`AppError::Internal`] on upstream failure when fallback is disabled.
    pub async fn get_league_standings(
        &self,
        league_slug: &str,
    ) -> Result<GatewayResponse<Vec<StandingsEntry>>, AppError> {
        let started = Instant::now();
        let league = league_slug.trim();

        if league.is_empty() {
            return Err(AppError::invalid_request(
                "League is required",
                json!({ "league": league_slug }),
            ));
        }

        let region = self.league_codes.translate(league);
        tracing::debug!(league, region = %region, "Fetching league standings");

        match self
            .upstream
            .fetch_standings(&region, self.settings.stats_timeout)
            .await
        {
            Ok(table) => {
                record_outcome("standings", DataSource::Upstream);
                Ok(GatewayResponse {
                    data: table,
                    source: DataSource::Upstream,
                    duration: started.elapsed(),
                })
            }
            Err(e) if self.settings.fallback_enabled => {
                record_outcome("standings", DataSource::Fallback);
                tracing::warn!(league, error = %e, "Degraded: serving fallback standings");
                Ok(GatewayResponse {
                    data: fallback::standings_fallback(league),
                    source: DataSource::Fallback,
                    duration: started.elapsed(),
                })
            }
            Err(e) => {
                tracing::warn!(league, error = %e, "Standings request failed");
                Err(standings_error(e))
            }
        }
    }

    /// Returns the composite health report. Never fails.
    pub async fn get_health(&self) -> HealthReport {
        self.health.probe().await
    }
}

fn standings_error(e: UpstreamError) -> AppError {
    AppError::internal(
        e.to_string(),
        json!({ "kind": e.kind, "upstreamStatus": e.status }),
    )
}

fn record_outcome(endpoint: &'static str, source: DataSource) {
    let source = match source {
        DataSource::Upstream => "upstream",
        DataSource::Fallback => "fallback",
    };
    metrics::counter!("gateway_responses_total", "endpoint" => endpoint, "source" => source)
        .increment(1);
}
