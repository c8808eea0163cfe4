//! HTTP client for the upstream scraper.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::types::{HealthBody, LeagueRow, ScrapeEnvelope};
use crate::domain::entities::standings::into_table;
use crate::domain::entities::{StandingsEntry, TeamStatistics};
use crate::domain::upstream::{StatsUpstream, UpstreamError};

/// Errors raised when building a [`ScraperClient`].
#[derive(Debug, thiserror::Error)]
pub enum ScraperClientError {
    #[error("invalid scraper base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Scraper API client.
///
/// Holds only the base URL and a pooled `reqwest` client, so one instance is
/// shared by all requests. Deadlines are set per call; nothing is retried or
/// cached.
#[derive(Debug, Clone)]
pub struct ScraperClient {
    http: Client,
    base_url: Url,
}

impl ScraperClient {
    /// Creates a client for the scraper listening at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperClientError::InvalidBaseUrl`] unless `base_url` is an
    /// absolute `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, ScraperClientError> {
        let invalid = |reason: String| ScraperClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("stats-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issues one GET and returns the status and raw body.
    async fn get(&self, url: Url, deadline: Duration) -> Result<(StatusCode, Vec<u8>), UpstreamError> {
        debug!(%url, ?deadline, "Calling scraper");

        let response = self
            .http
            .get(url)
            .timeout(deadline)
            .send()
            .await
            .map_err(|e| transport_error(e, deadline))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, deadline))?;

        Ok((status, body.to_vec()))
    }

    /// Fetches a scrape endpoint and unwraps its envelope.
    async fn scrape<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        deadline: Duration,
    ) -> Result<T, UpstreamError> {
        let (status, body) = self.get(self.endpoint(segments), deadline).await?;

        let mut envelope: ScrapeEnvelope<T> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(UpstreamError::rejected(
                    status.as_u16(),
                    format!("scraper returned {status}"),
                ));
            }
            Err(e) => {
                return Err(UpstreamError::rejected(
                    StatusCode::BAD_GATEWAY.as_u16(),
                    format!("malformed scraper response: {e}"),
                ));
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .failure_message()
                .unwrap_or_else(|| format!("scraper returned {status}"));
            return Err(UpstreamError::rejected(status.as_u16(), message)
                .with_available_teams(envelope.available_teams));
        }

        envelope.data.ok_or_else(|| {
            UpstreamError::rejected(
                StatusCode::BAD_GATEWAY.as_u16(),
                "scraper response carried no data",
            )
        })
    }
}

/// Classifies a transport failure.
fn transport_error(e: reqwest::Error, deadline: Duration) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::timeout(deadline)
    } else {
        UpstreamError::unreachable(e.to_string())
    }
}

#[async_trait]
impl StatsUpstream for ScraperClient {
    async fn fetch_team_stats(
        &self,
        region: &str,
        team_name: &str,
        deadline: Duration,
    ) -> Result<TeamStatistics, UpstreamError> {
        let stats: TeamStatistics = self
            .scrape(&["api", "scrape", "team", region, team_name], deadline)
            .await?;

        stats.normalized().map_err(|e| {
            UpstreamError::rejected(
                StatusCode::BAD_GATEWAY.as_u16(),
                format!("malformed scraper response: {e}"),
            )
        })
    }

    async fn fetch_standings(
        &self,
        region: &str,
        deadline: Duration,
    ) -> Result<Vec<StandingsEntry>, UpstreamError> {
        let rows: Vec<LeagueRow> = self
            .scrape(&["api", "scrape", "league", region], deadline)
            .await?;

        Ok(into_table(rows.into_iter().map(StandingsEntry::from).collect()))
    }

    async fn check_health(&self, deadline: Duration) -> Result<(), UpstreamError> {
        let (status, body) = self.get(self.endpoint(&["api", "health"]), deadline).await?;

        if !status.is_success() {
            return Err(UpstreamError::rejected(
                status.as_u16(),
                format!("scraper health returned {status}"),
            ));
        }

        let health: HealthBody = serde_json::from_slice(&body).map_err(|e| {
            UpstreamError::rejected(
                StatusCode::BAD_GATEWAY.as_u16(),
                format!("malformed scraper health response: {e}"),
            )
        })?;

        if health.status.eq_ignore_ascii_case("ok") {
            debug!(service = ?health.service, "Scraper healthy");
            Ok(())
        } else {
            Err(UpstreamError::rejected(
                status.as_u16(),
                format!("scraper reports status '{}'", health.status),
            ))
        }
    }
}
