//! Wire types of the scraper API.

use serde::Deserialize;

use crate::domain::entities::StandingsEntry;

/// Envelope wrapping every scrape response.
///
/// Failures carry `success: false` and a `message`, or an `error` for
/// unexpected scraper crashes.
#[derive(Debug, Deserialize)]
pub struct ScrapeEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Sent alongside "team not found" rejections.
    #[serde(default)]
    pub available_teams: Vec<String>,
}

impl<T> ScrapeEnvelope<T> {
    /// The scraper's explanation of a failure, if it gave one.
    pub fn failure_message(&mut self) -> Option<String> {
        self.message.take().or_else(|| self.error.take())
    }
}

/// A team row of a scraped league table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRow {
    pub name: String,
    pub position: u32,
    pub points: u32,
    pub matches_played: u32,
}

impl From<LeagueRow> for StandingsEntry {
    fn from(row: LeagueRow) -> Self {
        StandingsEntry::new(row.position, row.name, row.points, row.matches_played)
    }
}

/// Body of the scraper health endpoint.
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
