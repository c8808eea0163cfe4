//! Handlers for team statistics and league standings.

use axum::{
    Json,
    extract::{Path, State},
};
use std::time::Instant;

use crate::api::dto::stats::DataResponse;
use crate::domain::entities::{StandingsEntry, TeamStatistics};
use crate::error::TimedError;
use crate::state::AppState;

/// Returns season statistics of a team.
///
/// # Endpoint
///
/// `GET /api/stats/team/{league}/{team}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": { "teamName": "Barcelona", "league": "SPAIN", "matchesPlayed": 15, ... },
///   "duration": 1840,
///   "source": "upstream",
///   "timestamp": "2025-01-12T10:00:00Z"
/// }
/// ```
///
/// `source` is `fallback` when the scraper could not be reached and built-in
/// data was served instead.
///
/// # Errors
///
/// - **400 Bad Request**: blank league or team
/// - **4xx/5xx**: the scraper rejected the request (its status and message are kept)
/// - **503 Service Unavailable**: scraper unreachable and fallback disabled
pub async fn team_stats_handler(
    State(state): State<AppState>,
    Path((league, team)): Path<(String, String)>,
) -> Result<Json<DataResponse<TeamStatistics>>, TimedError> {
    let started = Instant::now();

    let response = state
        .gateway
        .get_team_stats(&league, &team)
        .await
        .map_err(|e| e.with_duration(started.elapsed()))?;

    Ok(Json(response.into()))
}

/// Returns a league table ordered by position.
///
/// # Endpoint
///
/// `GET /api/stats/league/{league}/standings`
///
/// # Errors
///
/// - **400 Bad Request**: blank league
/// - **500 Internal Server Error**: scraper failure while fallback is disabled
pub async fn standings_handler(
    State(state): State<AppState>,
    Path(league): Path<String>,
) -> Result<Json<DataResponse<Vec<StandingsEntry>>>, TimedError> {
    let started = Instant::now();

    let response = state
        .gateway
        .get_league_standings(&league)
        .await
        .map_err(|e| e.with_duration(started.elapsed()))?;

    Ok(Json(response.into()))
}
