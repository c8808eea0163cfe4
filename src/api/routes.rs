//! API route configuration.

use crate::api::handlers::{
    health_handler, not_found_handler, standings_handler, team_stats_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET /health`                        - Composite storage and scraper health
/// - `GET /stats/team/{league}/{team}`    - Season statistics of a team
/// - `GET /stats/league/{league}/standings` - League table
///
/// Any other path gets a 404 in the JSON error envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/stats/team/{league}/{team}", get(team_stats_handler))
        .route("/stats/league/{league}/standings", get(standings_handler))
        .fallback(not_found_handler)
}
