//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns gateway health with storage and scraper checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// Always answers **200 OK**: the report is the payload, unhealthy
/// collaborators are described in it rather than signalled by status code.
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "service": "stats-gateway",
///   "pythonScraper": {
///     "overallStatus": "DEGRADED",
///     "storageStatus": "OK",
///     "upstreamStatus": "upstream unreachable: error sending request",
///     "timestamp": "2025-01-12T10:00:00Z"
///   },
///   "pythonUrl": "http://localhost:5000/",
///   "timestamp": "2025-01-12T10:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.gateway.get_health().await;

    Json(HealthResponse {
        status: "OK",
        service: env!("CARGO_PKG_NAME"),
        scraper: report,
        scraper_url: state.scraper_url.to_string(),
        timestamp: Utc::now(),
    })
}
