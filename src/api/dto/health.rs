//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::HealthReport;

/// Health check response.
///
/// `status` describes the gateway process itself; the composite report sits
/// under `pythonScraper`, the key the dashboard reads.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(rename = "pythonScraper")]
    pub scraper: HealthReport,
    #[serde(rename = "pythonUrl")]
    pub scraper_url: String,
    pub timestamp: DateTime<Utc>,
}
