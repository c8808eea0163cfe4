//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::StatsGateway;

/// State shared by all handlers.
///
/// Holds only read-only collaborators; nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<StatsGateway>,
    /// Scraper base URL, reported by the health endpoint.
    pub scraper_url: Arc<str>,
}

impl AppState {
    pub fn new(gateway: Arc<StatsGateway>, scraper_url: impl Into<Arc<str>>) -> Self {
        Self {
            gateway,
            scraper_url: scraper_url.into(),
        }
    }
}
