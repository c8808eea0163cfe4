#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use stats_gateway::application::services::{GatewaySettings, HealthAggregator, StatsGateway};
use stats_gateway::domain::league_codes::LeagueCodes;
use stats_gateway::domain::repositories::LeagueRepository;
use stats_gateway::domain::upstream::StatsUpstream;
use stats_gateway::error::AppError;
use stats_gateway::infrastructure::scraper::ScraperClient;
use stats_gateway::state::AppState;
use std::sync::Arc;
use std::time::Duration;

/// Storage stand-in with a fixed probe outcome.
pub enum StubStorage {
    Healthy,
    Failing,
    Hanging,
}

#[async_trait]
impl LeagueRepository for StubStorage {
    async fn ping(&self) -> Result<(), AppError> {
        match self {
            Self::Healthy => Ok(()),
            Self::Failing => Err(AppError::internal(
                "Database error: connection refused",
                json!({}),
            )),
            Self::Hanging => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            }
        }
    }
}

pub fn test_settings() -> GatewaySettings {
    GatewaySettings {
        stats_timeout: Duration::from_secs(2),
        fallback_enabled: true,
    }
}

pub fn create_test_state(
    scraper_url: &str,
    storage: StubStorage,
    settings: GatewaySettings,
) -> AppState {
    let client = ScraperClient::new(scraper_url).unwrap();
    let scraper_url = client.base_url().to_string();
    let upstream: Arc<dyn StatsUpstream> = Arc::new(client);

    let health = Arc::new(HealthAggregator::new(
        Arc::new(storage),
        upstream.clone(),
        Duration::from_millis(500),
    ));
    let gateway = Arc::new(StatsGateway::new(
        Arc::new(LeagueCodes::default()),
        upstream,
        health,
        settings,
    ));

    AppState::new(gateway, scraper_url)
}

/// A loopback address nothing listens on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn team_payload(team: &str) -> Value {
    json!({
        "teamName": team,
        "league": "SPAIN",
        "matchesPlayed": 15,
        "wins": 10,
        "draws": 3,
        "losses": 2,
        "goalsFor": 30,
        "goalsAgainst": 12,
        "goalDifference": 18,
        "position": 2,
        "points": 33,
        "form": ["W", "W", "D", "L", "W"],
        "lastMatches": [
            { "opponent": "Valencia", "result": "W", "score": "2-0" }
        ],
        "topScorer": { "name": "Vinícius Jr", "goals": 11 },
        "homeStats": { "wins": 6, "draws": 1, "losses": 0 },
        "awayStats": { "wins": 4, "draws": 2, "losses": 2 }
    })
}

pub fn standings_payload() -> Value {
    json!([
        { "name": "Real Madrid", "position": 2, "points": 33, "matchesPlayed": 15 },
        { "name": "Barcelona", "position": 1, "points": 35, "matchesPlayed": 15 },
        { "name": "Girona", "position": 3, "points": 32, "matchesPlayed": 15 }
    ])
}
