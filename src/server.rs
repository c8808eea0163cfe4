//! HTTP server initialization and runtime setup.
//!
//! Wires storage, the scraper client and the gateway together and runs the
//! Axum server until Ctrl-C.

use crate::application::services::{GatewaySettings, HealthAggregator, StatsGateway};
use crate::config::Config;
use crate::domain::upstream::StatsUpstream;
use crate::infrastructure::persistence::PgLeagueRepository;
use crate::infrastructure::scraper::ScraperClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (lazy; an unreachable database only shows up in health)
/// - Scraper client
/// - Health aggregator and statistics gateway
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` or `SCRAPER_URL` cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(config.health_timeout())
        .connect_lazy(&config.database_url)
        .context("Invalid DATABASE_URL")?;
    let storage = Arc::new(PgLeagueRepository::new(Arc::new(pool)));

    let scraper = ScraperClient::new(&config.scraper_url)?;
    let scraper_url = scraper.base_url().to_string();
    let upstream: Arc<dyn StatsUpstream> = Arc::new(scraper);
    tracing::info!("Scraper client targeting {}", scraper_url);

    let health = Arc::new(HealthAggregator::new(
        storage,
        upstream.clone(),
        config.health_timeout(),
    ));

    let gateway = Arc::new(StatsGateway::new(
        Arc::new(config.league_codes.clone()),
        upstream,
        health,
        GatewaySettings {
            stats_timeout: config.stats_timeout(),
            fallback_enabled: config.fallback_enabled,
        },
    ));

    let state = AppState::new(gateway, scraper_url);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
