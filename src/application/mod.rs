//! Application layer services implementing request orchestration.
//!
//! Services consume the domain traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::stats_gateway::StatsGateway`] - Team statistics and standings with fallback policy
//! - [`services::health_service::HealthAggregator`] - Composite storage and upstream health

pub mod services;
