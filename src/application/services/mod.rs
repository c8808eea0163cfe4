//! Business logic services for the application layer.

pub mod health_service;
pub mod stats_gateway;

pub use health_service::HealthAggregator;
pub use stats_gateway::{DataSource, GatewayResponse, GatewaySettings, StatsGateway};
