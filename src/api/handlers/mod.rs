//! HTTP request handlers for API endpoints.

pub mod health;
pub mod not_found;
pub mod stats;

pub use health::health_handler;
pub use not_found::not_found_handler;
pub use stats::{standings_handler, team_stats_handler};
