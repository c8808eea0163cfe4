//! Core domain entities representing the statistics data model.
//!
//! Entities are plain data structures built fresh for every request or probe
//! and dropped once the response is sent.
//!
//! # Entity Types
//!
//! - [`TeamStatistics`] - Season statistics of one team
//! - [`StandingsEntry`] - One row of a league table
//! - [`HealthReport`] - Merged storage and upstream health
//!
//! JSON field names are camelCase to match what the dashboard and the
//! upstream scraper exchange.

pub mod health;
pub mod standings;
pub mod team_stats;

pub use health::{HealthReport, OverallStatus, ProbeStatus};
pub use standings::StandingsEntry;
pub use team_stats::{CountOverflow, LastMatch, MatchResult, Record, TeamStatistics, TopScorer};
