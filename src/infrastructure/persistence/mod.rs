//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgLeagueRepository`] - League metadata store (read-only)

pub mod pg_league_repository;

pub use pg_league_repository::PgLeagueRepository;
