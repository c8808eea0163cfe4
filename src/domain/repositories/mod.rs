//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LeagueRepository`] - League metadata storage (connectivity only)

pub mod league_repository;

pub use league_repository::LeagueRepository;

#[cfg(test)]
pub use league_repository::MockLeagueRepository;
