//! Domain layer containing entities and the contracts of external collaborators.
//!
//! # Architecture
//!
//! - [`entities`] - Statistics, standings and health data structures
//! - [`league_codes`] - Public league slug to upstream region translation
//! - [`fallback`] - Built-in dataset served while the upstream is down
//! - [`repositories`] - Storage trait definitions
//! - [`upstream`] - Scraper service trait and its typed errors
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod fallback;
pub mod league_codes;
pub mod repositories;
pub mod upstream;
