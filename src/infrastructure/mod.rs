//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`scraper`] - HTTP client of the upstream scraping service

pub mod persistence;
pub mod scraper;
