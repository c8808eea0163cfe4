//! Client of the external scraping service.
//!
//! Consumed endpoints:
//!
//! - `GET {base}/api/scrape/team/{region}/{team}` - season statistics of a team
//! - `GET {base}/api/scrape/league/{region}` - league table
//! - `GET {base}/api/health` - liveness

pub mod client;
pub mod types;

pub use client::{ScraperClient, ScraperClientError};
