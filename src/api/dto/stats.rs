//! DTOs for statistics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{DataSource, GatewayResponse};

/// Successful statistics response.
///
/// `duration` is the time spent serving the request, in milliseconds.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
    pub duration: u64,
    pub source: DataSource,
    pub timestamp: DateTime<Utc>,
}

impl<T> From<GatewayResponse<T>> for DataResponse<T> {
    fn from(response: GatewayResponse<T>) -> Self {
        Self {
            success: true,
            data: response.data,
            duration: u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            source: response.source,
            timestamp: Utc::now(),
        }
    }
}
