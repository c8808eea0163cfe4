//! Application error type and its JSON error envelope.
//!
//! Every error leaves the service as
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Equipo 'Foo' no encontrado en spain",
//!   "error": "upstream_rejected",
//!   "duration": 812,
//!   "details": { "league": "laliga", "team": "Foo" }
//! }
//! ```
//!
//! `duration` is the elapsed time in milliseconds; no internal error
//! representation or backtrace is ever exposed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

use crate::domain::upstream::{UpstreamError, UpstreamErrorKind};

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error: &'static str,
    duration: u64,
    details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty request parameters.
    #[error("{message}")]
    InvalidRequest { message: String, details: Value },

    /// No route matches the request path.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The upstream answered but refused the request.
    #[error("{message}")]
    UpstreamRejected {
        status: u16,
        message: String,
        details: Value,
    },

    /// The upstream could not be reached and no fallback applies.
    #[error("{message}")]
    Unavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_request(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn upstream_rejected(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamRejected {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    ///
    /// Upstream rejections reuse the upstream's status when it is an error
    /// status, and fall back to 500 otherwise.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamRejected { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::NotFound { .. } => "not_found",
            Self::UpstreamRejected { .. } => "upstream_rejected",
            Self::Unavailable { .. } => "upstream_unavailable",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Attaches the elapsed request time for the error envelope.
    pub fn with_duration(self, elapsed: Duration) -> TimedError {
        TimedError {
            error: self,
            elapsed,
        }
    }

    fn into_parts(self) -> (String, Value) {
        match self {
            Self::InvalidRequest { message, details }
            | Self::NotFound { message, details }
            | Self::UpstreamRejected {
                message, details, ..
            }
            | Self::Unavailable { message, details }
            | Self::Internal { message, details } => (message, details),
        }
    }
}

/// An [`AppError`] together with the time spent before it occurred.
#[derive(Debug)]
pub struct TimedError {
    pub error: AppError,
    pub elapsed: Duration,
}

impl IntoResponse for TimedError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let code = self.error.code();
        let (message, details) = self.error.into_parts();

        let body = ErrorBody {
            success: false,
            message,
            error: code,
            duration: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.with_duration(Duration::ZERO).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"), json!({}))
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        let mut details = json!({ "kind": e.kind, "upstreamStatus": e.status });
        if !e.available_teams.is_empty() {
            details["availableTeams"] = json!(e.available_teams);
        }
        match e.kind {
            UpstreamErrorKind::UpstreamRejected => {
                AppError::upstream_rejected(e.status.unwrap_or(500), e.message, details)
            }
            UpstreamErrorKind::Timeout | UpstreamErrorKind::Unreachable => {
                AppError::unavailable(e.to_string(), details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_request("missing", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("No route", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::upstream_rejected(404, "not found", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::upstream_rejected(200, "success false", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::upstream_rejected(1000, "bogus", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::unavailable("down", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_from_upstream_error() {
        let rejected: AppError = UpstreamError::rejected(404, "Equipo no encontrado").into();
        assert!(matches!(
            rejected,
            AppError::UpstreamRejected { status: 404, ref message, .. } if message == "Equipo no encontrado"
        ));

        let not_found: AppError = UpstreamError::rejected(404, "Equipo 'Foo' no encontrado")
            .with_available_teams(vec!["Barcelona".to_string(), "Girona".to_string()])
            .into();
        let AppError::UpstreamRejected { details, .. } = &not_found else {
            panic!("expected an upstream rejection, got {not_found:?}");
        };
        assert_eq!(details["availableTeams"], json!(["Barcelona", "Girona"]));

        let unreachable: AppError = UpstreamError::unreachable("connection refused").into();
        assert!(matches!(unreachable, AppError::Unavailable { .. }));

        let timeout: AppError = UpstreamError::timeout(Duration::from_secs(35)).into();
        assert_eq!(timeout.code(), "upstream_unavailable");
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = AppError::invalid_request("League is required", json!({ "league": "" }))
            .with_duration(Duration::from_millis(12))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "League is required");
        assert_eq!(json["error"], "invalid_request");
        assert_eq!(json["duration"], 12);
        assert_eq!(json["details"]["league"], "");
    }
}
