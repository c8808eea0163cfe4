//! Handler for requests no API route matches.

use axum::extract::OriginalUri;
use axum::http::Method;
use serde_json::json;

use crate::error::AppError;

/// Answers unmatched paths with the JSON error envelope.
///
/// Covers paths with a missing segment such as `/api/stats/team/laliga`.
pub async fn not_found_handler(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found(
        format!("No route for {method} {}", uri.path()),
        json!({ "path": uri.path() }),
    )
}
