//! Fallback for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unmatched path with a JSON 404 in the standard error shape.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
