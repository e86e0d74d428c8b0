//! Application error type and its HTTP mapping.
//!
//! Store failures are classified into a small, stable set of kinds. The client
//! receives a sanitized payload; the full error is only written to the log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by services and handlers.
#[derive(Debug)]
pub enum AppError {
    /// The store could not be reached (pool exhausted or closed, I/O, TLS).
    StoreUnavailable { message: String, details: Value },
    /// The store rejected the query or returned rows we could not decode.
    QueryMalformed { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn query_malformed(message: impl Into<String>, details: Value) -> Self {
        Self::QueryMalformed {
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
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::StoreUnavailable { .. } => "store_unavailable",
            AppError::QueryMalformed { .. } => "query_malformed",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable { .. }
            | AppError::QueryMalformed { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AppError::StoreUnavailable { message, .. }
            | AppError::QueryMalformed { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => message,
        };
        write!(f, "{}: {}", self.code(), message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, details) = match self {
            AppError::StoreUnavailable { message, details }
            | AppError::QueryMalformed { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Store query failed");

        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::Configuration(_) => {
                AppError::store_unavailable("Data store unavailable", json!({}))
            }
            sqlx::Error::Database(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::Decode(_) => {
                AppError::query_malformed("Data store rejected the query", json!({}))
            }
            _ => AppError::internal("Unexpected data store error", json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_store_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.code(), "store_unavailable");
    }

    #[test]
    fn test_column_errors_map_to_query_malformed() {
        let err = AppError::from(sqlx::Error::ColumnNotFound("heroImage".to_string()));
        assert!(matches!(err, AppError::QueryMalformed { .. }));
        assert_eq!(err.code(), "query_malformed");
    }

    #[test]
    fn test_row_not_found_maps_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_not_found_status() {
        let err = AppError::not_found("Route not found", json!({}));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_response_status() {
        let response =
            AppError::store_unavailable("Data store unavailable", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::query_malformed("bad query", json!({}));
        assert_eq!(err.to_string(), "query_malformed: bad query");
    }
}
