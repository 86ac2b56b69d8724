//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes. Server-side failures
//! are reported to the client with a generic message only; the detail is
//! logged under the request id the client receives.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::inventory::RepoError;
use crate::stats::StatsError;
use crate::store::StoreError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed (bad field value or shape)
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed or inverted date interval
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Record store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => ApiError::Validation(msg),
            RepoError::NotFound(id) => ApiError::NotFound(format!("coil {} not found", id)),
            RepoError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::InvalidInterval { start, end } => {
                ApiError::InvalidRange(format!("interval start {} is after end {}", start, end))
            }
            StatsError::Repo(e) => e.into(),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                msg.clone(),
            ),
            ApiError::InvalidRange(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RANGE",
                msg.clone(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            // Internal detail stays in the log.
            ApiError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                "internal storage failure".to_string(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "internal server error".to_string(),
            ),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        let err: ApiError = RepoError::NotFound(7).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = RepoError::Validation("length must be positive".into()).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_stats_error_mapping() {
        let err: ApiError = StatsError::InvalidInterval {
            start: "2024-02-01".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        }
        .into();
        assert!(matches!(err, ApiError::InvalidRange(_)));
    }
}
