//! Error types for the course service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::cache::CacheError;
use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Service Error Enum ==
/// Unified error type for course operations.
///
/// `InvalidIdentifier`, `NotFound` and `InvalidRequest` are caller-facing
/// outcomes. The remaining variants are backend failures.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Identifier is not a well-formed course id
    #[error("Invalid course ID: {0}")]
    InvalidIdentifier(String),

    /// No course with this identifier exists
    #[error("Course not found: {0}")]
    NotFound(String),

    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache backend failure
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Document store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Cached payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Returns true for failures of the cache or the store. These are logged
    /// and answered with a generic 500 body.
    pub fn is_backend(&self) -> bool {
        matches!(
            self,
            ServiceError::Cache(_) | ServiceError::Store(_) | ServiceError::Serialization(_)
        )
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if self.is_backend() {
            error!(error = %self, "Request failed on backend");
            let body = ErrorResponse::new("Internal server error");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        let (status, message) = match self {
            ServiceError::InvalidIdentifier(_) => {
                (StatusCode::BAD_REQUEST, "Invalid course ID".to_string())
            }
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Course not found".to_string()),
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the course service.
pub type Result<T> = std::result::Result<T, ServiceError>;
