//! # Service Errors
//!
//! Every failure an orchestrated operation can report, with its HTTP status.

use axum::http::StatusCode;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service errors
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required body field absent
    #[error("Missing '{0}' field")]
    MissingField(String),

    /// Body field has the wrong JSON type
    #[error("'{field}' must be a {expected}")]
    InvalidType { field: String, expected: String },

    /// Request body is not valid JSON
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Same content already stored
    #[error("String already exists")]
    Conflict,

    /// No record for the given value
    #[error("String not found")]
    NotFound,

    /// Filter coercion or natural-language interpretation failed
    #[error("{0}")]
    Query(#[from] QueryError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Opaque store failure
    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(_) => ServiceError::Conflict,
            other => ServiceError::Store(other),
        }
    }
}

impl ServiceError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServiceError::MissingField(_) => StatusCode::BAD_REQUEST,
            ServiceError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ServiceError::Query(_) => StatusCode::BAD_REQUEST,

            // 404 / 409 / 422
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Conflict => StatusCode::CONFLICT,
            ServiceError::InvalidType { .. } => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::MissingField("value".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::InvalidType {
                field: "value".to_string(),
                expected: "string".to_string()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ServiceError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::from(QueryError::UnparsableQuery).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_duplicate_becomes_conflict() {
        let err = ServiceError::from(StoreError::DuplicateKey("abc".to_string()));
        assert!(matches!(err, ServiceError::Conflict));
    }

    #[test]
    fn test_store_failure_is_internal() {
        let err = ServiceError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
