//! # Query Errors
//!
//! Error types for filter coercion and query interpretation.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A recognized filter parameter could not be coerced
    #[error("Invalid filter '{param}': {reason}")]
    InvalidFilter { param: String, reason: String },

    /// No natural-language trigger matched the query
    #[error("Unable to parse natural language query")]
    UnparsableQuery,
}

impl QueryError {
    pub fn invalid_filter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::InvalidFilter {
            param: param.into(),
            reason: reason.into(),
        }
    }
}
