//! Request parsing error types
//!
//! The caller-facing layer is the one place that rejects instead of
//! silently dropping: malformed paging or unparseable parameters never
//! reach the compilers.

use thiserror::Error;

/// Result type for request parsing
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors raised while parsing caller-supplied query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A query parameter value could not be parsed
    #[error("invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Unknown filter operator name
    #[error("invalid filter operator: '{0}'")]
    InvalidOperator(String),

    /// Unknown sort direction name
    #[error("invalid sort direction: '{0}'")]
    InvalidDirection(String),

    /// Requested page size exceeds the maximum
    #[error("page size {requested} exceeds maximum {max}")]
    PageSizeExceeded { requested: usize, max: usize },
}
