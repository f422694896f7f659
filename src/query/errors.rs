//! Query execution error types
//!
//! The core manufactures only schema errors; everything a source raises
//! during count or fetch is wrapped and propagated unchanged.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors surfaced while composing or executing a query
#[derive(Debug, Error)]
pub enum QueryError {
    /// Schema lookup failed while compiling criteria
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The underlying queryable source failed during execution
    #[error("query source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Wraps a source execution failure
    pub fn source(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        QueryError::Source(error.into())
    }
}
