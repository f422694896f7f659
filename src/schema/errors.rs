//! Schema error types
//!
//! The registry is the only part of the core that manufactures errors:
//! compiling against a type that was never registered (or registered with
//! zero fields) is a wiring mistake, not a request to degrade gracefully.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised by the schema registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The record type was never registered
    #[error("no schema registered for record type '{0}'")]
    Unregistered(&'static str),

    /// A schema with zero fields was submitted for registration
    #[error("schema for record type '{0}' declares no fields")]
    EmptySchema(&'static str),
}
