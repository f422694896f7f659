//! Runtime field values for querykit
//!
//! Every schema accessor produces a [`FieldValue`], and every filter target
//! is coerced into the same representation before a comparison is attempted.
//! Comparison is only defined within a kind; a cross-kind comparison is
//! "not comparable", which the compilers translate into no-match (filters)
//! or a tie (sorts).

mod parse;

pub use parse::{coerce, parse_bool, parse_datetime, parse_number, parse_uuid};

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single field value, read from a record or coerced from request text
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 text
    Text(String),
    /// Numeric value; integer input is widened on parse
    Number(f64),
    /// Boolean
    Bool(bool),
    /// UTC timestamp
    DateTime(DateTime<Utc>),
    /// Unique identifier
    Uuid(Uuid),
}

impl FieldValue {
    /// Returns the kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "bool",
            FieldValue::DateTime(_) => "datetime",
            FieldValue::Uuid(_) => "uuid",
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Returns `None` for mismatched kinds. Numbers order by
    /// `f64::total_cmp`, everything else by its natural total order.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => Some(a.total_cmp(b)),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Returns the text content of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
