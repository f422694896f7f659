//! Safe textual coercion
//!
//! Every helper returns `Option`: a value that does not parse is `None`,
//! never a panic or an error. The filter compiler drops the criterion in
//! that case, so the policy ("ignore what cannot be safely applied") is
//! visible as data flow.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::FieldValue;
use crate::schema::FieldKind;

/// Coerces request text into the given field kind
pub fn coerce(kind: FieldKind, raw: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::String => Some(FieldValue::Text(raw.to_string())),
        FieldKind::Number => parse_number(raw).map(FieldValue::Number),
        FieldKind::Bool => parse_bool(raw).map(FieldValue::Bool),
        FieldKind::DateTime => parse_datetime(raw).map(FieldValue::DateTime),
        FieldKind::Uuid => parse_uuid(raw).map(FieldValue::Uuid),
    }
}

/// Parses a number, preferring integer syntax; non-finite values are rejected
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n as f64);
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a boolean (`true`/`false`, case-insensitive)
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date at midnight UTC
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Parses a UUID in any of the formats the `uuid` crate accepts
pub fn parse_uuid(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
