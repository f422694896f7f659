//! Search compiler
//!
//! One case-insensitive substring test per qualifying searchable field,
//! OR-combined. A blank keyword, or a searchable set with no String-kind
//! schema fields, compiles to the identity predicate: an unmatched search
//! scope is a no-op, not "nothing matches".

use std::collections::HashSet;

use super::{match_all, Predicate};
use crate::observability::{Logger, Severity};
use crate::schema::{EntitySchema, FieldKind};
use crate::value::FieldValue;

/// Compiles a search keyword into a single predicate
pub fn compile<T: 'static>(
    schema: &EntitySchema<T>,
    keyword: Option<&str>,
    searchable: &HashSet<String>,
) -> Predicate<T> {
    let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) else {
        return match_all();
    };
    let needle = keyword.to_lowercase();

    let mut accessors = Vec::new();
    for name in searchable {
        let Some(descriptor) = schema.field(name) else {
            skip_trace(name, "unknown_field");
            continue;
        };
        if descriptor.kind() != FieldKind::String {
            skip_trace(name, "non_string_field");
            continue;
        }
        accessors.push(descriptor.accessor());
    }

    if accessors.is_empty() {
        return match_all();
    }

    Box::new(move |record| {
        accessors.iter().any(|accessor| match accessor(record) {
            FieldValue::Text(text) => text.to_lowercase().contains(&needle),
            _ => false,
        })
    })
}

fn skip_trace(field: &str, reason: &str) {
    Logger::log(
        Severity::Trace,
        "search_field_skipped",
        &[("field", field), ("reason", reason)],
    );
}
