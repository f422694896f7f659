//! Filter compiler
//!
//! One elementary predicate per surviving filter request, AND-combined.
//! A request survives only if it is filled in, names an allowed field that
//! exists in the schema, uses an operator its kind supports, and carries a
//! value that coerces to that kind. Everything else contributes nothing.
//!
//! String operators (`Contains`, `StartsWith`, `EndsWith`) are
//! case-sensitive; search is the case-insensitive surface.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::{match_all, Predicate};
use crate::observability::{Logger, Severity};
use crate::request::{FilterOperator, FilterRequest};
use crate::schema::EntitySchema;
use crate::value::{coerce, FieldValue};

/// Compiles filter requests into a single predicate
pub fn compile<T: 'static>(
    schema: &EntitySchema<T>,
    filters: &[FilterRequest],
    allowed: &HashSet<String>,
) -> Predicate<T> {
    let mut tests = Vec::new();

    for request in filters {
        if !request.is_valid {
            continue;
        }
        if !allowed.contains(&request.field) {
            drop_trace(request, "disallowed_field");
            continue;
        }
        let Some(descriptor) = schema.field(&request.field) else {
            drop_trace(request, "unknown_field");
            continue;
        };
        if !descriptor.kind().supports(request.operator) {
            drop_trace(request, "operator_kind_mismatch");
            continue;
        }
        let Some(target) = coerce(descriptor.kind(), &request.value) else {
            drop_trace(request, "uncoercible_value");
            continue;
        };

        let accessor = descriptor.accessor();
        let operator = request.operator;
        tests.push(move |record: &T| evaluate(operator, &accessor(record), &target));
    }

    if tests.is_empty() {
        return match_all();
    }
    Box::new(move |record| tests.iter().all(|test| test(record)))
}

/// Elementary predicate semantics, one dispatch per (operator, value) pair
fn evaluate(operator: FilterOperator, actual: &FieldValue, target: &FieldValue) -> bool {
    match operator {
        FilterOperator::Equals => actual.compare(target) == Some(Ordering::Equal),
        FilterOperator::Contains => {
            text_pair(actual, target).is_some_and(|(a, t)| a.contains(t))
        }
        FilterOperator::StartsWith => {
            text_pair(actual, target).is_some_and(|(a, t)| a.starts_with(t))
        }
        FilterOperator::EndsWith => {
            text_pair(actual, target).is_some_and(|(a, t)| a.ends_with(t))
        }
        FilterOperator::GreaterThan => actual.compare(target) == Some(Ordering::Greater),
        FilterOperator::LessThan => actual.compare(target) == Some(Ordering::Less),
    }
}

fn text_pair<'a>(actual: &'a FieldValue, target: &'a FieldValue) -> Option<(&'a str, &'a str)> {
    match (actual, target) {
        (FieldValue::Text(a), FieldValue::Text(t)) => Some((a, t)),
        _ => None,
    }
}

fn drop_trace(request: &FilterRequest, reason: &str) {
    Logger::log(
        Severity::Trace,
        "filter_dropped",
        &[
            ("field", request.field.as_str()),
            ("operator", request.operator.as_str()),
            ("reason", reason),
        ],
    );
}
