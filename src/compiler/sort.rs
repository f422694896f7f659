//! Sort compiler
//!
//! Builds an ordered key chain: the first surviving request is the primary
//! key, each later one breaks ties in the order given. `Desc` reverses the
//! comparison for its key only, never for the whole chain. An empty chain
//! compiles to the all-equal comparator, so a stable sort leaves the
//! collection's existing order untouched.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::{unordered, Comparator};
use crate::observability::{Logger, Severity};
use crate::request::{SortDirection, SortRequest};
use crate::schema::{EntitySchema, FieldAccessor};

/// Compiles sort requests into a single comparator
pub fn compile<T: 'static>(
    schema: &EntitySchema<T>,
    sorts: &[SortRequest],
    allowed: &HashSet<String>,
) -> Comparator<T> {
    let mut keys: Vec<(FieldAccessor<T>, SortDirection)> = Vec::new();

    for request in sorts {
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
        keys.push((descriptor.accessor(), request.direction));
    }

    if keys.is_empty() {
        return unordered();
    }

    Box::new(move |a, b| {
        for (accessor, direction) in &keys {
            // Non-comparable pairs tie; stability keeps their input order
            let ordering = accessor(a).compare(&accessor(b)).unwrap_or(Ordering::Equal);
            let ordering = match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    })
}

fn drop_trace(request: &SortRequest, reason: &str) {
    Logger::log(
        Severity::Trace,
        "sort_dropped",
        &[("field", request.field.as_str()), ("reason", reason)],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        group: String,
        rank: f64,
    }

    fn schema() -> EntitySchema<Row> {
        EntitySchema::new()
            .with_field(FieldDescriptor::string("group", |r: &Row| r.group.clone()))
            .with_field(FieldDescriptor::number("rank", |r: &Row| r.rank))
    }

    fn allowed() -> HashSet<String> {
        ["group", "rank"].iter().map(|s| s.to_string()).collect()
    }

    fn row(id: u32, group: &str, rank: f64) -> Row {
        Row {
            id,
            group: group.into(),
            rank,
        }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_single_key_ascending() {
        let comparator = compile(&schema(), &[SortRequest::asc("rank")], &allowed());
        let mut rows = vec![row(1, "a", 3.0), row(2, "a", 1.0), row(3, "a", 2.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn test_single_key_descending() {
        let comparator = compile(&schema(), &[SortRequest::desc("rank")], &allowed());
        let mut rows = vec![row(1, "a", 3.0), row(2, "a", 1.0), row(3, "a", 2.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let comparator = compile(&schema(), &[SortRequest::asc("rank")], &allowed());
        let mut rows = vec![row(1, "a", 5.0), row(2, "a", 5.0), row(3, "a", 5.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_multi_key_tie_break() {
        // group ascending, then rank descending within each group
        let comparator = compile(
            &schema(),
            &[SortRequest::asc("group"), SortRequest::desc("rank")],
            &allowed(),
        );
        let mut rows = vec![
            row(1, "b", 1.0),
            row(2, "a", 1.0),
            row(3, "a", 2.0),
            row(4, "b", 2.0),
        ];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_desc_applies_to_its_key_only() {
        let comparator = compile(
            &schema(),
            &[SortRequest::desc("group"), SortRequest::asc("rank")],
            &allowed(),
        );
        let mut rows = vec![row(1, "a", 2.0), row(2, "b", 2.0), row(3, "b", 1.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![3, 2, 1]);
    }

    #[test]
    fn test_dropped_requests_leave_order_unchanged() {
        let mut restricted = HashSet::new();
        restricted.insert("group".to_string());

        let comparator = compile(
            &schema(),
            &[
                SortRequest::asc("rank").invalid(),
                SortRequest::asc("missing"),
                SortRequest::asc("rank"), // known but disallowed
            ],
            &restricted,
        );

        let mut rows = vec![row(1, "b", 2.0), row(2, "a", 1.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_empty_sequence_preserves_order() {
        let comparator = compile(&schema(), &[], &allowed());
        let mut rows = vec![row(9, "z", 9.0), row(1, "a", 1.0)];
        rows.sort_by(|a, b| comparator(a, b));
        assert_eq!(ids(&rows), vec![9, 1]);
    }
}
