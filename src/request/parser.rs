//! Query parameter parsing
//!
//! Turns a flat string→string parameter map into typed criteria. Reserved
//! keys are `order`, `q`, `page`, and `page_size`; every other key is a
//! filter of the form `operator.value` (a bare value means equality).
//!
//! Paging validation lives here: zero or oversized page sizes are rejected
//! before the pager can ever see them.

use std::collections::HashMap;

use super::errors::{RequestError, RequestResult};
use super::{FilterOperator, FilterRequest, PagingRequest, SortRequest};

/// Maximum page size a caller may request
pub const MAX_PAGE_SIZE: usize = 1000;

/// Page size when none is given
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Parsed query criteria: everything the pipeline consumes for one call
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCriteria {
    /// Filter requests, AND-combined by the compiler
    pub filters: Vec<FilterRequest>,
    /// Sort requests in priority order
    pub sorts: Vec<SortRequest>,
    /// Search keyword, if any
    pub search: Option<String>,
    /// Page window
    pub paging: PagingRequest,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sorts: Vec::new(),
            search: None,
            paging: PagingRequest::new(1, DEFAULT_PAGE_SIZE),
        }
    }
}

impl QueryCriteria {
    /// Parses a query parameter map.
    ///
    /// Filter order follows map iteration order, which is fine: filters
    /// are AND-combined, so their order never changes the result. Sort
    /// priority comes entirely from the single `order` parameter.
    pub fn parse(params: &HashMap<String, String>) -> RequestResult<Self> {
        let mut criteria = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "order" => criteria.sorts = parse_order(value)?,
                "q" => criteria.search = Some(value.clone()),
                "page" => criteria.paging.page = parse_positive(value, "page")?,
                "page_size" => criteria.paging.page_size = parse_positive(value, "page_size")?,
                _ => criteria.filters.push(parse_filter(key, value)),
            }
        }

        if criteria.paging.page_size > MAX_PAGE_SIZE {
            return Err(RequestError::PageSizeExceeded {
                requested: criteria.paging.page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        Ok(criteria)
    }
}

/// Parses the `order` parameter: comma-separated `field.direction` entries,
/// a bare field name meaning ascending
fn parse_order(value: &str) -> RequestResult<Vec<SortRequest>> {
    let mut sorts = Vec::new();

    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let sort = match part.rsplit_once('.') {
            Some((field, direction)) => SortRequest::new(field, direction.parse()?),
            None => SortRequest::asc(part),
        };
        sorts.push(sort);
    }

    Ok(sorts)
}

/// Parses one filter parameter. An unrecognized operator prefix is not an
/// error: the whole value is taken as an equality target, so field values
/// containing dots stay usable.
fn parse_filter(field: &str, raw: &str) -> FilterRequest {
    if let Some((op, value)) = raw.split_once('.') {
        if let Ok(operator) = op.parse::<FilterOperator>() {
            return FilterRequest::new(field, operator, value);
        }
    }
    FilterRequest::equals(field, raw)
}

/// Parses a 1-based positive integer parameter
fn parse_positive(value: &str, name: &str) -> RequestResult<usize> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidQueryParam(format!("invalid {name}: '{value}'")))?;
    if parsed == 0 {
        return Err(RequestError::InvalidQueryParam(format!(
            "{name} must be at least 1"
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SortDirection;

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_full_criteria() {
        let params = params(&[
            ("status", "eq.active"),
            ("age", "gt.18"),
            ("order", "created_at.desc,name"),
            ("q", "alice"),
            ("page", "2"),
            ("page_size", "25"),
        ]);

        let criteria = QueryCriteria::parse(&params).unwrap();

        assert_eq!(criteria.filters.len(), 2);
        assert_eq!(criteria.search.as_deref(), Some("alice"));
        assert_eq!(criteria.paging, PagingRequest::new(2, 25));

        assert_eq!(criteria.sorts.len(), 2);
        assert_eq!(criteria.sorts[0].field, "created_at");
        assert_eq!(criteria.sorts[0].direction, SortDirection::Desc);
        assert_eq!(criteria.sorts[1].field, "name");
        assert_eq!(criteria.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_bare_filter_value_means_equality() {
        let criteria = QueryCriteria::parse(&params(&[("name", "Alice")])).unwrap();
        assert_eq!(criteria.filters, vec![FilterRequest::equals("name", "Alice")]);
    }

    #[test]
    fn test_unknown_operator_prefix_is_literal_value() {
        let criteria = QueryCriteria::parse(&params(&[("email", "bob.smith@x.com")])).unwrap();
        assert_eq!(
            criteria.filters,
            vec![FilterRequest::equals("email", "bob.smith@x.com")]
        );
    }

    #[test]
    fn test_defaults_when_no_paging_given() {
        let criteria = QueryCriteria::parse(&HashMap::new()).unwrap();
        assert_eq!(criteria.paging, PagingRequest::new(1, DEFAULT_PAGE_SIZE));
        assert!(criteria.filters.is_empty());
        assert!(criteria.sorts.is_empty());
        assert!(criteria.search.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = QueryCriteria::parse(&params(&[("page_size", "0")])).unwrap_err();
        assert!(matches!(err, RequestError::InvalidQueryParam(_)));
    }

    #[test]
    fn test_oversized_page_size_rejected() {
        let err = QueryCriteria::parse(&params(&[("page_size", "5000")])).unwrap_err();
        assert_eq!(
            err,
            RequestError::PageSizeExceeded {
                requested: 5000,
                max: MAX_PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_invalid_page_rejected() {
        assert!(QueryCriteria::parse(&params(&[("page", "abc")])).is_err());
        assert!(QueryCriteria::parse(&params(&[("page", "0")])).is_err());
    }

    #[test]
    fn test_invalid_sort_direction_rejected() {
        let err = QueryCriteria::parse(&params(&[("order", "name.sideways")])).unwrap_err();
        assert_eq!(err, RequestError::InvalidDirection("sideways".into()));
    }
}
