//! Request types for querykit
//!
//! Transient, caller-supplied criteria: filters, sorts, search keywords,
//! and paging windows. Requests are plain data; nothing here touches a
//! schema. `is_valid` carries caller intent ("this slot was actually
//! filled in"); compilers skip requests where it is false.

mod errors;
mod parser;

pub use errors::{RequestError, RequestResult};
pub use parser::{QueryCriteria, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Exact equality in the field's kind
    Equals,
    /// Case-sensitive substring (String fields only)
    Contains,
    /// Case-sensitive prefix (String fields only)
    StartsWith,
    /// Case-sensitive suffix (String fields only)
    EndsWith,
    /// Strict order, natural total order of the kind
    GreaterThan,
    /// Strict order, natural total order of the kind
    LessThan,
}

impl FilterOperator {
    /// Returns the canonical operator name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
            FilterOperator::GreaterThan => "greater_than",
            FilterOperator::LessThan => "less_than",
        }
    }
}

impl FromStr for FilterOperator {
    type Err = RequestError;

    /// Case-insensitive; accepts both canonical names and short codes
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "equals" | "eq" => Ok(FilterOperator::Equals),
            "contains" => Ok(FilterOperator::Contains),
            "starts_with" | "startswith" => Ok(FilterOperator::StartsWith),
            "ends_with" | "endswith" => Ok(FilterOperator::EndsWith),
            "greater_than" | "gt" => Ok(FilterOperator::GreaterThan),
            "less_than" | "lt" => Ok(FilterOperator::LessThan),
            other => Err(RequestError::InvalidOperator(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the canonical direction name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = RequestError;

    /// Case-insensitive; accepts `asc`/`ascending` and `desc`/`descending`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(RequestError::InvalidDirection(other.to_string())),
        }
    }
}

/// One filter criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Field name, resolved against the schema's allowed set
    pub field: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Textual value, coerced to the field kind at compile time
    pub value: String,
    /// Caller intent; false marks an unfilled slot to be skipped
    #[serde(default = "default_valid")]
    pub is_valid: bool,
}

impl FilterRequest {
    /// Creates a valid filter request
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            is_valid: true,
        }
    }

    /// Equality filter
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Equals, value)
    }

    /// Substring filter
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, value)
    }

    /// Prefix filter
    pub fn starts_with(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::StartsWith, value)
    }

    /// Suffix filter
    pub fn ends_with(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::EndsWith, value)
    }

    /// Strict greater-than filter
    pub fn greater_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::GreaterThan, value)
    }

    /// Strict less-than filter
    pub fn less_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::LessThan, value)
    }

    /// Marks the request as unfilled; compilers will skip it
    pub fn invalid(mut self) -> Self {
        self.is_valid = false;
        self
    }
}

/// One sort criterion; sequence order decides primary key vs tie-breakers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRequest {
    /// Field name, resolved against the schema's allowed set
    pub field: String,
    /// Sort direction for this key only
    pub direction: SortDirection,
    /// Caller intent; false marks an unfilled slot to be skipped
    #[serde(default = "default_valid")]
    pub is_valid: bool,
}

impl SortRequest {
    /// Creates a valid sort request
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
            is_valid: true,
        }
    }

    /// Ascending sort key
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort key
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Marks the request as unfilled; compilers will skip it
    pub fn invalid(mut self) -> Self {
        self.is_valid = false;
        self
    }
}

/// 1-based page window.
///
/// Both `page` and `page_size` must be at least 1. Validation belongs to
/// the caller-facing layer ([`QueryCriteria::parse`] rejects violations);
/// the pager assumes the request is already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingRequest {
    /// Page number, 1-based; page 1 skips nothing
    pub page: usize,
    /// Records per page
    pub page_size: usize,
}

impl PagingRequest {
    /// Creates a paging request
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Records skipped before the window
    pub fn skip(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }

    /// Window length
    pub fn take(&self) -> usize {
        self.page_size
    }
}

fn default_valid() -> bool {
    true
}
