//! Query composition and execution for querykit
//!
//! [`Query`] is the transformed queryable source: it owns the composed
//! predicate and comparator and describes *what* to apply. Actual
//! execution, with its I/O model and timeouts, belongs to the
//! [`QuerySource`] implementation; a page request is two sequential source
//! operations (count, then fetch) and source failures propagate unchanged.

mod errors;
mod memory;

pub use errors::{QueryError, QueryResult};
pub use memory::MemorySource;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::compiler::{self, filter, search, sort, Comparator, Predicate};
use crate::observability::{Logger, Severity};
use crate::paging::PagedResult;
use crate::request::{FilterRequest, PagingRequest, SortRequest};
use crate::schema::EntitySchema;

/// A queryable collection of records
pub trait QuerySource<T> {
    /// Counts records matching the predicate, before any windowing
    fn count(&self, predicate: &Predicate<T>) -> QueryResult<usize>;

    /// Materializes the `skip`/`take` window of the filtered, ordered
    /// records
    fn fetch(
        &self,
        predicate: &Predicate<T>,
        comparator: &Comparator<T>,
        skip: usize,
        take: usize,
    ) -> QueryResult<Vec<T>>;
}

/// Composed filter/search/sort criteria over a record type.
///
/// Starts unrestricted: the identity predicate and the all-equal
/// comparator. Builder calls narrow the predicate (AND) or replace the
/// ordering; the query itself never touches a data store.
pub struct Query<T> {
    predicate: Predicate<T>,
    comparator: Comparator<T>,
}

impl<T: 'static> Query<T> {
    /// An unrestricted query: every record passes, existing order preserved
    pub fn new() -> Self {
        Self {
            predicate: compiler::match_all(),
            comparator: compiler::unordered(),
        }
    }

    /// AND-composes the compiled filter requests into this query
    pub fn filter(
        self,
        schema: &EntitySchema<T>,
        filters: &[FilterRequest],
        allowed: &HashSet<String>,
    ) -> Self {
        let compiled = filter::compile(schema, filters, allowed);
        self.narrow(compiled)
    }

    /// AND-composes the compiled search keyword into this query
    pub fn search(
        self,
        schema: &EntitySchema<T>,
        keyword: Option<&str>,
        searchable: &HashSet<String>,
    ) -> Self {
        let compiled = search::compile(schema, keyword, searchable);
        self.narrow(compiled)
    }

    /// Replaces the ordering with the compiled sort chain
    pub fn sort(
        mut self,
        schema: &EntitySchema<T>,
        sorts: &[SortRequest],
        allowed: &HashSet<String>,
    ) -> Self {
        self.comparator = sort::compile(schema, sorts, allowed);
        self
    }

    fn narrow(mut self, next: Predicate<T>) -> Self {
        let current = self.predicate;
        self.predicate = Box::new(move |record| current(record) && next(record));
        self
    }

    /// Whether a single record passes the composed predicate
    pub fn matches(&self, record: &T) -> bool {
        (self.predicate)(record)
    }

    /// The composed ordering between two records
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.comparator)(a, b)
    }

    /// Filters and stable-sorts an owned collection, for callers that keep
    /// composing instead of paging. With no criteria composed, the input
    /// comes back unchanged.
    pub fn apply(&self, records: Vec<T>) -> Vec<T> {
        let mut kept: Vec<T> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }

    /// Executes a terminal page request.
    ///
    /// The total is counted before windowing; counting after `skip`/`take`
    /// would corrupt the paging metadata.
    pub fn paginate<S: QuerySource<T>>(
        &self,
        source: &S,
        paging: &PagingRequest,
    ) -> QueryResult<PagedResult<T>> {
        let total_items = source.count(&self.predicate)?;
        let items = source.fetch(
            &self.predicate,
            &self.comparator,
            paging.skip(),
            paging.take(),
        )?;

        let page = paging.page.to_string();
        let total = total_items.to_string();
        Logger::log(
            Severity::Trace,
            "page_served",
            &[("page", page.as_str()), ("total_items", total.as_str())],
        );

        Ok(PagedResult::new(
            items,
            paging.page,
            paging.page_size,
            total_items,
        ))
    }

    /// Like [`Query::paginate`], projecting each record into an output
    /// shape after materialization
    pub fn paginate_map<S, U>(
        &self,
        source: &S,
        paging: &PagingRequest,
        project: impl Fn(T) -> U,
    ) -> QueryResult<PagedResult<U>>
    where
        S: QuerySource<T>,
    {
        Ok(self.paginate(source, paging)?.map(project))
    }
}

impl<T: 'static> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}
