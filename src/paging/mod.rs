//! Terminal page results for querykit
//!
//! A [`PagedResult`] is created fresh per query and never mutated:
//! the materialized window plus total-count metadata computed before
//! windowing.

use serde::Serialize;

/// One materialized page of results with total-count metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    /// The records of this page, in final order
    pub items: Vec<T>,
    /// 1-based page number echoed from the request
    pub page: usize,
    /// Requested window size; the last page may hold fewer items
    pub page_size: usize,
    /// Records matching the query across all pages
    pub total_items: usize,
    /// `ceil(total_items / page_size)`
    pub total_pages: usize,
}

impl<T> PagedResult<T> {
    /// Builds a page. `total_items` must be the pre-window count.
    ///
    /// `page_size` is validated to be at least 1 by the request layer; a
    /// zero page size yields zero pages rather than panicking if a caller
    /// bypasses that layer.
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Projects each item into an output shape, keeping the metadata
    pub fn map<U>(self, project: impl Fn(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(project).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
