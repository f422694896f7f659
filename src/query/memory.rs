//! In-memory queryable source
//!
//! The reference execution model: filter, stable-sort, then window. Useful
//! for tests and for callers whose data is already materialized; a data
//! store adapter implements [`QuerySource`] with the same two operations
//! against its own execution engine.

use super::{QueryResult, QuerySource};
use crate::compiler::{Comparator, Predicate};

/// A queryable source over an owned, materialized collection
pub struct MemorySource<T> {
    records: Vec<T>,
}

impl<T> MemorySource<T> {
    /// Wraps a collection
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Number of underlying records, unfiltered
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> QuerySource<T> for MemorySource<T> {
    fn count(&self, predicate: &Predicate<T>) -> QueryResult<usize> {
        Ok(self.records.iter().filter(|record| predicate(record)).count())
    }

    fn fetch(
        &self,
        predicate: &Predicate<T>,
        comparator: &Comparator<T>,
        skip: usize,
        take: usize,
    ) -> QueryResult<Vec<T>> {
        let mut matched: Vec<T> = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        // Vec::sort_by is stable, which the sort contract relies on
        matched.sort_by(|a, b| comparator(a, b));
        Ok(matched.into_iter().skip(skip).take(take).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{match_all, unordered};

    #[test]
    fn test_count_applies_predicate() {
        let source = MemorySource::new(vec![1, 2, 3, 4, 5]);
        let evens: Predicate<i32> = Box::new(|n| n % 2 == 0);
        assert_eq!(source.count(&evens).unwrap(), 2);
        assert_eq!(source.count(&match_all()).unwrap(), 5);
    }

    #[test]
    fn test_fetch_windows_after_filtering() {
        let source = MemorySource::new((1..=10).collect::<Vec<i32>>());
        let odds: Predicate<i32> = Box::new(|n| n % 2 == 1);

        let window = source.fetch(&odds, &unordered(), 2, 2).unwrap();
        assert_eq!(window, vec![5, 7]);
    }

    #[test]
    fn test_fetch_preserves_order_with_unordered_comparator() {
        let source = MemorySource::new(vec![3, 1, 2]);
        let all = source.fetch(&match_all(), &unordered(), 0, 10).unwrap();
        assert_eq!(all, vec![3, 1, 2]);
    }

    #[test]
    fn test_fetch_sorts_with_comparator() {
        let source = MemorySource::new(vec![3, 1, 2]);
        let ascending: Comparator<i32> = Box::new(|a, b| a.cmp(b));
        let all = source.fetch(&match_all(), &ascending, 0, 10).unwrap();
        assert_eq!(all, vec![1, 2, 3]);
    }
}
