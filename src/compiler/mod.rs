//! Criteria compilers for querykit
//!
//! Each compiler walks its request sequence in input order, silently
//! dropping anything that cannot be safely applied, and produces a pure
//! closure over the record type.
//!
//! # Execution Flow (fixed pipeline order)
//!
//! 1. Look up the entity schema in the registry
//! 2. Compile filters into one AND-combined predicate
//! 3. Compile the search keyword into one OR-combined predicate
//! 4. Compile sorts into one ordered key chain
//! 5. Hand the composed query to the pager
//!
//! # Invariants
//!
//! - A compiled predicate or comparator never references a field outside
//!   the schema's allowed set; this is checked before value coercion
//! - Dropped criteria never surface as errors
//! - Compilers are pure and hold no shared state; concurrent calls need
//!   no synchronization

pub mod filter;
pub mod search;
pub mod sort;

use std::cmp::Ordering;

/// A pure record test produced by the filter and search compilers
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A pure total order produced by the sort compiler
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// The identity predicate: every record passes
pub fn match_all<T>() -> Predicate<T> {
    Box::new(|_| true)
}

/// The all-equal comparator: a stable sort leaves existing order untouched
pub fn unordered<T>() -> Comparator<T> {
    Box::new(|_, _| Ordering::Equal)
}
