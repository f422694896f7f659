//! querykit - a strict, allowlist-driven query criteria compiler
//!
//! Turns declarative, string-keyed filter/sort/search requests into safely
//! composed predicates and orderings over typed record collections, plus
//! 1-based paging with pre-window totals. Field access only ever goes
//! through a registered accessor; criteria that cannot be safely applied
//! are dropped, never raised.

pub mod compiler;
pub mod observability;
pub mod paging;
pub mod query;
pub mod request;
pub mod schema;
pub mod value;
