//! Observability subsystem for querykit
//!
//! Structured logging only. Silent-drop decisions made by the compilers
//! stay silent toward the caller, but every one of them emits a trace
//! event here so stale client criteria remain visible in production.

mod logger;

pub use logger::{Logger, Severity};
