//! Schema registry subsystem for querykit
//!
//! Maps each record type to its queryable fields: name, semantic kind, and
//! a typed accessor closure. Built once during startup wiring, read-only
//! afterwards.
//!
//! # Design Principles
//!
//! - Field access only ever goes through a registered accessor; a field
//!   omitted from registration is permanently unreachable
//! - Operator/kind compatibility is a fixed table, not caller-configurable
//! - Absence of a type or field on the read path is a normal condition;
//!   the only schema errors are registration mistakes

mod errors;
mod field;
mod registry;

pub use errors::{SchemaError, SchemaResult};
pub use field::{FieldAccessor, FieldDescriptor, FieldKind};
pub use registry::{EntitySchema, SchemaRegistry};
