//! Entity schemas and the process-wide registry
//!
//! The registry is populated during a single-writer startup phase and is
//! read-only for the rest of the process lifetime, so concurrent reads need
//! no locking. Hot registration would require external synchronization or a
//! copy-on-write swap by the hosting application.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::field::FieldDescriptor;

/// All queryable fields registered for one record type
pub struct EntitySchema<T> {
    fields: HashMap<String, FieldDescriptor<T>>,
}

impl<T> EntitySchema<T> {
    /// Creates an empty schema
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Builder-style field registration; a duplicate name replaces the
    /// earlier descriptor
    pub fn with_field(mut self, descriptor: FieldDescriptor<T>) -> Self {
        self.fields.insert(descriptor.name().to_string(), descriptor);
        self
    }

    /// Looks up a field by name. Absence is a normal, expected condition:
    /// the compilers drop requests naming unknown fields.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.get(name)
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates registered field names in no particular order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<T> std::fmt::Debug for EntitySchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntitySchema")
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T> Default for EntitySchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide mapping from record type to its entity schema
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl SchemaRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the schema for `T`, rejecting empty schemas.
    /// Re-registration replaces the previous schema.
    pub fn register<T: 'static>(&mut self, schema: EntitySchema<T>) -> SchemaResult<()> {
        if schema.is_empty() {
            return Err(SchemaError::EmptySchema(type_name::<T>()));
        }
        self.schemas.insert(TypeId::of::<T>(), Box::new(schema));
        Ok(())
    }

    /// Returns the schema for `T`, failing only if `T` was never registered
    pub fn describe<T: 'static>(&self) -> SchemaResult<&EntitySchema<T>> {
        self.schemas
            .get(&TypeId::of::<T>())
            .and_then(|schema| schema.downcast_ref::<EntitySchema<T>>())
            .ok_or(SchemaError::Unregistered(type_name::<T>()))
    }

    /// Whether a schema exists for `T`
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<T>())
    }
}
