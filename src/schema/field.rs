//! Field kinds and descriptors
//!
//! A [`FieldDescriptor`] is built once per field at registration time and
//! never mutated: name, semantic kind, and a typed getter closure. The
//! closure is the only path from a record to its field value, replacing any
//! runtime name/type inspection with a table lookup.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::request::FilterOperator;
use crate::value::FieldValue;

/// Semantic kind of a field, governing operator legality and value coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string
    String,
    /// Numeric value
    Number,
    /// Boolean
    Bool,
    /// UTC timestamp
    DateTime,
    /// Unique identifier
    Uuid,
}

impl FieldKind {
    /// Returns the kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Bool => "bool",
            FieldKind::DateTime => "datetime",
            FieldKind::Uuid => "uuid",
        }
    }

    /// Operator compatibility policy (fixed, not caller-configurable).
    ///
    /// | operator | applicable kinds |
    /// |---|---|
    /// | `Equals` | all |
    /// | `Contains` / `StartsWith` / `EndsWith` | `String` |
    /// | `GreaterThan` / `LessThan` | `Number`, `DateTime` |
    pub fn supports(&self, operator: FilterOperator) -> bool {
        match operator {
            FilterOperator::Equals => true,
            FilterOperator::Contains | FilterOperator::StartsWith | FilterOperator::EndsWith => {
                matches!(self, FieldKind::String)
            }
            FilterOperator::GreaterThan | FilterOperator::LessThan => {
                matches!(self, FieldKind::Number | FieldKind::DateTime)
            }
        }
    }
}

/// Typed getter registered for one field of `T`
pub type FieldAccessor<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Immutable description of one queryable field of `T`
#[derive(Clone)]
pub struct FieldDescriptor<T> {
    name: String,
    kind: FieldKind,
    accessor: FieldAccessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a descriptor from a raw accessor.
    ///
    /// The accessor must produce values of the declared kind; the typed
    /// constructors below make that guarantee by construction.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        accessor: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            accessor: Arc::new(accessor),
        }
    }

    /// Creates a String-kind descriptor
    pub fn string(
        name: impl Into<String>,
        get: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, FieldKind::String, move |record| {
            FieldValue::Text(get(record))
        })
    }

    /// Creates a Number-kind descriptor
    pub fn number(name: impl Into<String>, get: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(name, FieldKind::Number, move |record| {
            FieldValue::Number(get(record))
        })
    }

    /// Creates a Bool-kind descriptor
    pub fn boolean(
        name: impl Into<String>,
        get: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, FieldKind::Bool, move |record| {
            FieldValue::Bool(get(record))
        })
    }

    /// Creates a DateTime-kind descriptor
    pub fn datetime(
        name: impl Into<String>,
        get: impl Fn(&T) -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, FieldKind::DateTime, move |record| {
            FieldValue::DateTime(get(record))
        })
    }

    /// Creates a Uuid-kind descriptor
    pub fn uuid(name: impl Into<String>, get: impl Fn(&T) -> Uuid + Send + Sync + 'static) -> Self {
        Self::new(name, FieldKind::Uuid, move |record| {
            FieldValue::Uuid(get(record))
        })
    }

    /// Returns the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field kind
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reads this field's value from a record
    pub fn read(&self, record: &T) -> FieldValue {
        (self.accessor)(record)
    }

    /// Clones the accessor for capture inside compiled closures
    pub(crate) fn accessor(&self) -> FieldAccessor<T> {
        Arc::clone(&self.accessor)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        label: String,
        weight: f64,
    }

    #[test]
    fn test_operator_compatibility_table() {
        assert!(FieldKind::String.supports(FilterOperator::Equals));
        assert!(FieldKind::Uuid.supports(FilterOperator::Equals));
        assert!(FieldKind::Bool.supports(FilterOperator::Equals));

        assert!(FieldKind::String.supports(FilterOperator::Contains));
        assert!(!FieldKind::Number.supports(FilterOperator::Contains));
        assert!(!FieldKind::DateTime.supports(FilterOperator::StartsWith));
        assert!(!FieldKind::Uuid.supports(FilterOperator::EndsWith));

        assert!(FieldKind::Number.supports(FilterOperator::GreaterThan));
        assert!(FieldKind::DateTime.supports(FilterOperator::LessThan));
        assert!(!FieldKind::String.supports(FilterOperator::GreaterThan));
        assert!(!FieldKind::Bool.supports(FilterOperator::LessThan));
    }

    #[test]
    fn test_typed_accessors_produce_declared_kind() {
        let label = FieldDescriptor::string("label", |item: &Item| item.label.clone());
        let weight = FieldDescriptor::number("weight", |item: &Item| item.weight);

        let item = Item {
            label: "crate".into(),
            weight: 2.5,
        };

        assert_eq!(label.kind(), FieldKind::String);
        assert_eq!(label.read(&item), FieldValue::Text("crate".into()));
        assert_eq!(weight.read(&item), FieldValue::Number(2.5));
    }
}
