//! Error types for schema-driven decoding.

use thiserror::Error;

use crate::ValueType;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while mapping an [`crate::XmlNode`] onto a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The element does not match the record's declared tag or namespace.
    #[error("unexpected element: expected {expected}, found {found}")]
    UnexpectedElement { expected: String, found: String },

    /// An attribute or text value could not be converted to the field's type.
    #[error("invalid {expected} value {value:?} for {element}.{field}")]
    InvalidValue {
        element: String,
        field: String,
        value: String,
        expected: ValueType,
    },
}

/// A value conversion failure, before the field it belongs to is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {expected} value {value:?}")]
pub struct ValueError {
    pub value: String,
    pub expected: ValueType,
}

impl ValueError {
    pub fn new(value: &str, expected: ValueType) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}
