//! Validation error type
//!
//! A request body that does not match the view it is decoded into is
//! rejected with a [`ValidationError`] naming the offending field. Callers
//! map it to a client error; it never reaches the store.

use thiserror::Error;

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}': expected {expected}, got {actual}")]
pub struct ValidationError {
    /// Field name (`$root` for the body itself)
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }

    /// The body is not a JSON object
    pub fn not_an_object(actual: impl Into<String>) -> Self {
        Self::new("$root", "object", actual)
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, ValidationError>;
