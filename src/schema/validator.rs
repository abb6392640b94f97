//! Generic view validator
//!
//! Validation semantics:
//! - The body is a JSON object
//! - All required fields of the view are present
//! - Field types exactly match (no coercion: `"30"` and `30.0` are not ints)
//! - Null is only accepted for nullable fields
//!
//! Keys the view does not declare are ignored; they are never stored or
//! echoed back.

use serde_json::{Map, Value};

use super::errors::{SchemaResult, ValidationError};
use super::types::{FieldDef, FieldType, ViewSchema};

/// Validator that checks a JSON body against one view.
///
/// Validator does not mutate the body.
pub struct ViewValidator<'a> {
    view: &'a ViewSchema,
}

impl<'a> ViewValidator<'a> {
    /// Creates a validator for the given view.
    pub fn new(view: &'a ViewSchema) -> Self {
        Self { view }
    }

    /// Validates a body against the view.
    ///
    /// Returns the body as an object so callers can continue decoding it.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in field declaration order.
    pub fn validate<'v>(&self, body: &'v Value) -> SchemaResult<&'v Map<String, Value>> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationError::not_an_object(json_type_name(body)))?;

        for field in &self.view.fields {
            match obj.get(&field.name) {
                Some(Value::Null) => {
                    if !field.nullable {
                        return Err(ValidationError::null_value(&field.name));
                    }
                }
                Some(value) => validate_value(field, value)?,
                None => {
                    if field.required {
                        return Err(ValidationError::missing_field(&field.name));
                    }
                }
            }
        }

        for key in obj.keys() {
            if self.view.field(key).is_none() {
                tracing::debug!(entity = %self.view.entity, field = %key, "ignoring undeclared field");
            }
        }

        Ok(obj)
    }
}

/// Validates a non-null value against a field type.
fn validate_value(field: &FieldDef, value: &Value) -> SchemaResult<()> {
    // Columns are 64-bit signed
    if field.field_type == FieldType::Int && value.is_u64() && !value.is_i64() {
        return Err(ValidationError::type_mismatch(
            &field.name,
            "int",
            "integer out of range",
        ));
    }

    let matches = match field.field_type {
        FieldType::Int => value.is_i64(),
        FieldType::String => value.is_string(),
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::type_mismatch(
            &field.name,
            field.field_type.type_name(),
            json_type_name(value),
        ))
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{EntitySchema, ViewKind};
    use serde_json::json;

    fn sample_schema() -> EntitySchema {
        EntitySchema::new(
            "villain",
            vec![
                FieldDef::primary_key("id"),
                FieldDef::required_string("alias"),
                FieldDef::optional_int("threat"),
            ],
        )
    }

    #[test]
    fn test_valid_create_body() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let body = json!({"alias": "Joker", "threat": 9});
        assert!(validator.validate(&body).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let err = validator.validate(&json!({"threat": 9})).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("alias"));
    }

    #[test]
    fn test_optional_field_may_be_absent_or_null() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        assert!(validator.validate(&json!({"alias": "Joker"})).is_ok());
        assert!(validator
            .validate(&json!({"alias": "Joker", "threat": null}))
            .is_ok());
    }

    #[test]
    fn test_null_rejected_for_non_nullable() {
        let view = sample_schema().view(ViewKind::Update);
        let validator = ViewValidator::new(&view);

        let err = validator.validate(&json!({"alias": null})).unwrap_err();
        assert_eq!(err, ValidationError::null_value("alias"));
    }

    #[test]
    fn test_no_int_coercion() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        for bad in [json!("9"), json!(9.5), json!(true), json!([9])] {
            let body = json!({"alias": "Joker", "threat": bad});
            let err = validator.validate(&body).unwrap_err();
            assert_eq!(err.field, "threat");
            assert_eq!(err.expected, "int");
        }
    }

    #[test]
    fn test_int_out_of_range() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let body = json!({"alias": "Joker", "threat": u64::MAX});
        let err = validator.validate(&body).unwrap_err();
        assert_eq!(err.actual, "integer out of range");
    }

    #[test]
    fn test_wrong_string_type() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let err = validator.validate(&json!({"alias": 42})).unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("alias", "string", "int"));
    }

    #[test]
    fn test_root_must_be_object() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let err = validator.validate(&json!(["Joker"])).unwrap_err();
        assert_eq!(err.field, "$root");
        assert_eq!(err.actual, "array");
    }

    #[test]
    fn test_undeclared_fields_ignored() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);

        let body = json!({"alias": "Joker", "id": 7, "sidekick": "Harley"});
        assert!(validator.validate(&body).is_ok());
    }

    #[test]
    fn test_empty_update_is_valid() {
        let view = sample_schema().view(ViewKind::Update);
        let validator = ViewValidator::new(&view);

        assert!(validator.validate(&json!({})).is_ok());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let view = sample_schema().view(ViewKind::Create);
        let validator = ViewValidator::new(&view);
        let body = json!({"threat": "high"});

        let first = validator.validate(&body).unwrap_err();
        for _ in 0..10 {
            assert_eq!(validator.validate(&body).unwrap_err(), first);
        }
    }
}
