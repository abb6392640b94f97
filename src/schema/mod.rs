//! Entity schema and view validation
//!
//! The schema is the one place field names, types and constraints are
//! declared. It is consumed by:
//! - the store, which renders the table DDL from it
//! - the view models, which validate request bodies against a derived view
//!
//! # Design Principles
//!
//! - Views are derived, never declared by hand
//! - No implicit type coercion
//! - Null only where the field is nullable
//! - Deterministic validation

mod errors;
mod hero;
mod types;
mod validator;

pub use errors::{SchemaResult, ValidationError};
pub use hero::{hero_schema, HERO_TABLE};
pub use types::{EntitySchema, FieldDef, FieldType, ViewKind, ViewSchema};
pub use validator::ViewValidator;
