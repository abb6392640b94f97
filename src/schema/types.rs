//! Entity schema types
//!
//! Supported column types:
//! - int: 64-bit signed integer (SQLite `INTEGER`)
//! - string: UTF-8 string (SQLite `TEXT`)
//!
//! An [`EntitySchema`] is the single description of a persisted record. The
//! store renders its DDL from it and every view model derives its field set
//! from it, so the two cannot drift apart.

use serde::Serialize;
use serde_json::Value;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    String,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::String => "string",
        }
    }

    /// Returns the SQLite column type
    pub fn sql_type(&self) -> &'static str {
        match self {
            FieldType::Int => "INTEGER",
            FieldType::String => "TEXT",
        }
    }
}

/// Field definition with its constraint metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Column / JSON key
    pub name: String,
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be supplied on input
    pub required: bool,
    /// Whether null is an accepted value
    pub nullable: bool,
    /// Store-assigned primary key
    pub primary_key: bool,
    /// Whether the store keeps an index on this column
    pub indexed: bool,
    /// Accepted on input, never returned
    pub write_only: bool,
}

impl FieldDef {
    fn new(name: impl Into<String>, field_type: FieldType, required: bool, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
            nullable,
            primary_key: false,
            indexed: false,
            write_only: false,
        }
    }

    /// Create a store-assigned integer primary key
    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            primary_key: true,
            ..Self::new(name, FieldType::Int, false, false)
        }
    }

    /// Create a required string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String, true, false)
    }

    /// Create an optional, nullable int field
    pub fn optional_int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int, false, true)
    }

    /// Mark the field as indexed
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Mark the field as write-only
    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    /// Value the field takes when it is not supplied, if any.
    ///
    /// Optional nullable fields default to null; required fields and the
    /// primary key have no default.
    pub fn default_value(&self) -> Option<Value> {
        if !self.required && self.nullable {
            Some(Value::Null)
        } else {
            None
        }
    }

    fn column_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.field_type.sql_type());
        if self.primary_key {
            sql.push_str(" PRIMARY KEY AUTOINCREMENT");
        } else if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        sql
    }
}

/// The shapes derived from an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Creation payload: no primary key, entity requirements kept
    Create,
    /// Partial update payload: no primary key, every field optional
    Update,
    /// Response projection: no write-only fields, primary key always present
    Public,
}

/// Field set of one view, derived from an [`EntitySchema`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSchema {
    /// Entity this view was derived from
    pub entity: String,
    /// Which view this is
    pub kind: ViewKind,
    /// Fields in declaration order
    pub fields: Vec<FieldDef>,
}

impl ViewSchema {
    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Complete entity definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    /// Table name
    pub table: String,
    /// Field definitions in column order
    pub fields: Vec<FieldDef>,
}

impl EntitySchema {
    /// Create a new entity schema
    pub fn new(table: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            table: table.into(),
            fields,
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The primary key field, if the entity declares one
    pub fn primary_key(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Derives the field set of a view
    pub fn view(&self, kind: ViewKind) -> ViewSchema {
        let fields = self
            .fields
            .iter()
            .filter(|f| match kind {
                ViewKind::Create | ViewKind::Update => !f.primary_key,
                ViewKind::Public => !f.write_only,
            })
            .cloned()
            .map(|mut f| {
                match kind {
                    ViewKind::Create => {}
                    ViewKind::Update => f.required = false,
                    ViewKind::Public => {
                        if f.primary_key {
                            f.required = true;
                        }
                    }
                }
                f
            })
            .collect();

        ViewSchema {
            entity: self.table.clone(),
            kind,
            fields,
        }
    }

    /// Comma-separated column list in declaration order
    pub fn column_list(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Columns the caller supplies on insert and update, in declaration
    /// order. The store-assigned primary key is excluded.
    pub fn writable_columns(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.primary_key)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this entity
    pub fn create_table_sql(&self) -> String {
        let columns = self
            .fields
            .iter()
            .map(|f| format!("    {}", f.column_sql()))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n)", self.table, columns)
    }

    /// `CREATE INDEX IF NOT EXISTS` statements, one per indexed field
    pub fn create_index_sql(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.indexed)
            .map(|f| {
                format!(
                    "CREATE INDEX IF NOT EXISTS ix_{table}_{column} ON {table} ({column})",
                    table = self.table,
                    column = f.name
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> EntitySchema {
        EntitySchema::new(
            "villain",
            vec![
                FieldDef::primary_key("id"),
                FieldDef::required_string("alias").indexed(),
                FieldDef::optional_int("threat"),
                FieldDef::required_string("lair").write_only(),
            ],
        )
    }

    #[test]
    fn test_create_view_drops_primary_key() {
        let view = sample_schema().view(ViewKind::Create);
        assert_eq!(view.field_names(), vec!["alias", "threat", "lair"]);
        assert!(view.field("alias").unwrap().required);
        assert!(!view.field("threat").unwrap().required);
    }

    #[test]
    fn test_update_view_makes_everything_optional() {
        let view = sample_schema().view(ViewKind::Update);
        assert_eq!(view.field_names(), vec!["alias", "threat", "lair"]);
        assert!(view.fields.iter().all(|f| !f.required));
        // Nullability is carried over unchanged
        assert!(!view.field("alias").unwrap().nullable);
        assert!(view.field("threat").unwrap().nullable);
    }

    #[test]
    fn test_public_view_hides_write_only() {
        let view = sample_schema().view(ViewKind::Public);
        assert_eq!(view.field_names(), vec!["id", "alias", "threat"]);
        assert!(view.field("id").unwrap().required);
    }

    #[test]
    fn test_primary_key_and_writable_columns() {
        let schema = sample_schema();
        assert_eq!(schema.primary_key().unwrap().name, "id");
        assert_eq!(schema.writable_columns(), vec!["alias", "threat", "lair"]);

        let keyless = EntitySchema::new("note", vec![FieldDef::required_string("body")]);
        assert!(keyless.primary_key().is_none());
        assert_eq!(keyless.writable_columns(), vec!["body"]);
    }

    #[test]
    fn test_create_table_sql() {
        let sql = sample_schema().create_table_sql();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS villain (\n    id INTEGER PRIMARY KEY AUTOINCREMENT,\n    alias TEXT NOT NULL,\n    threat INTEGER,\n    lair TEXT NOT NULL\n)"
        );
    }

    #[test]
    fn test_create_index_sql() {
        assert_eq!(
            sample_schema().create_index_sql(),
            vec!["CREATE INDEX IF NOT EXISTS ix_villain_alias ON villain (alias)".to_string()]
        );
    }

    #[test]
    fn test_default_values() {
        let schema = sample_schema();
        assert_eq!(schema.field("threat").unwrap().default_value(), Some(Value::Null));
        assert_eq!(schema.field("alias").unwrap().default_value(), None);
        assert_eq!(schema.field("id").unwrap().default_value(), None);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::Int.sql_type(), "INTEGER");
        assert_eq!(FieldType::String.sql_type(), "TEXT");
    }
}
