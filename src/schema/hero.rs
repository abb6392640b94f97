//! The Hero entity description

use std::sync::OnceLock;

use super::types::{EntitySchema, FieldDef};

/// Table the Hero entity is stored in
pub const HERO_TABLE: &str = "hero";

/// Returns the Hero entity schema.
///
/// - `id`: store-assigned primary key
/// - `name`: required, indexed
/// - `age`: optional, null means unknown
/// - `secret_name`: required on create, never returned
pub fn hero_schema() -> &'static EntitySchema {
    static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        EntitySchema::new(
            HERO_TABLE,
            vec![
                FieldDef::primary_key("id"),
                FieldDef::required_string("name").indexed(),
                FieldDef::optional_int("age"),
                FieldDef::required_string("secret_name").write_only(),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ViewKind;

    #[test]
    fn test_hero_views() {
        let schema = hero_schema();
        assert_eq!(
            schema.view(ViewKind::Create).field_names(),
            vec!["name", "age", "secret_name"]
        );
        assert_eq!(
            schema.view(ViewKind::Update).field_names(),
            vec!["name", "age", "secret_name"]
        );
        assert_eq!(schema.view(ViewKind::Public).field_names(), vec!["id", "name", "age"]);
    }

    #[test]
    fn test_hero_ddl() {
        let schema = hero_schema();
        assert_eq!(schema.column_list(), "id, name, age, secret_name");
        assert!(schema.create_table_sql().contains("secret_name TEXT NOT NULL"));
        assert_eq!(
            schema.create_index_sql(),
            vec!["CREATE INDEX IF NOT EXISTS ix_hero_name ON hero (name)".to_string()]
        );
    }
}
