//! # Hero Repository
//!
//! CRUD over the `hero` table. Statements are rendered once from the entity
//! schema; every call borrows a connection the caller has already acquired.

use sqlx::SqliteConnection;

use crate::model::{Hero, HeroCreate, HeroUpdate};
use crate::schema::{hero_schema, EntitySchema};

use super::errors::{RepositoryError, RepositoryResult};

/// Offset used when a list request does not supply one
pub const DEFAULT_OFFSET: i64 = 0;

/// Page size used when a list request does not supply one
pub const DEFAULT_LIMIT: i64 = 2;

/// Hero CRUD statements
#[derive(Debug, Clone)]
pub struct HeroRepository {
    insert_sql: String,
    select_sql: String,
    list_sql: String,
    update_sql: String,
    delete_sql: String,
}

impl HeroRepository {
    pub fn new() -> Self {
        Self::for_schema(hero_schema())
    }

    fn for_schema(schema: &EntitySchema) -> Self {
        let table = &schema.table;
        let columns = schema.column_list();
        let key = schema.primary_key().map_or("rowid", |f| f.name.as_str());

        let writable = schema.writable_columns();
        let placeholders = vec!["?"; writable.len()].join(", ");
        let assignments = writable
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let writable = writable.join(", ");

        Self {
            insert_sql: format!(
                "INSERT INTO {table} ({writable}) VALUES ({placeholders}) RETURNING {columns}"
            ),
            select_sql: format!("SELECT {columns} FROM {table} WHERE {key} = ?"),
            list_sql: format!("SELECT {columns} FROM {table} ORDER BY {key} LIMIT ? OFFSET ?"),
            update_sql: format!("UPDATE {table} SET {assignments} WHERE {key} = ?"),
            delete_sql: format!("DELETE FROM {table} WHERE {key} = ?"),
        }
    }

    /// Stores a new hero and returns it with its assigned id.
    pub async fn create(
        &self,
        conn: &mut SqliteConnection,
        fields: HeroCreate,
    ) -> RepositoryResult<Hero> {
        // Binds follow the writable columns of the hero schema
        let hero = sqlx::query_as::<_, Hero>(&self.insert_sql)
            .bind(fields.name)
            .bind(fields.age)
            .bind(fields.secret_name)
            .fetch_one(&mut *conn)
            .await?;

        tracing::debug!(id = hero.id, "hero created");
        Ok(hero)
    }

    /// Fetches a hero by id; `None` if there is no such row.
    pub async fn get(&self, conn: &mut SqliteConnection, id: i64) -> RepositoryResult<Option<Hero>> {
        let hero = sqlx::query_as::<_, Hero>(&self.select_sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(hero)
    }

    /// Returns up to `limit` heroes after skipping `offset`, in id order.
    ///
    /// Negative `offset` or `limit` yields an empty page.
    pub async fn list(
        &self,
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> RepositoryResult<Vec<Hero>> {
        if offset < 0 || limit < 0 {
            return Ok(Vec::new());
        }

        let heroes = sqlx::query_as::<_, Hero>(&self.list_sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;
        Ok(heroes)
    }

    /// Overwrites the fields present in `patch` and returns the result.
    ///
    /// The existence check and the write are separate statements. A row
    /// deleted in between makes the write affect nothing, which is reported
    /// as `NotFound`.
    pub async fn update(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
        patch: HeroUpdate,
    ) -> RepositoryResult<Hero> {
        let mut hero = self
            .get(&mut *conn, id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if patch.is_empty() {
            return Ok(hero);
        }

        hero.apply(patch);

        let result = sqlx::query(&self.update_sql)
            .bind(&hero.name)
            .bind(hero.age)
            .bind(&hero.secret_name)
            .bind(hero.id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "hero vanished during update");
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(id, "hero updated");
        Ok(hero)
    }

    /// Removes a hero; `NotFound` if there was nothing to remove.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query(&self.delete_sql)
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(id, "hero deleted");
        Ok(())
    }
}

impl Default for HeroRepository {
    fn default() -> Self {
        Self::new()
    }
}
