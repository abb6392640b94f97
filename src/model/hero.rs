//! Persisted Hero record

use sqlx::FromRow;

use super::views::HeroUpdate;

/// A hero row from the `hero` table.
///
/// Only exists once the store has assigned an `id`. Carries `secret_name`,
/// so it is never serialized directly; responses go through
/// [`HeroPublic`](super::HeroPublic).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub secret_name: String,
}

impl Hero {
    /// Overwrites the fields present in `update`, leaving the rest untouched.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, update: HeroUpdate) {
        update.name.apply_to(&mut self.name);
        update.age.apply_to(&mut self.age);
        update.secret_name.apply_to(&mut self.secret_name);
    }
}
