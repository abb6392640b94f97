//! Hero view models
//!
//! - [`HeroCreate`]: creation payload, `name` and `secret_name` required
//! - [`HeroUpdate`]: partial payload, every field optional
//! - [`HeroPublic`]: response projection, never carries `secret_name`
//!
//! Input views are decoded in two steps: the body is checked against the
//! view derived from [`hero_schema`], then deserialized. The first step owns
//! every rejection, so the second cannot fail on a body that passed it.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{hero_schema, SchemaResult, ValidationError, ViewKind, ViewSchema, ViewValidator};

use super::hero::Hero;
use super::patch::Patch;

fn create_view() -> &'static ViewSchema {
    static VIEW: OnceLock<ViewSchema> = OnceLock::new();
    VIEW.get_or_init(|| hero_schema().view(ViewKind::Create))
}

fn update_view() -> &'static ViewSchema {
    static VIEW: OnceLock<ViewSchema> = OnceLock::new();
    VIEW.get_or_init(|| hero_schema().view(ViewKind::Update))
}

/// Checks `body` against `view`, then deserializes it.
fn decode<'de, T: Deserialize<'de>>(view: &ViewSchema, body: &'de Value) -> SchemaResult<T> {
    ViewValidator::new(view).validate(body)?;
    T::deserialize(body).map_err(|e| ValidationError::new("$root", "valid body", e.to_string()))
}

/// Creation payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroCreate {
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
    pub secret_name: String,
}

impl HeroCreate {
    /// Decodes a creation payload from a JSON body.
    pub fn decode(body: &Value) -> SchemaResult<Self> {
        decode(create_view(), body)
    }
}

/// Partial update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeroUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub age: Patch<Option<i64>>,
    #[serde(default)]
    pub secret_name: Patch<String>,
}

impl HeroUpdate {
    /// Decodes a partial update from a JSON body.
    ///
    /// `{"age": null}` clears the age; `{}` changes nothing. `name` and
    /// `secret_name` can be replaced but never nulled.
    pub fn decode(body: &Value) -> SchemaResult<Self> {
        decode(update_view(), body)
    }

    /// Whether no field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_absent() && self.age.is_absent() && self.secret_name.is_absent()
    }
}

/// Public projection of a persisted hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPublic {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
}

impl From<Hero> for HeroPublic {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            age: hero.age,
        }
    }
}

impl From<&Hero> for HeroPublic {
    fn from(hero: &Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            age: hero.age,
        }
    }
}
