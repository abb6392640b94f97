//! Hero HTTP Routes
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/heros/` (or `/heros`) | Public view |
//! | GET | `/heros/all?offset=&limit=` | list of Public views |
//! | GET | `/heros/{hero_id}` | Public view |
//! | PATCH | `/heros/{hero_id}` | Public view |
//! | DELETE | `/heros/{hero_id}` | `{"message": "Hero Deleted"}` |
//!
//! Each handler decodes, calls the repository once, and encodes the
//! result as [`HeroPublic`]. `secret_name` never leaves the server.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{HeroCreate, HeroPublic, HeroUpdate};
use crate::repository::{HeroRepository, Store, DEFAULT_LIMIT, DEFAULT_OFFSET};

use super::errors::{ApiError, ApiResult};
use super::session::DbSession;

// ==================
// Shared State
// ==================

/// Hero state shared across handlers
pub struct HeroState {
    pub store: Store,
    pub repo: HeroRepository,
}

impl HeroState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repo: HeroRepository::new(),
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Paging parameters for the list endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_offset")]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_offset() -> i64 {
    DEFAULT_OFFSET
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Hero Routes
// ==================

/// Create hero routes
pub fn hero_routes(state: Arc<HeroState>) -> Router {
    Router::new()
        .route("/heros/", post(create_hero_handler))
        .route("/heros", post(create_hero_handler))
        .route("/heros/all", get(list_heroes_handler))
        .route(
            "/heros/{hero_id}",
            get(get_hero_handler)
                .patch(update_hero_handler)
                .delete(delete_hero_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_hero_handler(
    State(state): State<Arc<HeroState>>,
    mut session: DbSession,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<HeroPublic>> {
    let Json(body) = body?;
    let fields = HeroCreate::decode(&body)?;

    let hero = state.repo.create(&mut session, fields).await?;
    tracing::info!(id = hero.id, "hero created");

    Ok(Json(HeroPublic::from(hero)))
}

async fn list_heroes_handler(
    State(state): State<Arc<HeroState>>,
    mut session: DbSession,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<HeroPublic>>> {
    let Query(params) = params?;

    let heroes = state
        .repo
        .list(&mut session, params.offset, params.limit)
        .await?;

    Ok(Json(heroes.into_iter().map(HeroPublic::from).collect()))
}

async fn get_hero_handler(
    State(state): State<Arc<HeroState>>,
    mut session: DbSession,
    hero_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<HeroPublic>> {
    let Path(hero_id) = hero_id?;

    let hero = state
        .repo
        .get(&mut session, hero_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(HeroPublic::from(hero)))
}

async fn update_hero_handler(
    State(state): State<Arc<HeroState>>,
    mut session: DbSession,
    hero_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<HeroPublic>> {
    let Path(hero_id) = hero_id?;
    let Json(body) = body?;
    let patch = HeroUpdate::decode(&body)?;

    let hero = state.repo.update(&mut session, hero_id, patch).await?;
    tracing::info!(id = hero.id, "hero updated");

    Ok(Json(HeroPublic::from(hero)))
}

async fn delete_hero_handler(
    State(state): State<Arc<HeroState>>,
    mut session: DbSession,
    hero_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(hero_id) = hero_id?;

    state.repo.delete(&mut session, hero_id).await?;
    tracing::info!(id = hero_id, "hero deleted");

    Ok(Json(MessageResponse {
        message: "Hero Deleted".to_string(),
    }))
}
