//! Per-request store session
//!
//! [`DbSession`] is an extractor: a connection is checked out of the pool
//! before the handler body runs and goes back when the extractor is dropped,
//! whichever way the handler exits.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use super::errors::ApiError;
use super::hero_routes::HeroState;

/// A pooled connection scoped to one request
pub struct DbSession(PoolConnection<Sqlite>);

impl FromRequestParts<Arc<HeroState>> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<HeroState>,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.store.session().await?;
        tracing::trace!("session acquired");
        Ok(Self(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}
