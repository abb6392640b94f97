//! # Hero HTTP Server Module
//!
//! Axum server exposing the hero API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/heros/*` - Hero CRUD

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod hero_routes;
pub mod server;
pub mod session;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use hero_routes::{HeroState, ListParams, MessageResponse};
pub use server::HttpServer;
pub use session::DbSession;
