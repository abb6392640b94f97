//! heroes - a small, strict record service for heroes
//!
//! Layers, leaf first:
//! - [`schema`]: entity description and view validation
//! - [`model`]: the persisted record and its view models
//! - [`repository`]: CRUD over SQLite
//! - [`http_server`]: axum routes
//! - [`cli`] and [`observability`]: process entry and logging

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod repository;
pub mod schema;
