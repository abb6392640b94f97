//! # Repository
//!
//! The only component that reads or writes the store.
//!
//! Each operation runs on a connection borrowed from the caller and is a
//! single statement, except update which reads before it writes.

mod errors;
mod hero;
mod store;

pub use errors::{RepositoryError, RepositoryResult};
pub use hero::{HeroRepository, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use store::{Store, StoreConfig};
