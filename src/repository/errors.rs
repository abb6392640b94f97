//! # Repository Errors

use thiserror::Error;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the given id
    #[error("Hero not found")]
    NotFound,

    /// Store unreachable, locked, or corrupt
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }
}
