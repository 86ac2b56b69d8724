//! Repository error types

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur in repository operations
#[derive(Error, Debug)]
pub enum RepoError {
    /// A field value failed validation before any write happened
    #[error("validation error: {0}")]
    Validation(String),

    /// No coil exists with the requested id
    #[error("coil {0} not found")]
    NotFound(i64),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for RepoError {
    fn from(err: rusqlite::Error) -> Self {
        RepoError::Store(StoreError::Sqlite(err))
    }
}

/// Result type alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
