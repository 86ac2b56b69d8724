//! Record store error types
//!
//! Defines all errors that can occur in the store layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite query or transaction failed
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O operation failed (database directory, file handles)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or its schema could not be applied
    #[error("failed to open store at {path:?}: {reason}")]
    Open { path: PathBuf, reason: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
