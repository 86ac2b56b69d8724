//! Record Store - SQLite-backed durable table of coil records
//!
//! The store owns schema creation and connection handout. Every operation in
//! the repository and statistics layers borrows one scoped [`rusqlite::Connection`]
//! obtained from [`Store::conn`] and drops it when the request finishes, so a
//! failed request can never leak a connection.
//!
//! SQLite runs in WAL mode, which lets concurrent readers proceed while a
//! single writer commits. Dates are stored as `YYYY-MM-DD` text, so
//! lexicographic comparison in SQL equals chronological comparison.

pub mod error;

pub use error::{StoreError, StoreResult};

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Table layout for the coil inventory.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS coils (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        length      INTEGER NOT NULL,
        weight      INTEGER NOT NULL,
        add_date    TEXT    NOT NULL,
        delete_date TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_coils_add_date ON coils(add_date);
    CREATE INDEX IF NOT EXISTS idx_coils_delete_date ON coils(delete_date);
";

/// Handle to the on-disk coil database.
///
/// `Store` itself holds no open connection; it hands out one connection per
/// request via [`Store::conn`]. That keeps the lifecycle explicit:
/// acquire-per-request, release-on-exit.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let db_path = path.into();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { db_path };

        let conn = store.conn().map_err(|e| StoreError::Open {
            path: store.db_path.clone(),
            reason: e.to_string(),
        })?;
        conn.execute_batch(SCHEMA).map_err(|e| StoreError::Open {
            path: store.db_path.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!(path = ?store.db_path, "coil store opened");
        Ok(store)
    }

    /// Open one scoped connection.
    ///
    /// The caller owns the connection for the duration of a single request
    /// and releases it by dropping it, on every exit path.
    pub fn conn(&self) -> StoreResult<Connection> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            ",
        )?;

        Ok(conn)
    }

    /// Lightweight health probe: can the store answer a trivial query?
    pub fn probe(&self) -> bool {
        self.conn()
            .and_then(|conn| {
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                    .map_err(StoreError::from)
            })
            .is_ok()
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}
