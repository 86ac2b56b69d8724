//! # Coilyard
//!
//! Coil inventory service - an HTTP API for tracking warehouse coils
//! (physical rolls of material) with range queries and interval statistics.
//!
//! ## Features
//!
//! - **Durable records**: SQLite-backed coil table, one scoped connection per request
//! - **Typed range search**: paired-bounds filters folded into a SQL conjunction
//! - **Soft deletes**: removal is a date stamp, never a row deletion
//! - **Interval reports**: counts, aggregates, longest stay, and per-day extremes
//!
//! ## Modules
//!
//! - [`store`]: SQLite record store
//! - [`inventory`]: coil model, range predicates, repository operations
//! - [`stats`]: the interval statistics engine
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coilyard::api::{serve, ApiConfig, AppState};
//! use coilyard::store::Store;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(Store::open("coilyard.db")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone(), chrono_tz::Europe::Moscow);
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod inventory;
pub mod stats;
pub mod store;

// Re-export top-level types for convenience
pub use store::{Store, StoreError, StoreResult};

pub use inventory::{Bound, Coil, CoilDraft, CoilFilter, RangeField, RangePredicate, RepoError, RepoResult};

pub use stats::{DayCount, DayWeight, IntervalReport, LongestStay, StatsError, StatsResult};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError};
