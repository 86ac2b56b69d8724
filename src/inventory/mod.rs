//! Coil inventory - the domain model and its repository
//!
//! This module owns the [`Coil`] record, the typed range predicates used by
//! the filtered search, and the repository operations that translate them
//! into store queries:
//!
//! - [`repo::create`] - insert a new coil, stamped with today's date
//! - [`repo::get`] - point lookup by id
//! - [`repo::filter`] - range-filtered search (paired bounds only)
//! - [`repo::soft_delete`] - stamp a removal date, keeping the row
//! - interval queries feeding the statistics engine
//!
//! Every operation borrows a scoped connection from the store; the
//! repository holds no state of its own.

pub mod coil;
pub mod error;
pub mod filter;
pub mod repo;

pub use coil::{Coil, CoilDraft};
pub use error::{RepoError, RepoResult};
pub use filter::{Bound, CoilFilter, RangeField, RangePredicate};
