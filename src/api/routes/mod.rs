//! API Route Handlers
//!
//! - `coils`: create, point lookup, combined range filter, soft delete
//! - `ranges`: single-field range variants kept for backward compatibility
//! - `stats`: the interval statistics report
//! - `health`: liveness/readiness probes

pub mod coils;
pub mod health;
pub mod ranges;
pub mod stats;

use crate::api::error::{ApiError, ApiResult};
use chrono::NaiveDate;

/// Parse an optional `YYYY-MM-DD` query value.
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> ApiResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| bad_date(field, raw)),
    }
}

pub(crate) fn bad_date(field: &str, raw: &str) -> ApiError {
    ApiError::Validation(format!(
        "{}: expected a YYYY-MM-DD date, got '{}'",
        field, raw
    ))
}

/// Require both bounds of a range variant.
pub(crate) fn require_bounds<T>(
    min_name: &str,
    min: Option<T>,
    max_name: &str,
    max: Option<T>,
) -> ApiResult<(T, T)> {
    match (min, max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(ApiError::Validation(format!(
            "{} and {} are both required",
            min_name, max_name
        ))),
    }
}
