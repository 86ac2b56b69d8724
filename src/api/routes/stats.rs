//! Statistics Route
//!
//! - GET /api/v1/coils/stats?interval_start&interval_end

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dto::StatsParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::stats::{self, IntervalReport};

/// GET /api/v1/coils/stats
///
/// Build the interval report for `[interval_start, interval_end]`. Both
/// bounds are required `YYYY-MM-DD` dates; a malformed or missing bound, or
/// an inverted interval, is a validation failure.
pub async fn interval_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> ApiResult<Json<IntervalReport>> {
    let start = parse_interval_date("interval_start", params.interval_start.as_deref())?;
    let end = parse_interval_date("interval_end", params.interval_end.as_deref())?;

    let conn = state.store.conn()?;
    let report = stats::interval_report(&conn, start, end)?;

    Ok(Json(report))
}

/// Interval bounds are required; failures map to the invalid-range code.
fn parse_interval_date(field: &str, value: Option<&str>) -> ApiResult<NaiveDate> {
    let raw = value
        .ok_or_else(|| ApiError::InvalidRange(format!("{} is required", field)))?;
    raw.parse().map_err(|_| {
        ApiError::InvalidRange(format!(
            "{}: expected a YYYY-MM-DD date, got '{}'",
            field, raw
        ))
    })
}
