//! Single-Field Range Routes
//!
//! Backward-compatible variants of the combined filter, one per field. Each
//! requires both bounds and, unlike the combined filter, answers 404 when
//! nothing matches.
//!
//! - GET /api/v1/coils/id?min_id&max_id
//! - GET /api/v1/coils/length?min_length&max_length
//! - GET /api/v1/coils/weight?min_weight&max_weight
//! - GET /api/v1/coils/add_date?min_add_date&max_add_date
//! - GET /api/v1/coils/delete_date?min_delete_date&max_delete_date

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    AddDateRangeParams, CoilListResponse, DeleteDateRangeParams, IdRangeParams, LengthRangeParams,
    WeightRangeParams,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::{parse_date, require_bounds};
use crate::api::state::AppState;
use crate::inventory::{repo, CoilFilter};

/// GET /api/v1/coils/id
pub async fn coils_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdRangeParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let (min, max) = require_bounds("min_id", params.min_id, "max_id", params.max_id)?;
    let filter = CoilFilter::new().id_range(Some(min), Some(max));
    run_range_query(&state, &filter)
}

/// GET /api/v1/coils/length
pub async fn coils_by_length(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LengthRangeParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let (min, max) =
        require_bounds("min_length", params.min_length, "max_length", params.max_length)?;
    let filter = CoilFilter::new().length_range(Some(min), Some(max));
    run_range_query(&state, &filter)
}

/// GET /api/v1/coils/weight
pub async fn coils_by_weight(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeightRangeParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let (min, max) =
        require_bounds("min_weight", params.min_weight, "max_weight", params.max_weight)?;
    let filter = CoilFilter::new().weight_range(Some(min), Some(max));
    run_range_query(&state, &filter)
}

/// GET /api/v1/coils/add_date
pub async fn coils_by_add_date(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AddDateRangeParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let min = parse_date("min_add_date", params.min_add_date.as_deref())?;
    let max = parse_date("max_add_date", params.max_add_date.as_deref())?;
    let (min, max) = require_bounds("min_add_date", min, "max_add_date", max)?;
    let filter = CoilFilter::new().add_date_range(Some(min), Some(max));
    run_range_query(&state, &filter)
}

/// GET /api/v1/coils/delete_date
pub async fn coils_by_delete_date(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteDateRangeParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let min = parse_date("min_delete_date", params.min_delete_date.as_deref())?;
    let max = parse_date("max_delete_date", params.max_delete_date.as_deref())?;
    let (min, max) = require_bounds("min_delete_date", min, "max_delete_date", max)?;
    let filter = CoilFilter::new().delete_date_range(Some(min), Some(max));
    run_range_query(&state, &filter)
}

/// Shared tail of every range variant: query, then 404 on an empty result.
fn run_range_query(state: &AppState, filter: &CoilFilter) -> ApiResult<Json<CoilListResponse>> {
    let conn = state.store.conn()?;
    let coils = repo::filter(&conn, filter)?;

    if coils.is_empty() {
        return Err(ApiError::NotFound(
            "no coils matched the requested range".to_string(),
        ));
    }

    Ok(Json(CoilListResponse::new(coils)))
}
