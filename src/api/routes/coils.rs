//! Coil Routes
//!
//! CRUD endpoints for coils.
//!
//! - POST /api/v1/coils - Register an arriving coil
//! - GET /api/v1/coils - Range-filtered search (paired bounds only)
//! - GET /api/v1/coils/:id - Point lookup
//! - DELETE /api/v1/coils/:id - Soft delete (stamps the removal date)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CoilFilterParams, CoilListResponse, CreateCoilRequest, CreateCoilResponse, DeleteCoilResponse,
};
use crate::api::error::ApiResult;
use crate::api::routes::parse_date;
use crate::api::state::AppState;
use crate::inventory::{repo, Coil, CoilDraft, CoilFilter};

/// POST /api/v1/coils
///
/// Register a coil arriving today. Validation runs before the store is
/// touched; the arrival date is stamped in the configured time zone.
pub async fn create_coil(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCoilRequest>,
) -> ApiResult<(StatusCode, Json<CreateCoilResponse>)> {
    let draft = CoilDraft {
        length: req.length,
        weight: req.weight,
    };
    draft.validate()?;

    let conn = state.store.conn()?;
    let id = repo::create(&conn, &draft, state.today())?;

    tracing::info!(coil_id = id, length = req.length, weight = req.weight, "coil registered");

    Ok((StatusCode::CREATED, Json(CreateCoilResponse { id })))
}

/// GET /api/v1/coils/:id
///
/// Fetch one coil by id.
pub async fn get_coil(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Coil>> {
    let conn = state.store.conn()?;
    let coil = repo::get(&conn, id)?;
    Ok(Json(coil))
}

/// GET /api/v1/coils
///
/// Combined range filter. A field participates only when both of its bounds
/// are supplied; an empty result is a 200 with an empty list.
pub async fn list_coils(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoilFilterParams>,
) -> ApiResult<Json<CoilListResponse>> {
    let filter = filter_from_params(&params)?;

    let conn = state.store.conn()?;
    let coils = repo::filter(&conn, &filter)?;

    tracing::debug!(predicates = filter.len(), matches = coils.len(), "coil search");

    Ok(Json(CoilListResponse::new(coils)))
}

/// DELETE /api/v1/coils/:id
///
/// Stamp the removal date. Removing an already-removed coil returns the
/// original removal date.
pub async fn delete_coil(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteCoilResponse>> {
    let conn = state.store.conn()?;
    let delete_date = repo::soft_delete(&conn, id, state.today())?;

    tracing::info!(coil_id = id, %delete_date, "coil removed from inventory");

    Ok(Json(DeleteCoilResponse { id, delete_date }))
}

/// Translate query parameters into typed range predicates.
fn filter_from_params(params: &CoilFilterParams) -> ApiResult<CoilFilter> {
    let start_add = parse_date("start_add_date", params.start_add_date.as_deref())?;
    let end_add = parse_date("end_add_date", params.end_add_date.as_deref())?;
    let start_delete = parse_date("start_delete_date", params.start_delete_date.as_deref())?;
    let end_delete = parse_date("end_delete_date", params.end_delete_date.as_deref())?;

    Ok(CoilFilter::new()
        .id_range(params.start_id, params.end_id)
        .weight_range(params.start_weight, params.end_weight)
        .length_range(params.start_length, params.end_length)
        .add_date_range(start_add, end_add)
        .delete_date_range(start_delete, end_delete))
}
