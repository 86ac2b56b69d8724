//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Dates travel as `YYYY-MM-DD` strings and are parsed in the handlers so a
//! malformed date maps to a validation failure, not a framework rejection.

use crate::inventory::Coil;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================
// COIL DTOs
// ============================================

/// Create coil request
#[derive(Debug, Deserialize)]
pub struct CreateCoilRequest {
    /// Length in meters, must be positive
    pub length: i64,
    /// Weight in kilograms, must be positive
    pub weight: i64,
}

/// Create coil response
#[derive(Debug, Serialize)]
pub struct CreateCoilResponse {
    /// Store-assigned id of the new coil
    pub id: i64,
}

/// Delete coil response
#[derive(Debug, Serialize)]
pub struct DeleteCoilResponse {
    /// Id of the removed coil
    pub id: i64,
    /// The removal date now carried by the coil
    pub delete_date: NaiveDate,
}

/// List response shared by the filtered search and the range variants
#[derive(Debug, Serialize)]
pub struct CoilListResponse {
    /// Matching coils, ordered by id
    pub coils: Vec<Coil>,
    /// Number of matches
    pub total: usize,
}

impl CoilListResponse {
    pub fn new(coils: Vec<Coil>) -> Self {
        Self {
            total: coils.len(),
            coils,
        }
    }
}

// ============================================
// FILTER DTOs
// ============================================

/// Query parameters of the combined range filter.
///
/// Every bound is optional; a field participates only when both of its
/// bounds are present. Dates arrive as strings and are parsed per-field.
#[derive(Debug, Default, Deserialize)]
pub struct CoilFilterParams {
    #[serde(default)]
    pub start_id: Option<i64>,
    #[serde(default)]
    pub end_id: Option<i64>,
    #[serde(default)]
    pub start_weight: Option<i64>,
    #[serde(default)]
    pub end_weight: Option<i64>,
    #[serde(default)]
    pub start_length: Option<i64>,
    #[serde(default)]
    pub end_length: Option<i64>,
    #[serde(default)]
    pub start_add_date: Option<String>,
    #[serde(default)]
    pub end_add_date: Option<String>,
    #[serde(default)]
    pub start_delete_date: Option<String>,
    #[serde(default)]
    pub end_delete_date: Option<String>,
}

/// Bounds for `GET /coils/id`
#[derive(Debug, Deserialize)]
pub struct IdRangeParams {
    #[serde(default)]
    pub min_id: Option<i64>,
    #[serde(default)]
    pub max_id: Option<i64>,
}

/// Bounds for `GET /coils/length`
#[derive(Debug, Deserialize)]
pub struct LengthRangeParams {
    #[serde(default)]
    pub min_length: Option<i64>,
    #[serde(default)]
    pub max_length: Option<i64>,
}

/// Bounds for `GET /coils/weight`
#[derive(Debug, Deserialize)]
pub struct WeightRangeParams {
    #[serde(default)]
    pub min_weight: Option<i64>,
    #[serde(default)]
    pub max_weight: Option<i64>,
}

/// Bounds for `GET /coils/add_date`
#[derive(Debug, Deserialize)]
pub struct AddDateRangeParams {
    #[serde(default)]
    pub min_add_date: Option<String>,
    #[serde(default)]
    pub max_add_date: Option<String>,
}

/// Bounds for `GET /coils/delete_date`
#[derive(Debug, Deserialize)]
pub struct DeleteDateRangeParams {
    #[serde(default)]
    pub min_delete_date: Option<String>,
    #[serde(default)]
    pub max_delete_date: Option<String>,
}

// ============================================
// STATS DTOs
// ============================================

/// Query parameters for the statistics endpoint
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    #[serde(default)]
    pub interval_start: Option<String>,
    #[serde(default)]
    pub interval_end: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
