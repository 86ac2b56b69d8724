//! Statistics Engine
//!
//! Computes the interval report: "what happened to the inventory during
//! `[interval_start, interval_end]`". The engine only reads, never mutates.
//!
//! # Pipeline
//!
//! ```text
//! interval -> eligibility query -> counts -> aggregates -> per-day extremes -> report
//! ```
//!
//! The eligibility predicate and the two interval counts run in SQL through
//! the repository; aggregation and per-day grouping run here, over the
//! fetched rows. All floating-point outputs are rounded to 4 decimal places.

use crate::inventory::repo;
use crate::inventory::{Coil, RepoError};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while building a report
#[derive(Error, Debug)]
pub enum StatsError {
    /// interval_start is after interval_end
    #[error("invalid interval: {start} is after {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    /// A repository query failed
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Result type alias for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Longest stay among eligible coils that have been removed.
///
/// `has_data == false` means no eligible coil carries a removal date; the
/// two outcomes are distinct shapes, not an overloaded number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestStay {
    pub has_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
}

impl LongestStay {
    fn none() -> Self {
        Self {
            has_data: false,
            seconds: None,
        }
    }
}

/// A date paired with how many coils arrived that day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// A date paired with the total weight of coils that arrived that day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWeight {
    pub date: NaiveDate,
    pub total_weight: i64,
}

/// The interval report
///
/// When the eligible set is empty, `no_data` is true and every aggregate
/// field is omitted; the counts still appear. Per-day extremes are present
/// whenever at least one coil arrived inside the interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalReport {
    pub added_count: u64,
    pub deleted_count: u64,
    pub no_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_weight: Option<f64>,
    pub longest_stay: LongestStay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count_by_day: Option<DayCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count_by_day: Option<DayCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight_by_day: Option<DayWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight_by_day: Option<DayWeight>,
}

/// Build the report for `[start, end]` (inclusive dates).
pub fn interval_report(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> StatsResult<IntervalReport> {
    if start > end {
        return Err(StatsError::InvalidInterval { start, end });
    }

    let added_count = repo::count_added(conn, start, end)?;
    let deleted_count = repo::count_deleted(conn, start, end)?;
    let eligible = repo::eligible_in_interval(conn, start, end)?;
    let added = repo::added_in_interval(conn, start, end)?;

    let aggregates = aggregates(&eligible);
    let longest_stay = longest_stay(&eligible);
    let (min_count_by_day, max_count_by_day) = day_count_extremes(&added);
    let (min_weight_by_day, max_weight_by_day) = day_weight_extremes(&added);

    tracing::debug!(
        %start,
        %end,
        eligible = eligible.len(),
        added_count,
        deleted_count,
        "interval report computed"
    );

    Ok(IntervalReport {
        added_count,
        deleted_count,
        no_data: eligible.is_empty(),
        avg_length: aggregates.as_ref().map(|a| a.avg_length),
        avg_weight: aggregates.as_ref().map(|a| a.avg_weight),
        max_length: aggregates.as_ref().map(|a| a.max_length),
        max_weight: aggregates.as_ref().map(|a| a.max_weight),
        min_length: aggregates.as_ref().map(|a| a.min_length),
        min_weight: aggregates.as_ref().map(|a| a.min_weight),
        sum_weight: aggregates.as_ref().map(|a| a.sum_weight),
        longest_stay,
        min_count_by_day,
        max_count_by_day,
        min_weight_by_day,
        max_weight_by_day,
    })
}

/// Length/weight aggregates over one set of coils
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aggregates {
    avg_length: f64,
    avg_weight: f64,
    max_length: f64,
    max_weight: f64,
    min_length: f64,
    min_weight: f64,
    sum_weight: f64,
}

/// Compute the aggregates, or `None` for an empty set.
fn aggregates(coils: &[Coil]) -> Option<Aggregates> {
    if coils.is_empty() {
        return None;
    }

    let n = coils.len() as f64;
    let sum_length: i64 = coils.iter().map(|c| c.length).sum();
    let sum_weight: i64 = coils.iter().map(|c| c.weight).sum();
    let max_length = coils.iter().map(|c| c.length).max()?;
    let min_length = coils.iter().map(|c| c.length).min()?;
    let max_weight = coils.iter().map(|c| c.weight).max()?;
    let min_weight = coils.iter().map(|c| c.weight).min()?;

    Some(Aggregates {
        avg_length: round4(sum_length as f64 / n),
        avg_weight: round4(sum_weight as f64 / n),
        max_length: round4(max_length as f64),
        max_weight: round4(max_weight as f64),
        min_length: round4(min_length as f64),
        min_weight: round4(min_weight as f64),
        sum_weight: round4(sum_weight as f64),
    })
}

/// Maximum `delete_date - add_date` in seconds among removed coils.
fn longest_stay(coils: &[Coil]) -> LongestStay {
    match coils.iter().filter_map(Coil::stay_seconds).reduce(f64::max) {
        Some(seconds) => LongestStay {
            has_data: true,
            seconds: Some(round4(seconds)),
        },
        None => LongestStay::none(),
    }
}

/// Per-day arrival counts: the day with the fewest and the day with the most.
///
/// Ties resolve to the earliest date on both ends; the map iterates in
/// ascending date order and the comparisons are strict.
fn day_count_extremes(added: &[Coil]) -> (Option<DayCount>, Option<DayCount>) {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for coil in added {
        *per_day.entry(coil.add_date).or_insert(0) += 1;
    }

    let mut min: Option<DayCount> = None;
    let mut max: Option<DayCount> = None;
    for (&date, &count) in &per_day {
        if min.map_or(true, |m| count < m.count) {
            min = Some(DayCount { date, count });
        }
        if max.map_or(true, |m| count > m.count) {
            max = Some(DayCount { date, count });
        }
    }

    (min, max)
}

/// Per-day arrival weight totals: the lightest and heaviest day.
fn day_weight_extremes(added: &[Coil]) -> (Option<DayWeight>, Option<DayWeight>) {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for coil in added {
        *per_day.entry(coil.add_date).or_insert(0) += coil.weight;
    }

    let mut min: Option<DayWeight> = None;
    let mut max: Option<DayWeight> = None;
    for (&date, &total_weight) in &per_day {
        if min.map_or(true, |m| total_weight < m.total_weight) {
            min = Some(DayWeight { date, total_weight });
        }
        if max.map_or(true, |m| total_weight > m.total_weight) {
            max = Some(DayWeight { date, total_weight });
        }
    }

    (min, max)
}

/// Round to 4 decimal places, the precision of every report float.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
