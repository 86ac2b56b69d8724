//! Typed range predicates for the filtered coil search
//!
//! A [`CoilFilter`] is a plain list of `(field, min, max)` values folded into
//! a SQL conjunction. Building the filter is where the paired-bounds policy
//! lives: a field with only one bound supplied is ignored entirely, not
//! partially filtered. An empty filter matches every coil.

use chrono::NaiveDate;
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

/// Field a range predicate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Id,
    Length,
    Weight,
    AddDate,
    DeleteDate,
}

impl RangeField {
    /// Column name in the coils table.
    fn column(self) -> &'static str {
        match self {
            RangeField::Id => "id",
            RangeField::Length => "length",
            RangeField::Weight => "weight",
            RangeField::AddDate => "add_date",
            RangeField::DeleteDate => "delete_date",
        }
    }
}

/// One inclusive bound value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Date(NaiveDate),
}

impl ToSql for Bound {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Bound::Int(value) => value.to_sql(),
            Bound::Date(date) => date.to_sql(),
        }
    }
}

/// One inclusive range condition on a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePredicate {
    pub field: RangeField,
    pub min: Bound,
    pub max: Bound,
}

/// Conjunction of range predicates over the coils table
#[derive(Debug, Clone, Default)]
pub struct CoilFilter {
    predicates: Vec<RangePredicate>,
}

impl CoilFilter {
    /// Create an empty filter (matches all coils).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Builder method: id range, kept only when both bounds are present.
    pub fn id_range(self, min: Option<i64>, max: Option<i64>) -> Self {
        self.int_range(RangeField::Id, min, max)
    }

    /// Builder method: length range, kept only when both bounds are present.
    pub fn length_range(self, min: Option<i64>, max: Option<i64>) -> Self {
        self.int_range(RangeField::Length, min, max)
    }

    /// Builder method: weight range, kept only when both bounds are present.
    pub fn weight_range(self, min: Option<i64>, max: Option<i64>) -> Self {
        self.int_range(RangeField::Weight, min, max)
    }

    /// Builder method: add_date range, kept only when both bounds are present.
    pub fn add_date_range(self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.date_range(RangeField::AddDate, min, max)
    }

    /// Builder method: delete_date range, kept only when both bounds are present.
    pub fn delete_date_range(self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.date_range(RangeField::DeleteDate, min, max)
    }

    fn int_range(mut self, field: RangeField, min: Option<i64>, max: Option<i64>) -> Self {
        if let (Some(min), Some(max)) = (min, max) {
            self.predicates.push(RangePredicate {
                field,
                min: Bound::Int(min),
                max: Bound::Int(max),
            });
        }
        self
    }

    fn date_range(
        mut self,
        field: RangeField,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    ) -> Self {
        if let (Some(min), Some(max)) = (min, max) {
            self.predicates.push(RangePredicate {
                field,
                min: Bound::Date(min),
                max: Bound::Date(max),
            });
        }
        self
    }

    /// Fold the predicates into a `WHERE` fragment and its bound parameters.
    ///
    /// Returns an empty fragment for an empty filter.
    pub(crate) fn sql(&self) -> (String, Vec<Bound>) {
        if self.predicates.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut clauses = Vec::with_capacity(self.predicates.len());
        let mut params = Vec::with_capacity(self.predicates.len() * 2);

        for predicate in &self.predicates {
            let column = predicate.field.column();
            clauses.push(format!("{} >= ? AND {} <= ?", column, column));
            params.push(predicate.min);
            params.push(predicate.max);
        }

        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let (clause, params) = CoilFilter::new().sql();
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_partial_bounds_are_ignored() {
        let filter = CoilFilter::new()
            .weight_range(Some(10), None)
            .length_range(None, Some(100));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_full_pairs_become_conjunction() {
        let filter = CoilFilter::new()
            .id_range(Some(1), Some(10))
            .add_date_range(Some(date("2024-01-01")), Some(date("2024-01-31")));
        assert_eq!(filter.len(), 2);

        let (clause, params) = filter.sql();
        assert_eq!(
            clause,
            " WHERE id >= ? AND id <= ? AND add_date >= ? AND add_date <= ?"
        );
        assert_eq!(params.len(), 4);
        assert_eq!(params[0], Bound::Int(1));
        assert_eq!(params[2], Bound::Date(date("2024-01-01")));
    }
}
