//! Repository operations over the coils table
//!
//! Each operation borrows one scoped connection and runs a single query (or a
//! read-then-update pair for the soft delete). Mutations are a single atomic
//! insert or single-row update; there are no partial writes.

use crate::inventory::coil::{Coil, CoilDraft};
use crate::inventory::error::{RepoError, RepoResult};
use crate::inventory::filter::CoilFilter;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const COIL_COLUMNS: &str = "id, length, weight, add_date, delete_date";

/// Insert a new coil stamped with `today`. Returns the assigned id.
///
/// Validation runs before the store is touched.
pub fn create(conn: &Connection, draft: &CoilDraft, today: NaiveDate) -> RepoResult<i64> {
    draft.validate()?;

    conn.execute(
        "INSERT INTO coils (length, weight, add_date) VALUES (?, ?, ?)",
        params![draft.length, draft.weight, today],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Point lookup by id.
pub fn get(conn: &Connection, id: i64) -> RepoResult<Coil> {
    let sql = format!("SELECT {} FROM coils WHERE id = ?", COIL_COLUMNS);

    conn.query_row(&sql, params![id], Coil::from_row)
        .optional()?
        .ok_or(RepoError::NotFound(id))
}

/// Range-filtered search. An empty filter returns all coils, ordered by id.
///
/// An empty result is an empty vector, never an error; callers decide
/// whether empty means "not found".
pub fn filter(conn: &Connection, filter: &CoilFilter) -> RepoResult<Vec<Coil>> {
    let (clause, bounds) = filter.sql();
    let sql = format!(
        "SELECT {} FROM coils{} ORDER BY id",
        COIL_COLUMNS, clause
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(bounds.iter()), Coil::from_row)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(RepoError::from)
}

/// Stamp `delete_date = today` on a coil that is still in inventory.
///
/// Deleting an already-removed coil is a no-op that returns the original
/// removal date. Under a concurrent double delete the first committed write
/// wins; both callers see a success.
pub fn soft_delete(conn: &Connection, id: i64, today: NaiveDate) -> RepoResult<NaiveDate> {
    let existing = get(conn, id)?;

    if let Some(removed) = existing.delete_date {
        return Ok(removed);
    }

    conn.execute(
        "UPDATE coils SET delete_date = ? WHERE id = ? AND delete_date IS NULL",
        params![today, id],
    )?;

    // Re-read rather than assume: a concurrent delete may have landed first.
    let coil = get(conn, id)?;
    Ok(coil.delete_date.unwrap_or(today))
}

/// Count coils whose `add_date` falls in `[start, end]`.
pub fn count_added(conn: &Connection, start: NaiveDate, end: NaiveDate) -> RepoResult<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM coils WHERE add_date >= ? AND add_date <= ?",
        params![start, end],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Count coils whose `delete_date` is set and falls in `[start, end]`.
pub fn count_deleted(conn: &Connection, start: NaiveDate, end: NaiveDate) -> RepoResult<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM coils \
         WHERE delete_date IS NOT NULL AND delete_date >= ? AND delete_date <= ?",
        params![start, end],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Coils considered present at some point during `[start, end]`.
///
/// The predicate is asymmetric on purpose: a never-deleted coil added before
/// the interval is out of scope even though it sits in inventory, because
/// `delete_date IS NULL` makes the first disjunct unknown under SQL
/// three-valued logic. Every downstream aggregate is computed over exactly
/// this set, so the shape must not be "corrected" in isolation; see
/// DESIGN.md.
pub fn eligible_in_interval(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<Coil>> {
    let sql = format!(
        "SELECT {} FROM coils \
         WHERE (NOT (delete_date < ?1 AND add_date < ?2)) \
            OR (delete_date IS NULL AND add_date >= ?1 AND add_date <= ?2) \
         ORDER BY id",
        COIL_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![start, end], Coil::from_row)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(RepoError::from)
}

/// Coils whose `add_date` falls in `[start, end]`, for per-day grouping.
pub fn added_in_interval(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<Coil>> {
    let sql = format!(
        "SELECT {} FROM coils WHERE add_date >= ? AND add_date <= ? ORDER BY id",
        COIL_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![start, end], Coil::from_row)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(RepoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_store() -> (Store, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("coilyard.db")).unwrap();
        (store, dir)
    }

    /// Insert a row with explicit dates, bypassing the today-stamp.
    fn seed(
        conn: &Connection,
        length: i64,
        weight: i64,
        add_date: &str,
        delete_date: Option<&str>,
    ) -> i64 {
        conn.execute(
            "INSERT INTO coils (length, weight, add_date, delete_date) VALUES (?, ?, ?, ?)",
            params![length, weight, date(add_date), delete_date.map(date)],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    #[test]
    fn test_create_and_get() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let today = date("2024-03-15");

        let id = create(&conn, &CoilDraft { length: 100, weight: 50 }, today).unwrap();
        let coil = get(&conn, id).unwrap();

        assert_eq!(coil.length, 100);
        assert_eq!(coil.weight, 50);
        assert_eq!(coil.add_date, today);
        assert_eq!(coil.delete_date, None);
    }

    #[test]
    fn test_create_rejects_invalid_fields_before_writing() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let today = date("2024-03-15");

        let err = create(&conn, &CoilDraft { length: 0, weight: 50 }, today).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = create(&conn, &CoilDraft { length: -5, weight: 10 }, today).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM coils", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();

        assert!(matches!(get(&conn, 42), Err(RepoError::NotFound(42))));
    }

    #[test]
    fn test_filter_with_partial_bounds_matches_everything() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2024-01-01", None);
        seed(&conn, 8, 20, "2024-01-02", None);

        // only a lower weight bound: the weight field is ignored entirely
        let partial = CoilFilter::new().weight_range(Some(15), None);
        let all = CoilFilter::new();

        let got = filter(&conn, &partial).unwrap();
        let expected = filter(&conn, &all).unwrap();
        assert_eq!(got, expected);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_filter_conjunction_narrows_results() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2024-01-01", None);
        seed(&conn, 8, 20, "2024-01-02", Some("2024-01-10"));
        seed(&conn, 9, 30, "2024-02-01", None);

        let by_weight = CoilFilter::new().weight_range(Some(15), Some(35));
        assert_eq!(filter(&conn, &by_weight).unwrap().len(), 2);

        let by_weight_and_date = CoilFilter::new()
            .weight_range(Some(15), Some(35))
            .add_date_range(Some(date("2024-01-01")), Some(date("2024-01-31")));
        let got = filter(&conn, &by_weight_and_date).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].weight, 20);
    }

    #[test]
    fn test_filter_on_delete_date_skips_live_coils() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2024-01-01", None);
        seed(&conn, 8, 20, "2024-01-02", Some("2024-01-10"));

        let removed = CoilFilter::new()
            .delete_date_range(Some(date("2024-01-01")), Some(date("2024-01-31")));
        let got = filter(&conn, &removed).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].delete_date, Some(date("2024-01-10")));
    }

    #[test]
    fn test_soft_delete_stamps_today() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let id = seed(&conn, 5, 10, "2024-01-01", None);

        let removed = soft_delete(&conn, id, date("2024-02-01")).unwrap();
        assert_eq!(removed, date("2024-02-01"));

        let coil = get(&conn, id).unwrap();
        assert_eq!(coil.delete_date, Some(date("2024-02-01")));
    }

    #[test]
    fn test_soft_delete_twice_keeps_original_date() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let id = seed(&conn, 5, 10, "2024-01-01", None);

        soft_delete(&conn, id, date("2024-02-01")).unwrap();
        let second = soft_delete(&conn, id, date("2024-03-01")).unwrap();

        assert_eq!(second, date("2024-02-01"));
        assert_eq!(get(&conn, id).unwrap().delete_date, Some(date("2024-02-01")));
    }

    #[test]
    fn test_soft_delete_missing_is_not_found() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();

        let err = soft_delete(&conn, 99, date("2024-02-01")).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(99)));
    }

    #[test]
    fn test_store_accepts_inverted_lifecycle_dates() {
        // The store does not police delete_date >= add_date. Dates written
        // through the repository hold the invariant (both stamps are "today"
        // or later); rows seeded out-of-band are taken as-is.
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let id = seed(&conn, 5, 10, "2024-02-01", Some("2024-01-01"));

        let coil = get(&conn, id).unwrap();
        assert_eq!(coil.delete_date, Some(date("2024-01-01")));
    }

    #[test]
    fn test_interval_counts() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2024-01-01", None);
        seed(&conn, 8, 20, "2024-01-02", Some("2024-01-10"));
        seed(&conn, 9, 30, "2024-02-01", Some("2024-02-05"));

        let start = date("2024-01-01");
        let end = date("2024-01-31");
        assert_eq!(count_added(&conn, start, end).unwrap(), 2);
        assert_eq!(count_deleted(&conn, start, end).unwrap(), 1);

        let feb = date("2024-02-01");
        let feb_end = date("2024-02-29");
        assert_eq!(count_added(&conn, feb, feb_end).unwrap(), 1);
        assert_eq!(count_deleted(&conn, feb, feb_end).unwrap(), 1);
    }

    #[test]
    fn test_eligibility_includes_live_coils_added_in_window() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        let a = seed(&conn, 5, 10, "2024-01-01", None);
        let b = seed(&conn, 8, 20, "2024-01-02", Some("2024-01-10"));

        let eligible =
            eligible_in_interval(&conn, date("2024-01-01"), date("2024-01-05")).unwrap();
        let ids: Vec<i64> = eligible.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_eligibility_excludes_live_coil_added_before_window() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        // Still in inventory, but its add_date precedes the window: the NULL
        // delete_date leaves the first disjunct unknown, and the second
        // requires add_date inside the window.
        seed(&conn, 5, 10, "2023-12-01", None);

        let eligible =
            eligible_in_interval(&conn, date("2024-01-01"), date("2024-01-31")).unwrap();
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_eligibility_excludes_coil_removed_before_window() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2023-12-01", Some("2023-12-15"));

        let eligible =
            eligible_in_interval(&conn, date("2024-01-01"), date("2024-01-31")).unwrap();
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_eligibility_includes_coil_removed_inside_window() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2023-12-01", Some("2024-01-10"));

        let eligible =
            eligible_in_interval(&conn, date("2024-01-01"), date("2024-01-31")).unwrap();
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_added_in_interval_bounds_are_inclusive() {
        let (store, _dir) = test_store();
        let conn = store.conn().unwrap();
        seed(&conn, 5, 10, "2024-01-01", None);
        seed(&conn, 8, 20, "2024-01-31", None);
        seed(&conn, 9, 30, "2024-02-01", None);

        let added = added_in_interval(&conn, date("2024-01-01"), date("2024-01-31")).unwrap();
        assert_eq!(added.len(), 2);
    }
}
