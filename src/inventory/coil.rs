//! Coil record types
//!
//! A coil is one physical roll of material. It carries two lifecycle dates:
//! `add_date` is stamped when the coil arrives, `delete_date` when it leaves.
//! A coil with `delete_date == None` is currently in inventory. Rows are
//! never hard-deleted and length/weight never change after creation.

use crate::inventory::error::{RepoError, RepoResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single tracked coil
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coil {
    /// Store-assigned id, immutable
    pub id: i64,
    /// Length in meters, positive
    pub length: i64,
    /// Weight in kilograms, positive
    pub weight: i64,
    /// Date the coil entered inventory
    pub add_date: NaiveDate,
    /// Date the coil left inventory; `None` while it is still present
    pub delete_date: Option<NaiveDate>,
}

impl Coil {
    /// Map a `SELECT id, length, weight, add_date, delete_date` row.
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            length: row.get(1)?,
            weight: row.get(2)?,
            add_date: row.get(3)?,
            delete_date: row.get(4)?,
        })
    }

    /// Seconds the coil spent in inventory, if it has been removed.
    ///
    /// Dates carry no time component, so the stay is a whole number of days
    /// expressed in seconds.
    pub fn stay_seconds(&self) -> Option<f64> {
        self.delete_date
            .map(|removed| (removed - self.add_date).num_days() as f64 * 86_400.0)
    }

    /// Whether the coil is still in inventory.
    pub fn in_inventory(&self) -> bool {
        self.delete_date.is_none()
    }
}

/// Payload for creating a coil; the store assigns id and add_date.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoilDraft {
    pub length: i64,
    pub weight: i64,
}

impl CoilDraft {
    /// Check field constraints. Runs before any store mutation.
    pub fn validate(&self) -> RepoResult<()> {
        if self.length <= 0 {
            return Err(RepoError::Validation(format!(
                "length must be positive, got {}",
                self.length
            )));
        }
        if self.weight <= 0 {
            return Err(RepoError::Validation(format!(
                "weight must be positive, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}
