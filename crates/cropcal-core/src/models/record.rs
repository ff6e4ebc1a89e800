//! Stored schedule records, keyed by owner email.

use serde::{Deserialize, Serialize};

use super::{DateType, ScheduleEntry};

/// A schedule entry tagged with the email it was saved under.
///
/// Records are append-only. Emails are not unique and never deduplicated;
/// retrieval matches the email by exact, case-sensitive string equality and
/// returns records in the order they were written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    /// Owner email the record is keyed by
    pub email: String,

    /// The saved schedule row
    pub entry: ScheduleEntry,
}

impl StoredRecord {
    /// Tags a schedule entry with its owner email.
    pub fn new(email: impl Into<String>, entry: ScheduleEntry) -> Self {
        Self {
            email: email.into(),
            entry,
        }
    }

    /// The record as ordered string fields, matching the ledger column
    /// layout: email, plant, date-type label, anchor date, corresponding
    /// date.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.email.clone(),
            self.entry.plant_name.clone(),
            self.entry.date_type.label().to_string(),
            self.entry.anchor_date.to_string(),
            self.entry.corresponding_date.to_string(),
        ]
    }

    /// Rebuilds a record from ledger row fields. Returns `None` when the
    /// date-type label or either date does not parse.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 5 {
            return None;
        }
        let date_type: DateType = row[2].parse().ok()?;
        let anchor_date = crate::planner::parse_anchor_date(&row[3]).ok()?;
        let corresponding_date = crate::planner::parse_anchor_date(&row[4]).ok()?;
        Some(Self {
            email: row[0].clone(),
            entry: ScheduleEntry {
                plant_name: row[1].clone(),
                date_type,
                anchor_date,
                corresponding_date,
            },
        })
    }
}
