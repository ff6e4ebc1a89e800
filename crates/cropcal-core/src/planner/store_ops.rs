//! Persistence operations for the Planner.

use super::Planner;
use crate::error::Result;
use crate::models::{Schedule, StoredRecord};

impl Planner {
    /// Stores every entry of a computed schedule under the given email, in
    /// entry order. Returns the number of records written.
    pub fn store_results(&mut self, email: &str, schedule: &Schedule) -> Result<usize> {
        for entry in &schedule.entries {
            let record = StoredRecord::new(email, entry.clone());
            self.store.append(&record)?;
        }
        Ok(schedule.entries.len())
    }

    /// Retrieves every stored record for an email, in the order written.
    /// Matching is exact and case-sensitive.
    pub fn records_for(&self, email: &str) -> Result<Vec<StoredRecord>> {
        self.store.records_for_email(email)
    }
}
