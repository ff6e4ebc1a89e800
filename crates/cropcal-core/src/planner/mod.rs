//! High-level planner API for schedule computation and record storage.
//!
//! The [`Planner`] is the central coordinator: it holds the loaded plant
//! catalog and an injected [`RecordStore`], and exposes the selection
//! validation, schedule computation, and persistence operations. The
//! computation itself lives in pure functions over raw catalog rows
//! ([`validate_selection`], [`compute_schedule`]) so it can be exercised
//! without any catalog loading or storage in place.
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌─────────────────┐
//! │  CLI shell   │───▶│      Planner      │───▶│   RecordStore   │
//! │ (prompts,    │    │ (selection, date  │    │ (SQLite ledger  │
//! │  rendering)  │    │  arithmetic)      │    │  or CSV sheet)  │
//! └──────────────┘    └───────────────────┘    └─────────────────┘
//! ```
//!
//! The interactive re-prompt-until-valid loop belongs to the CLI shell; the
//! planner's operations either succeed or report one of the typed failure
//! conditions in [`crate::error::PlannerError`].

pub mod builder;
pub mod schedule_ops;
pub mod selection;
pub mod store_ops;


// Re-export the main entry points
pub use builder::PlannerBuilder;
pub use schedule_ops::{compute_schedule, parse_anchor_date};
pub use selection::validate_selection;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{DateType, Schedule};
use crate::params::PlanRequest;
use crate::store::RecordStore;

/// Main planner interface: selection validation, date scheduling, and
/// record storage over one loaded catalog.
pub struct Planner {
    catalog: Catalog,
    pub(super) store: Box<dyn RecordStore>,
}

impl Planner {
    /// Creates a planner over a loaded catalog and an injected record store.
    pub fn new(catalog: Catalog, store: Box<dyn RecordStore>) -> Self {
        Self { catalog, store }
    }

    /// The loaded plant catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates a comma-separated selection string against the catalog.
    /// See [`validate_selection`] for the validation policy.
    pub fn validate_selection(&self, raw_input: &str) -> Result<Vec<usize>> {
        validate_selection(self.catalog.rows(), raw_input)
    }

    /// Computes the schedule for already-validated indices and an anchor
    /// date in `YYYY-MM-DD` form.
    pub fn compute_schedule(
        &self,
        indices: &[usize],
        date_type: DateType,
        date_text: &str,
    ) -> Result<Schedule> {
        compute_schedule(self.catalog.rows(), indices, date_type, date_text)
    }

    /// Validates a selection string and computes its schedule in one step.
    pub fn plan(&self, request: &PlanRequest) -> Result<Schedule> {
        let indices = self.validate_selection(&request.selection)?;
        self.compute_schedule(&indices, request.date_type, &request.date)
    }
}
