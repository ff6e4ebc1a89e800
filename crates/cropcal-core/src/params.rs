//! Parameter structures for planner operations.
//!
//! These structures carry user input between the interface layer and the
//! core without framework-specific derives. The CLI defines its own clap
//! wrapper types and converts into these via `From`, keeping argument
//! parsing concerns out of the core.

use crate::models::DateType;

/// Parameters for a one-shot schedule computation.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Comma-separated catalog indices as entered by the user
    pub selection: String,

    /// Which date the user is supplying
    pub date_type: DateType,

    /// The anchor date in `YYYY-MM-DD` form
    pub date: String,
}
