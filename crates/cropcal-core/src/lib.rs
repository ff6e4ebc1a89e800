//! Core library for the cropcal gardening planner.
//!
//! This crate provides the business logic for turning a plant catalog and a
//! user-supplied anchor date into a planting/harvest schedule: the plant
//! data model with growth-stage duration aggregation, the selection
//! validation that maps user-entered indices to catalog rows, the
//! bidirectional calendar-date arithmetic, and the append-only results
//! ledger keyed by email.
//!
//! The computation core is pure: [`planner::validate_selection`] and
//! [`planner::compute_schedule`] operate on raw catalog rows and either
//! succeed or report a typed failure for the caller to react to. I/O lives
//! at the edges, in the catalog loaders and the injected record store.
//!
//! # Quick Start
//!
//! ```rust
//! use cropcal_core::{compute_schedule, validate_selection, DateType};
//!
//! # fn example() -> cropcal_core::Result<()> {
//! let rows: Vec<Vec<String>> = [
//!     vec!["id", "Name", "Category", "Germination", "Seedling Stage",
//!          "Vegetative Growth", "Flowering/Root Development",
//!          "Fruit Development", "Description"],
//!     vec!["1", "Tomato", "Fruit Vegetable", "7", "14", "30", "0", "45", ""],
//! ]
//! .into_iter()
//! .map(|row| row.into_iter().map(String::from).collect())
//! .collect();
//!
//! let indices = validate_selection(&rows, "1")?;
//! let schedule = compute_schedule(&rows, &indices, DateType::Planting, "2024-03-01")?;
//!
//! // 96 days of total growth time after March 1st of a leap year
//! assert_eq!(schedule.entries[0].corresponding_date.to_string(), "2024-06-05");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use catalog::Catalog;
pub use db::Database;
pub use display::{CatalogTable, RecordList, ScheduleTable};
pub use error::{PlannerError, Result};
pub use models::{DateType, Plant, Schedule, ScheduleEntry, StoredRecord};
pub use params::PlanRequest;
pub use planner::{compute_schedule, parse_anchor_date, validate_selection, Planner, PlannerBuilder};
pub use store::{CsvLedger, RecordStore, LEDGER_HEADER};
