//! Display formatting for catalog, schedule, and record output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while collections get newtype wrappers (see [`collections`]) so the same
//! data can be rendered as a menu, a result table, or a record listing. All
//! formatters produce markdown for the terminal renderer; plain-text
//! fallback is the renderer's concern, not the formatters'.

pub mod collections;
pub mod models;

// Re-export commonly used types for convenience
pub use collections::{CatalogTable, RecordList, ScheduleTable};
