//! Plant catalog: the ordered grid of raw rows the planner works over.
//!
//! The planner never fetches catalog data itself; it receives the grid from a
//! loader. Row 0 is a header of column labels and rows 1..N carry the fixed
//! nine-field plant layout. A builtin seed catalog ships embedded in the
//! crate, and an arbitrary CSV file with the same layout can be loaded in its
//! place.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::Plant;

/// Builtin seed catalog, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../assets/plant_list.csv");

/// An ordered grid of raw catalog rows, header row included at position 0.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<Vec<String>>,
}

impl Catalog {
    /// Wraps an already-loaded grid. The first row is treated as the header.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Loads the builtin seed catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_csv_reader(BUILTIN_CATALOG.as_bytes())
    }

    /// Loads a catalog from a CSV file with the builtin column layout.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_csv_reader(file)
    }

    /// Reads the full grid from CSV, keeping the header as row 0. Rows with
    /// fewer fields than the layout are kept as-is; plant construction pads
    /// them.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { rows })
    }

    /// The full grid, header row included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row, if the grid is non-empty.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// The data rows (everything after the header).
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.data_rows().len()
    }

    /// True when the catalog has no data rows.
    pub fn is_empty(&self) -> bool {
        self.data_rows().is_empty()
    }

    /// Builds the plant whose id field exactly equals `id`, if any.
    pub fn plant_by_id(&self, id: &str) -> Option<Plant> {
        self.data_rows()
            .iter()
            .find(|row| row.first().map(String::as_str) == Some(id))
            .map(|row| Plant::from_row(row))
    }

    /// Builds every plant in catalog order.
    pub fn plants(&self) -> Vec<Plant> {
        self.data_rows()
            .iter()
            .map(|row| Plant::from_row(row))
            .collect()
    }
}
