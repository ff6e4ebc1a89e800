//! The results-ledger collaborator boundary.
//!
//! Persistence is injected into the planner rather than reached through any
//! global state: the planner owns a [`RecordStore`] chosen and constructed by
//! the surrounding shell. The default store is the SQLite-backed
//! [`crate::db::Database`]; [`CsvLedger`] keeps the ledger as a plain
//! sheet-shaped CSV file instead.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FileResultExt, PlannerError, Result};
use crate::models::StoredRecord;

/// Column labels written ahead of the first data row of an empty ledger.
pub const LEDGER_HEADER: [&str; 5] = ["Email", "Plant", "Date Type", "Date", "Corresponding Date"];

/// Append-only storage for schedule records, keyed by owner email.
///
/// Implementations must preserve write order and match emails by exact,
/// case-sensitive string equality. Emails are not unique; nothing is
/// deduplicated.
pub trait RecordStore {
    /// Appends one record to the ledger.
    fn append(&mut self, record: &StoredRecord) -> Result<()>;

    /// Returns every record stored under `email`, in the order written.
    fn records_for_email(&self, email: &str) -> Result<Vec<StoredRecord>>;
}

/// A sheet-shaped file ledger: one CSV row per stored record.
///
/// On the first write to a missing or empty file the fixed
/// [`LEDGER_HEADER`] row is written ahead of the data rows. Rows carry the
/// ordered string fields email, plant, date-type label, anchor date,
/// corresponding date.
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Creates a ledger backed by the given file path. The file is created
    /// lazily on first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl RecordStore for CsvLedger {
    fn append(&mut self, record: &StoredRecord) -> Result<()> {
        let write_header = self.needs_header();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .file_context(&self.path)?;

        let mut writer = csv::Writer::from_writer(file);
        if write_header {
            writer.write_record(LEDGER_HEADER)?;
        }
        writer.write_record(record.to_row())?;
        writer.flush().file_context(&self.path)?;
        Ok(())
    }

    fn records_for_email(&self, email: &str) -> Result<Vec<StoredRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // A ledger that was never written to has no records
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PlannerError::FileSystem {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result?;
            let row: Vec<String> = raw.iter().map(str::to_string).collect();
            if row.first().map(String::as_str) != Some(email) {
                continue;
            }
            if let Some(record) = StoredRecord::from_row(&row) {
                records.push(record);
            }
        }
        Ok(records)
    }
}
