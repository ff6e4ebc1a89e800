//! Builder for creating and configuring Planner instances.

use std::fs;
use std::path::{Path, PathBuf};

use super::Planner;
use crate::{
    catalog::Catalog,
    db::Database,
    error::{PlannerError, Result},
    store::{CsvLedger, RecordStore},
};

/// Builder for creating and configuring Planner instances.
///
/// The builder chooses the catalog source (builtin seed catalog or a CSV
/// file) and the record store (SQLite database or a CSV sheet ledger), then
/// wires both into the planner. The caller owns these choices; the planner
/// itself never reaches for global state.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    catalog_path: Option<PathBuf>,
    database_path: Option<PathBuf>,
    ledger_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a CSV file to load the plant catalog from instead of the
    /// builtin seed catalog.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cropcal/cropcal.db` or
    /// `~/.local/share/cropcal/cropcal.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Stores results in a CSV sheet ledger at the given path instead of
    /// the SQLite database.
    pub fn with_ledger_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.ledger_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if a catalog or database path is
    /// invalid, `PlannerError::Csv` if the catalog file does not parse, and
    /// `PlannerError::Database` if database initialization fails.
    pub fn build(self) -> Result<Planner> {
        let catalog = match self.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };

        let store: Box<dyn RecordStore> = if let Some(path) = self.ledger_path {
            Box::new(CsvLedger::new(path))
        } else {
            let db_path = match self.database_path {
                Some(path) => path,
                None => Self::default_database_path()?,
            };
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            Box::new(Database::new(&db_path)?)
        };

        Ok(Planner::new(catalog, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cropcal")
            .place_data_file("cropcal.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
