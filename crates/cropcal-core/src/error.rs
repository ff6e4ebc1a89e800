//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
///
/// Selection and date errors are batch-level rejections: the caller is
/// expected to re-collect the whole input string, never to retry a single
/// token. Malformed growth-stage durations are not represented here at all;
/// they are absorbed during catalog row parsing and the field becomes absent.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A selection token could not be parsed as an integer
    #[error("Invalid number: '{token}' is not a valid plant index")]
    SelectionFormat { token: String },
    /// A selection index was negative
    #[error("Invalid index: {index} must be positive")]
    SelectionNegative { index: i64 },
    /// A selection index was outside the catalog bounds
    #[error("Index {index} is out of range for the plant catalog")]
    SelectionRange { index: i64 },
    /// An anchor date did not match the YYYY-MM-DD format
    #[error("Invalid date format: '{input}' (expected YYYY-MM-DD)")]
    DateFormat { input: String },
    /// Date arithmetic left the representable calendar range
    #[error("Date {date} plus {days} days is outside the supported calendar range")]
    DateOutOfRange { date: String, days: i64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// CSV read/write errors from the catalog or ledger boundary
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

impl PlannerError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// True for the recoverable input errors that an interactive caller
    /// handles by re-prompting for the whole input string.
    pub fn is_reprompt(&self) -> bool {
        matches!(
            self,
            Self::SelectionFormat { .. }
                | Self::SelectionNegative { .. }
                | Self::SelectionRange { .. }
                | Self::DateFormat { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database_error(message, e))
    }
}

/// Extension trait for mapping I/O errors with the path they occurred at.
pub trait FileResultExt<T> {
    /// Map an I/O error to a `FileSystem` error carrying the path.
    fn file_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn file_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
