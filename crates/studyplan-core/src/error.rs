//! Error types for studyplan operations.

use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

/// Every failure a planner operation can report.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A file the caller pointed at does not exist
    #[error("Missing input: {what}")]
    MissingInput { what: String },
    /// Minutes cannot be spread over a non-positive number of days
    #[error("Cannot distribute minutes over {num_days} days")]
    Division { num_days: i64 },
    /// A value was rejected before anything was written
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Stored or imported JSON that does not decode into the expected record
    #[error("Malformed data in '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Reading, writing or renaming a data file failed
    #[error("Cannot access '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No default data directory could be created
    #[error("Cannot determine data directory: {0}")]
    XdgDirectory(String),
    /// Encoding a record as JSON failed
    #[error("Cannot encode record: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Date arithmetic that leaves the supported calendar range
    #[error("Date out of range: {source}")]
    DateRange {
        #[from]
        source: jiff::Error,
    },
    /// A blocking file task panicked or was cancelled
    #[error("Background task failed: {source}")]
    TaskJoin {
        #[from]
        source: JoinError,
    },
}

/// Builds [`PlannerError::Validation`] for one field.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Finish the error with a human readable reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Start a validation error for `field`.
    ///
    /// ```rust
    /// use studyplan_core::PlannerError;
    ///
    /// let err = PlannerError::validation("status").with_reason("unknown value");
    /// assert_eq!(err.to_string(), "Invalid value for 'status': unknown value");
    /// ```
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
