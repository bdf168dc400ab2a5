//! Error types for the care plan library.

use std::path::PathBuf;

use thiserror::Error;

/// Message surfaced to the user when the submit collaborator rejects a save.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to save care plan. Please try again.";

/// Comprehensive error type for all care plan operations.
#[derive(Error, Debug)]
pub enum CarePlanError {
    /// Local validation failed before anything left the editor
    #[error("{message}")]
    Validation { message: String },
    /// The submit collaborator rejected the payload
    #[error("{SUBMIT_FAILED_MESSAGE}")]
    SubmissionFailed {
        #[source]
        source: Box<CarePlanError>,
    },
    /// Phase index outside the program's phase list (reported 1-based)
    #[error("Phase {} does not exist", .index + 1)]
    PhaseNotFound { index: usize },
    /// Task index outside the phase's task list
    #[error("Task {} does not exist in phase {}", .task_index + 1, .phase_index + 1)]
    TaskNotFound {
        phase_index: usize,
        task_index: usize,
    },
    /// Stored care plan not found for the given ID
    #[error("Care plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Date arithmetic or parsing errors
    #[error("Date error: {source}")]
    Date {
        #[from]
        source: jiff::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CarePlanError {
        CarePlanError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CarePlanError {
        CarePlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CarePlanError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a validation error carrying a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Wraps a collaborator failure so only the generic message is shown.
    pub fn submission_failed(source: CarePlanError) -> Self {
        Self::SubmissionFailed {
            source: Box::new(source),
        }
    }

    /// Whether this error came from local validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CarePlanError::database(message).with_source(e))
    }
}

/// Result type alias for care plan operations
pub type Result<T> = std::result::Result<T, CarePlanError>;
