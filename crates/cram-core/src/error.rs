//! Error types for the study planner library.

use std::path::PathBuf;

use thiserror::Error;

/// User-facing message for every failed generation attempt.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate study plan. The model may be \
     unable to create a plan for the given topic or duration. Please try a different input.";

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The generation provider failed or produced an unusable plan
    #[error("{message}")]
    GenerationFailed { message: String },
    /// A user-supplied plan file could not be imported
    #[error(transparent)]
    Import(#[from] ImportError),
    /// The operation was abandoned through its cancellation token.
    ///
    /// Not a failure: callers discard it without surfacing an error.
    #[error("Operation cancelled")]
    Cancelled,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Structural validation failure for an untrusted plan document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or has the wrong type
    #[error("Malformed plan at '{path}': {reason}")]
    MalformedPlan { path: String, reason: String },
}

/// Failures while importing a plan file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The bytes are not UTF-8 text or not JSON
    #[error("Could not read the plan file: {reason}")]
    ParseFailure { reason: String },
    /// The document is JSON but not a study plan
    #[error("The file is not a valid study plan: {0}")]
    SchemaFailure(#[source] ValidationError),
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates the single user-facing generation failure.
    pub fn generation_failed() -> Self {
        PlannerError::GenerationFailed {
            message: GENERATION_FAILED_MESSAGE.to_string(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        PlannerError::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this is the cancellation marker rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlannerError::Cancelled)
    }
}

impl ValidationError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::MalformedPlan {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for ImportError {
    fn from(err: ValidationError) -> Self {
        ImportError::SchemaFailure(err)
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
