//! Error types for Assay operations.

use thiserror::Error;

/// Main error type for Assay operations.
#[derive(Error, Debug)]
pub enum AssayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Analysis-related errors (input validation at the boundary).
///
/// The typed analyzer cannot fail; these arise only when a JSON-speaking
/// caller hands the boundary something that is not a string.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Expected a string value, got {got}")]
    TypeMismatch { got: &'static str },

    #[error("Value exceeds the configured limit: {size} bytes (max {max})")]
    ValueTooLarge { size: usize, max: usize },
}

/// Query-related errors (natural-language compilation).
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("No filter pattern recognized in sentence: {sentence:?}")]
    Unparseable { sentence: String },

    #[error("Sentence exceeds the configured limit: {size} bytes (max {max})")]
    SentenceTooLarge { size: usize, max: usize },
}

/// Storage-related errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;

impl AssayError {
    /// The identifier carried by a store-level conflict, if this is one.
    ///
    /// Callers redirect "already exists" to a read of the surviving record.
    pub fn conflicting_identifier(&self) -> Option<&str> {
        match self {
            AssayError::Storage(StorageError::Conflict(id)) => Some(id),
            _ => None,
        }
    }
}
