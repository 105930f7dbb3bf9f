//! Error types for the balance library.
//!
//! Only infrastructure failures are errors. A blocked wizard step or an
//! unreadable persisted blob is a normal outcome and is reported through
//! return values instead.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store access and front-end driven operations.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// Key-value store read or write errors
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Schedule not found for the given ID
    #[error("Schedule with ID {id} not found")]
    ScheduleNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating store errors with optional context.
pub struct StoreErrorBuilder {
    message: String,
}

impl StoreErrorBuilder {
    /// Create a new store error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BalanceError {
        BalanceError::Store {
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
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BalanceError {
        BalanceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BalanceError {
    /// Creates a builder for store errors.
    pub fn store(message: impl Into<String>) -> StoreErrorBuilder {
        StoreErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for mapping `rusqlite` results into store errors.
pub trait StoreResultExt<T> {
    /// Map store errors with a message.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BalanceError::store(message).with_source(e))
    }
}

/// Result type alias for balance operations
pub type Result<T> = std::result::Result<T, BalanceError>;
