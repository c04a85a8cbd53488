//! Error types for slopewatch.
//!
//! Callers see two kinds of failure: validation errors naming the offending
//! field, and storage errors that only say which operation failed. The
//! remaining variants belong to the configuration and CLI layers.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// The main error type for slopewatch operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A reading was rejected before it reached storage.
    #[error("invalid reading: {0}")]
    Validation(#[from] ValidationError),

    /// The key-value store failed, or returned something we could not decode.
    #[error("{operation} failed: {message}")]
    Storage {
        /// The record operation that failed (`append`, `list`, ...).
        operation: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for slopewatch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a storage error for the named operation.
    #[must_use]
    pub fn storage(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Storage {
            operation,
            message: message.into(),
        }
    }

    /// Check if this error rejected user input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the underlying store.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// The validation failure carried by this error, if any.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
