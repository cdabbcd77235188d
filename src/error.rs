//! Unified error types for spanlog.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use spanlog_core::SpanlogError;
use thiserror::Error;

/// All spanlog errors.
///
/// This is the canonical error type for all facade operations.
/// Unknown traces and services are not errors; they produce empty results.
#[derive(Debug, Error)]
pub enum Error {
    /// A required event field is missing
    #[error("validation error: missing required field `{field}`")]
    Validation {
        /// Name of the missing field
        field: String,
    },

    /// Malformed input (unknown status name, bad range, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Event store failure
    #[error("storage error: {0}")]
    Storage(String),

    /// On-disk data failed an integrity check
    #[error("corruption: {0}")]
    Corruption(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be read or is inconsistent
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for spanlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a missing-field error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this error came from the event store.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Error::Storage(_) | Error::Corruption(_) | Error::Io(_) | Error::Serialization(_)
        )
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Corruption(_))
    }
}

// Convert from internal core errors
impl From<SpanlogError> for Error {
    fn from(e: SpanlogError) -> Self {
        match e {
            SpanlogError::Validation { field } => Error::Validation {
                field: field.to_string(),
            },
            SpanlogError::InvalidInput { message } => Error::InvalidInput(message),
            SpanlogError::Storage { message } => Error::Storage(message),
            SpanlogError::Io(io_err) => Error::Io(io_err),
            SpanlogError::Serialization { message } => Error::Serialization(message),
            SpanlogError::Corruption { message } => Error::Corruption(message),
        }
    }
}
