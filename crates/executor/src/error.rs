//! Executor errors
//!
//! Flattens [`SpanlogError`] into caller-facing categories, each with a
//! stable machine-readable code.

use serde::Serialize;
use spanlog_core::SpanlogError;
use thiserror::Error;

/// Executor result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`Executor::execute`](crate::Executor::execute)
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Error {
    /// A required event field is missing
    #[error("validation failed: missing required field `{field}`")]
    Validation {
        /// Name of the missing field
        field: String,
    },

    /// A command argument is malformed
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What is wrong
        reason: String,
    },

    /// The event store failed
    #[error("storage failure: {reason}")]
    Storage {
        /// Store-reported cause
        reason: String,
    },

    /// Stored data failed an integrity check
    #[error("corruption detected: {reason}")]
    Corruption {
        /// Where and how
        reason: String,
    },

    /// Anything that should not happen
    #[error("internal error: {reason}")]
    Internal {
        /// What happened
        reason: String,
    },
}

impl Error {
    /// Stable code for the error category
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "VALIDATION",
            Error::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Error::Storage { .. } => "STORAGE",
            Error::Corruption { .. } => "CORRUPTION",
            Error::Internal { .. } => "INTERNAL",
        }
    }
}

impl From<SpanlogError> for Error {
    fn from(err: SpanlogError) -> Self {
        match err {
            SpanlogError::Validation { field } => Error::Validation {
                field: field.to_string(),
            },
            SpanlogError::InvalidInput { message } => Error::InvalidArgument { reason: message },
            SpanlogError::Corruption { message } => Error::Corruption { reason: message },
            SpanlogError::Storage { .. }
            | SpanlogError::Io(_)
            | SpanlogError::Serialization { .. } => Error::Storage {
                reason: err.to_string(),
            },
        }
    }
}
