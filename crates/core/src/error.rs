//! Error types for spanlog
//!
//! ## Taxonomy
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `Validation` | normalizer | A required field is absent on ingestion |
//! | `InvalidInput` | binding layer | A caller parameter could not be interpreted |
//! | `Storage` | event store | Store failure (connectivity, constraint) |
//! | `Io` | durable store | File system failure |
//! | `Serialization` | durable store | Encode/decode failure |
//! | `Corruption` | WAL recovery | Checksum mismatch in a whole log frame |
//!
//! Absence is never an error: unknown traces and services produce empty
//! results.

use thiserror::Error;

/// All errors raised by the spanlog crates.
#[derive(Debug, Error)]
pub enum SpanlogError {
    /// A required field was missing on an inbound event
    #[error("validation error: missing required field `{field}`")]
    Validation {
        /// Name of the missing field, in its wire (camelCase) spelling
        field: &'static str,
    },

    /// A caller-supplied parameter could not be interpreted
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong
        message: String,
    },

    /// Event store failure, propagated unchanged
    #[error("storage error: {message}")]
    Storage {
        /// Store-provided description
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {message}")]
    Serialization {
        /// Codec-provided description
        message: String,
    },

    /// Persisted data failed an integrity check
    #[error("corruption: {message}")]
    Corruption {
        /// Where and how the check failed
        message: String,
    },
}

impl SpanlogError {
    /// Missing required field
    pub fn missing_field(field: &'static str) -> Self {
        SpanlogError::Validation { field }
    }

    /// Uninterpretable caller parameter
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SpanlogError::InvalidInput {
            message: message.into(),
        }
    }

    /// Store failure
    pub fn storage(message: impl Into<String>) -> Self {
        SpanlogError::Storage {
            message: message.into(),
        }
    }

    /// Encode/decode failure
    pub fn serialization(message: impl Into<String>) -> Self {
        SpanlogError::Serialization {
            message: message.into(),
        }
    }

    /// Integrity failure
    pub fn corruption(message: impl Into<String>) -> Self {
        SpanlogError::Corruption {
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, SpanlogError::Validation { .. })
    }

    /// Check if this error came from the store or the file system beneath it
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SpanlogError::Storage { .. }
                | SpanlogError::Io(_)
                | SpanlogError::Serialization { .. }
                | SpanlogError::Corruption { .. }
        )
    }
}

impl From<serde_json::Error> for SpanlogError {
    fn from(e: serde_json::Error) -> Self {
        SpanlogError::serialization(e.to_string())
    }
}

/// Result type for spanlog operations
pub type SpanlogResult<T> = std::result::Result<T, SpanlogError>;
