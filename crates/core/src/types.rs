//! Core scalar types
//!
//! - [`Timestamp`]: event occurrence time (UTC, millisecond semantics)
//! - [`EventId`]: system-assigned sequential identifier
//! - [`PageRequest`]: page index + page size addressing for listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event occurrence time.
pub type Timestamp = DateTime<Utc>;

/// Sequential identifier assigned by the event store on insert
///
/// Identifiers are strictly increasing in insertion order, which is what
/// breaks timestamp ties when ordering a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        EventId(id)
    }

    /// Raw identifier
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The identifier following this one
    pub const fn next(&self) -> Self {
        EventId(self.0 + 1)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        EventId(id)
    }
}

/// Page addressing for listings
///
/// Pages are zero-indexed; the item offset is `page * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: usize,
    /// Items per page
    pub size: usize,
}

impl PageRequest {
    /// Page size used when the caller does not supply one
    pub const DEFAULT_SIZE: usize = 20;

    /// Create a page request
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Offset of the first item on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}
