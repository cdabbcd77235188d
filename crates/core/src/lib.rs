//! Core types for spanlog
//!
//! This crate defines the canonical data model shared by every other crate:
//! - [`Event`]: the only persisted entity (one span, log line, or metric sample)
//! - [`RawEvent`] / [`EventRecord`]: inbound and normalized-but-unstored forms
//! - Derived views: [`Timeline`], [`TraceSummary`], [`ServiceMetrics`],
//!   [`HealthSnapshot`], [`CleanupReport`]
//! - [`SpanlogError`] and [`SpanlogResult`]
//!
//! Nothing in here touches storage. The `spanlog-storage` crate defines the
//! store contract over these types and `spanlog-engine` computes the views.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod primitives;
pub mod types;

pub use error::{SpanlogError, SpanlogResult};
pub use primitives::{
    CleanupReport, Event, EventRecord, EventType, HealthSnapshot, HealthStatus, RawEvent,
    ServiceMetrics, ServiceStats, Status, Timeline, TimelineEntry, TracePage, TraceSummary,
};
pub use types::{EventId, PageRequest, Timestamp};
