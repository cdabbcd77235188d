//! Event ingestion and raw event queries.
//!
//! # Example
//!
//! ```ignore
//! use spanlog::prelude::*;
//!
//! let log = Spanlog::ephemeral()?;
//!
//! let stored = log.events.record(RawEvent::new("t1", "s1", "checkout", "pay"))?;
//! assert_eq!(stored.status, Status::Success);
//!
//! let failures = log.events.find_by_status(Status::Error)?;
//! ```

use crate::error::Result;
use crate::types::{Event, RawEvent, Status, Timestamp};
use spanlog_engine::TelemetryEngine;

/// Event operations.
///
/// Access via `db.events`.
pub struct Events {
    engine: TelemetryEngine,
}

impl Events {
    pub(crate) fn new(engine: TelemetryEngine) -> Self {
        Self { engine }
    }

    // =========================================================================
    // Ingestion
    // =========================================================================

    /// Normalize and store one event.
    ///
    /// Missing `timestamp`, `eventType` and `status` are defaulted; missing
    /// identity fields fail with [`Error::Validation`](crate::Error::Validation).
    pub fn record(&self, event: RawEvent) -> Result<Event> {
        self.engine.record(event).map_err(Into::into)
    }

    /// Store several events, or none if any fails validation.
    pub fn record_batch(&self, events: Vec<RawEvent>) -> Result<Vec<Event>> {
        self.engine.record_batch(events).map_err(Into::into)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every event with `status`.
    pub fn find_by_status(&self, status: Status) -> Result<Vec<Event>> {
        self.engine.find_by_status(status).map_err(Into::into)
    }

    /// Every event of one operation on one service.
    pub fn find_by_service_and_operation(
        &self,
        service_name: &str,
        operation: &str,
    ) -> Result<Vec<Event>> {
        self.engine
            .find_by_service_and_operation(service_name, operation)
            .map_err(Into::into)
    }

    /// Events with `start <= timestamp <= end`, oldest first.
    pub fn find_between(&self, start: Timestamp, end: Timestamp) -> Result<Vec<Event>> {
        self.engine.find_between(start, end).map_err(Into::into)
    }
}
