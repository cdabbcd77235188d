//! Event normalizer
//!
//! Turns a [`RawEvent`] into an [`EventRecord`]:
//!
//! | Field | When absent |
//! |-------|-------------|
//! | `timestamp` | current time |
//! | `eventType` | `SPAN` |
//! | `status` | `SUCCESS` |
//! | `traceId`, `spanId`, `serviceName`, `operation` | `Validation` error |
//!
//! Everything else passes through untouched, absent optionals included.
//! Presence is the only check: empty strings and negative durations are
//! accepted as supplied.

use crate::clock::Clock;
use spanlog_core::{EventRecord, RawEvent, SpanlogError, SpanlogResult};
use std::sync::Arc;

/// Fills defaults on inbound events
#[derive(Debug, Clone)]
pub struct Normalizer {
    clock: Arc<dyn Clock>,
}

impl Normalizer {
    /// Create a normalizer reading "now" from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Produce a storable record, or name the first missing required field
    pub fn normalize(&self, raw: RawEvent) -> SpanlogResult<EventRecord> {
        let trace_id = require(raw.trace_id, "traceId")?;
        let span_id = require(raw.span_id, "spanId")?;
        let service_name = require(raw.service_name, "serviceName")?;
        let operation = require(raw.operation, "operation")?;
        let timestamp = raw.timestamp.unwrap_or_else(|| self.clock.now());

        Ok(EventRecord {
            trace_id,
            span_id,
            parent_span_id: raw.parent_span_id,
            service_name,
            operation,
            event_type: raw.event_type.unwrap_or_default(),
            timestamp,
            duration_ms: raw.duration_ms,
            status: raw.status.unwrap_or_default(),
            metadata: raw.metadata,
            http_method: raw.http_method,
            http_url: raw.http_url,
            http_status_code: raw.http_status_code,
            error_message: raw.error_message,
            user_id: raw.user_id,
            correlation_id: raw.correlation_id,
        })
    }

    /// Normalize every record, failing on the first invalid one
    pub fn normalize_all(&self, raws: Vec<RawEvent>) -> SpanlogResult<Vec<EventRecord>> {
        raws.into_iter().map(|raw| self.normalize(raw)).collect()
    }
}

fn require(value: Option<String>, field: &'static str) -> SpanlogResult<String> {
    value.ok_or_else(|| SpanlogError::missing_field(field))
}
