//! Ingestion path: normalize, then store

use crate::normalizer::Normalizer;
use spanlog_core::{Event, RawEvent, SpanlogResult};
use spanlog_storage::EventStore;
use std::sync::Arc;
use tracing::info;

/// Records inbound events
#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn EventStore>,
    normalizer: Normalizer,
}

impl Ingestor {
    /// Create an ingestor writing to `store`
    pub fn new(store: Arc<dyn EventStore>, normalizer: Normalizer) -> Self {
        Self { store, normalizer }
    }

    /// Normalize and store one event
    ///
    /// # Errors
    /// - `Validation` if a required field is missing (nothing is stored)
    /// - any store failure, unchanged
    pub fn record(&self, raw: RawEvent) -> SpanlogResult<Event> {
        let record = self.normalizer.normalize(raw)?;
        let event = self.store.insert(record)?;
        info!(
            service = %event.service_name,
            operation = %event.operation,
            trace_id = %event.trace_id,
            span_id = %event.span_id,
            parent_span_id = ?event.parent_span_id,
            duration_ms = ?event.duration_ms,
            status = %event.status,
            "Telemetry event recorded"
        );
        Ok(event)
    }

    /// Normalize and store a batch, returning events in input order
    ///
    /// Every record is normalized before anything is written, so one
    /// invalid record rejects the whole batch.
    pub fn record_batch(&self, raws: Vec<RawEvent>) -> SpanlogResult<Vec<Event>> {
        let records = self.normalizer.normalize_all(raws)?;
        let events = self.store.insert_batch(records)?;
        info!(count = events.len(), "Batch telemetry events recorded");
        Ok(events)
    }
}
