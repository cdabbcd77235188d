//! Trace assembler
//!
//! A trace is nothing more than the events sharing a trace id; the assembler
//! fetches them in timestamp order and derives the timeline view.

use spanlog_core::{Event, SpanlogResult, Timeline, TimelineEntry, Timestamp};
use spanlog_storage::EventStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Reconstructs traces from the store
#[derive(Clone)]
pub struct TraceAssembler {
    store: Arc<dyn EventStore>,
}

impl TraceAssembler {
    /// Create an assembler reading from `store`
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Events of `trace_id`, timestamp ascending; empty for an unknown trace
    pub fn get_trace(&self, trace_id: &str) -> SpanlogResult<Vec<Event>> {
        self.store.find_by_trace(trace_id)
    }

    /// Chronological projection of a trace
    ///
    /// An unknown trace yields an empty timeline with zero duration.
    pub fn get_timeline(&self, trace_id: &str) -> SpanlogResult<Timeline> {
        let events = self.get_trace(trace_id)?;
        let (first, last) = match (events.first(), events.last()) {
            (Some(first), Some(last)) => (first.timestamp, last.timestamp),
            _ => return Ok(Timeline::empty(trace_id)),
        };

        let service_count = events
            .iter()
            .map(|e| e.service_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        Ok(Timeline {
            trace_id: trace_id.to_string(),
            events: events.iter().map(TimelineEntry::from).collect(),
            total_duration: millis_between(first, last),
            start_time: Some(first),
            end_time: Some(last),
            service_count,
        })
    }
}

/// Whole milliseconds from `start` to `end`, truncated toward zero
pub(crate) fn millis_between(start: Timestamp, end: Timestamp) -> i64 {
    (end - start).num_milliseconds()
}
