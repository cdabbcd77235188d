//! Trace views
//!
//! A trace has no record of its own: it is the set of events sharing a
//! `trace_id`. These types are the read-side projections built from that set.

use crate::primitives::event::{Event, Status};
use crate::types::Timestamp;
use serde::Serialize;

/// One event as shown in a timeline
///
/// Storage identifiers, correlation fields and metadata are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Span identifier
    pub span_id: String,
    /// Enclosing span
    pub parent_span_id: Option<String>,
    /// Producing service
    pub service_name: String,
    /// Unit of work
    pub operation: String,
    /// Occurrence time
    pub timestamp: Timestamp,
    /// Duration in milliseconds
    pub duration_ms: Option<i64>,
    /// Outcome
    pub status: Status,
    /// HTTP method
    pub http_method: Option<String>,
    /// HTTP URL
    pub http_url: Option<String>,
    /// HTTP response status
    pub http_status_code: Option<i32>,
    /// Error description
    pub error_message: Option<String>,
}

impl From<&Event> for TimelineEntry {
    fn from(event: &Event) -> Self {
        Self {
            span_id: event.span_id.clone(),
            parent_span_id: event.parent_span_id.clone(),
            service_name: event.service_name.clone(),
            operation: event.operation.clone(),
            timestamp: event.timestamp,
            duration_ms: event.duration_ms,
            status: event.status,
            http_method: event.http_method.clone(),
            http_url: event.http_url.clone(),
            http_status_code: event.http_status_code,
            error_message: event.error_message.clone(),
        }
    }
}

/// Chronological view of one trace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// The trace identifier that was requested
    pub trace_id: String,
    /// Events in timestamp order
    pub events: Vec<TimelineEntry>,
    /// Milliseconds between the first and last event (0 when empty)
    pub total_duration: i64,
    /// First event's timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    /// Last event's timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    /// Distinct service names among the events
    pub service_count: usize,
}

impl Timeline {
    /// Timeline of a trace with no events
    pub fn empty(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            events: Vec::new(),
            total_duration: 0,
            start_time: None,
            end_time: None,
            service_count: 0,
        }
    }

    /// Check if the trace had no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Per-trace rollup used by paginated listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceSummary {
    /// Trace identifier
    pub trace_id: String,
    /// First event's timestamp
    pub start_time: Timestamp,
    /// Milliseconds between the first and last event
    pub duration: i64,
    /// Distinct services, first-seen order
    pub services: Vec<String>,
    /// Distinct operations, first-seen order
    pub operations: Vec<String>,
    /// Number of events in the trace
    pub span_count: usize,
    /// `ERROR` if any event failed, `SUCCESS` otherwise
    pub status: Status,
}

/// One page of trace summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracePage {
    /// Summaries that survived filtering
    pub traces: Vec<TraceSummary>,
    /// Zero-based page index that was requested
    pub page: usize,
    /// Page size that was requested
    pub size: usize,
    /// Number of summaries on this page (not a global total)
    pub total_matched: usize,
}
