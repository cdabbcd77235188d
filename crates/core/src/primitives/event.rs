//! Event types
//!
//! An event moves through three shapes:
//!
//! ```text
//! RawEvent --normalize--> EventRecord --EventStore::insert--> Event
//! (caller)                (defaults)                          (id assigned)
//! ```
//!
//! Only [`Event`] is ever read back. Events are immutable once stored; the
//! only way one disappears is the retention sweep.

use crate::types::{EventId, Timestamp};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of telemetry record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// A unit of work with a duration
    #[default]
    Span,
    /// A log line attached to a span
    Log,
    /// A metric sample attached to a span
    Metric,
}

impl EventType {
    /// Canonical name (`SPAN`, `LOG`, `METRIC`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Span => "SPAN",
            EventType::Log => "LOG",
            EventType::Metric => "METRIC",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = crate::SpanlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPAN" => Ok(EventType::Span),
            "LOG" => Ok(EventType::Log),
            "METRIC" => Ok(EventType::Metric),
            other => Err(crate::SpanlogError::invalid_input(format!(
                "unknown event type `{}` (expected SPAN, LOG or METRIC)",
                other
            ))),
        }
    }
}

/// Outcome of the unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Completed normally
    #[default]
    Success,
    /// Failed
    Error,
    /// Gave up waiting
    Timeout,
}

impl Status {
    /// Canonical name (`SUCCESS`, `ERROR`, `TIMEOUT`)
    ///
    /// Listing filters compare against this string exactly.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
            Status::Timeout => "TIMEOUT",
        }
    }

    /// Check if this is the error status
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::SpanlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Status::Success),
            "ERROR" => Ok(Status::Error),
            "TIMEOUT" => Ok(Status::Timeout),
            other => Err(crate::SpanlogError::invalid_input(format!(
                "unknown status `{}` (expected SUCCESS, ERROR or TIMEOUT)",
                other
            ))),
        }
    }
}

/// An inbound event exactly as a caller supplied it
///
/// Every field is optional here; the normalizer fills defaults and rejects
/// records missing a required field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEvent {
    /// Trace the event belongs to (required)
    pub trace_id: Option<String>,
    /// Span identifier (required)
    pub span_id: Option<String>,
    /// Enclosing span
    pub parent_span_id: Option<String>,
    /// Producing service (required)
    pub service_name: Option<String>,
    /// Unit of work (required)
    pub operation: Option<String>,
    /// Defaults to `SPAN`
    pub event_type: Option<EventType>,
    /// Defaults to ingestion time
    pub timestamp: Option<Timestamp>,
    /// Duration in milliseconds, not validated
    pub duration_ms: Option<i64>,
    /// Defaults to `SUCCESS`
    pub status: Option<Status>,
    /// Opaque payload
    pub metadata: Option<String>,
    /// HTTP method
    pub http_method: Option<String>,
    /// HTTP URL
    pub http_url: Option<String>,
    /// HTTP response status
    pub http_status_code: Option<i32>,
    /// Error description
    pub error_message: Option<String>,
    /// Correlated user
    pub user_id: Option<String>,
    /// Cross-system correlation id
    pub correlation_id: Option<String>,
}

impl RawEvent {
    /// Raw event carrying the four identifying fields and nothing else
    pub fn new(
        trace_id: impl Into<String>,
        span_id: impl Into<String>,
        service_name: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            trace_id: Some(trace_id.into()),
            span_id: Some(span_id.into()),
            service_name: Some(service_name.into()),
            operation: Some(operation.into()),
            ..Default::default()
        }
    }
}

/// A normalized event ready for storage (no identifier yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Trace the event belongs to
    pub trace_id: String,
    /// Span identifier, unique within the trace
    pub span_id: String,
    /// Enclosing span (lookup key only, never dereferenced)
    pub parent_span_id: Option<String>,
    /// Producing service
    pub service_name: String,
    /// Unit of work
    pub operation: String,
    /// Kind of record
    pub event_type: EventType,
    /// Occurrence time
    pub timestamp: Timestamp,
    /// Duration in milliseconds
    pub duration_ms: Option<i64>,
    /// Outcome
    pub status: Status,
    /// Opaque payload
    pub metadata: Option<String>,
    /// HTTP method
    pub http_method: Option<String>,
    /// HTTP URL
    pub http_url: Option<String>,
    /// HTTP response status
    pub http_status_code: Option<i32>,
    /// Error description
    pub error_message: Option<String>,
    /// Correlated user
    pub user_id: Option<String>,
    /// Cross-system correlation id
    pub correlation_id: Option<String>,
}

impl EventRecord {
    /// Record with the required fields set and every default applied
    pub fn new(
        trace_id: impl Into<String>,
        span_id: impl Into<String>,
        service_name: impl Into<String>,
        operation: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_span_id: None,
            service_name: service_name.into(),
            operation: operation.into(),
            event_type: EventType::default(),
            timestamp,
            duration_ms: None,
            status: Status::default(),
            metadata: None,
            http_method: None,
            http_url: None,
            http_status_code: None,
            error_message: None,
            user_id: None,
            correlation_id: None,
        }
    }

    /// Set the parent span
    pub fn with_parent(mut self, parent_span_id: impl Into<String>) -> Self {
        self.parent_span_id = Some(parent_span_id.into());
        self
    }

    /// Set the duration
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the event type
    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Attach HTTP context
    pub fn with_http(
        mut self,
        method: impl Into<String>,
        url: impl Into<String>,
        status_code: i32,
    ) -> Self {
        self.http_method = Some(method.into());
        self.http_url = Some(url.into());
        self.http_status_code = Some(status_code);
        self
    }

    /// Stamp the record with its store identifier
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            trace_id: self.trace_id,
            span_id: self.span_id,
            parent_span_id: self.parent_span_id,
            service_name: self.service_name,
            operation: self.operation,
            event_type: self.event_type,
            timestamp: self.timestamp,
            duration_ms: self.duration_ms,
            status: self.status,
            metadata: self.metadata,
            http_method: self.http_method,
            http_url: self.http_url,
            http_status_code: self.http_status_code,
            error_message: self.error_message,
            user_id: self.user_id,
            correlation_id: self.correlation_id,
        }
    }
}

/// A stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned sequential identifier
    pub id: EventId,
    /// Trace the event belongs to
    pub trace_id: String,
    /// Span identifier, unique within the trace
    pub span_id: String,
    /// Enclosing span
    pub parent_span_id: Option<String>,
    /// Producing service
    pub service_name: String,
    /// Unit of work
    pub operation: String,
    /// Kind of record
    pub event_type: EventType,
    /// Occurrence time
    pub timestamp: Timestamp,
    /// Duration in milliseconds
    pub duration_ms: Option<i64>,
    /// Outcome
    pub status: Status,
    /// Opaque payload
    pub metadata: Option<String>,
    /// HTTP method
    pub http_method: Option<String>,
    /// HTTP URL
    pub http_url: Option<String>,
    /// HTTP response status
    pub http_status_code: Option<i32>,
    /// Error description
    pub error_message: Option<String>,
    /// Correlated user
    pub user_id: Option<String>,
    /// Cross-system correlation id
    pub correlation_id: Option<String>,
}
