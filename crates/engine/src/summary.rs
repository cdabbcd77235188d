//! Trace summary builder
//!
//! ## Pagination
//!
//! The page is cut from the sorted distinct trace ids *before* filters run.
//! A page can therefore come back shorter than requested even when later
//! pages hold matching traces, and `total_matched` counts only the
//! survivors of this page. Callers wanting "N matches" must keep paging
//! until an unfiltered page comes back short.
//!
//! ## Filters
//!
//! Filters are ANDed, and each is satisfied independently: a trace passes if
//! some event matches the service, some (possibly other) event matches the
//! operation, and some event's status name equals the status filter.

use crate::assembler::millis_between;
use spanlog_core::{Event, PageRequest, SpanlogResult, Status, TracePage, TraceSummary};
use spanlog_storage::EventStore;
use std::sync::Arc;
use tracing::debug;

/// Optional content filters for [`TraceSummaryBuilder::list_traces`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceFilter {
    /// Exact service name
    pub service: Option<String>,
    /// Exact operation name
    pub operation: Option<String>,
    /// Canonical status name (`SUCCESS`, `ERROR`, `TIMEOUT`)
    pub status: Option<String>,
}

impl TraceFilter {
    /// No filtering
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an event from `service`
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Require an event for `operation`
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Require an event whose status name is `status`
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Check if no filter is active
    pub fn is_empty(&self) -> bool {
        self.service.is_none() && self.operation.is_none() && self.status.is_none()
    }

    fn matches(&self, events: &[Event]) -> bool {
        let wants = |filter: &Option<String>, field: fn(&Event) -> &str| match filter {
            Some(wanted) => events.iter().any(|e| field(e) == wanted.as_str()),
            None => true,
        };
        wants(&self.service, |e| e.service_name.as_str())
            && wants(&self.operation, |e| e.operation.as_str())
            && wants(&self.status, |e| e.status.as_str())
    }
}

/// Builds per-trace rollups for listing
#[derive(Clone)]
pub struct TraceSummaryBuilder {
    store: Arc<dyn EventStore>,
}

impl TraceSummaryBuilder {
    /// Create a builder reading from `store`
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// One page of trace summaries
    pub fn list_traces(&self, page: PageRequest, filter: &TraceFilter) -> SpanlogResult<TracePage> {
        let ids = self.store.distinct_trace_ids(page.offset(), page.size)?;
        let fetched = ids.len();

        let mut traces = Vec::with_capacity(fetched);
        for trace_id in ids {
            let events = self.store.find_by_trace(&trace_id)?;
            // A sweep can empty a trace between the two reads.
            if events.is_empty() || !filter.matches(&events) {
                continue;
            }
            traces.push(summarize(trace_id, &events));
        }

        debug!(
            page = page.page,
            size = page.size,
            fetched,
            matched = traces.len(),
            "Listed traces"
        );
        Ok(TracePage {
            total_matched: traces.len(),
            traces,
            page: page.page,
            size: page.size,
        })
    }
}

/// Roll up a non-empty, timestamp-ordered trace
fn summarize(trace_id: String, events: &[Event]) -> TraceSummary {
    let first = &events[0];
    let last = &events[events.len() - 1];

    let mut services: Vec<String> = Vec::new();
    let mut operations: Vec<String> = Vec::new();
    for event in events {
        if !services.contains(&event.service_name) {
            services.push(event.service_name.clone());
        }
        if !operations.contains(&event.operation) {
            operations.push(event.operation.clone());
        }
    }

    let status = if events.iter().any(|e| e.status == Status::Error) {
        Status::Error
    } else {
        Status::Success
    };

    TraceSummary {
        trace_id,
        start_time: first.timestamp,
        duration: millis_between(first.timestamp, last.timestamp),
        services,
        operations,
        span_count: events.len(),
        status,
    }
}
