//! Trace views.

use crate::error::Result;
use crate::types::{Event, PageRequest, Timeline, TraceFilter, TracePage};
use spanlog_engine::TelemetryEngine;

/// Trace operations.
///
/// Access via `db.traces`. An unknown trace id yields empty results.
pub struct Traces {
    engine: TelemetryEngine,
}

impl Traces {
    pub(crate) fn new(engine: TelemetryEngine) -> Self {
        Self { engine }
    }

    /// All events of a trace, oldest first.
    pub fn get(&self, trace_id: &str) -> Result<Vec<Event>> {
        self.engine.get_trace(trace_id).map_err(Into::into)
    }

    /// Per-span offsets from the trace's first event.
    pub fn timeline(&self, trace_id: &str) -> Result<Timeline> {
        self.engine.get_timeline(trace_id).map_err(Into::into)
    }

    /// One page of trace summaries.
    ///
    /// The page is cut from all trace ids before `filter` is applied, so a
    /// page can hold fewer than `page.size` summaries even when more
    /// matching traces exist.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = db.traces.list(PageRequest::new(0, 20), &TraceFilter::new().status("ERROR"))?;
    /// ```
    pub fn list(&self, page: PageRequest, filter: &TraceFilter) -> Result<TracePage> {
        self.engine.list_traces(page, filter).map_err(Into::into)
    }
}
