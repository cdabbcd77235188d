//! Trace command handlers: fetch, timeline, list.

use spanlog_core::PageRequest;
use spanlog_engine::{TelemetryEngine, TraceFilter};

use crate::executor::ExecutorConfig;
use crate::{Error, Output, Result};

/// Handle GetTrace command.
pub fn get_trace(engine: &TelemetryEngine, trace_id: &str) -> Result<Output> {
    Ok(Output::Events(engine.get_trace(trace_id)?))
}

/// Handle GetTimeline command.
pub fn get_timeline(engine: &TelemetryEngine, trace_id: &str) -> Result<Output> {
    Ok(Output::Timeline(engine.get_timeline(trace_id)?))
}

/// Handle ListTraces command.
///
/// A missing size falls back to the configured default, an oversized one
/// is clamped, and zero is rejected.
pub fn list_traces(
    engine: &TelemetryEngine,
    config: &ExecutorConfig,
    page: Option<usize>,
    size: Option<usize>,
    filter: TraceFilter,
) -> Result<Output> {
    let size = size.unwrap_or(config.default_page_size);
    if size == 0 {
        return Err(Error::InvalidArgument {
            reason: "page size must be at least 1".into(),
        });
    }
    let request = PageRequest::new(page.unwrap_or(0), size.min(config.max_page_size));
    Ok(Output::TracePage(engine.list_traces(request, &filter)?))
}

/// Build a filter from optional transport parameters.
///
/// Values are compared verbatim; an unrecognised status name matches
/// nothing.
pub fn filter(
    service: Option<String>,
    operation: Option<String>,
    status: Option<String>,
) -> TraceFilter {
    TraceFilter {
        service,
        operation,
        status,
    }
}
