//! Ingestion command handlers.

use spanlog_core::RawEvent;
use spanlog_engine::TelemetryEngine;

use crate::{Output, Result};

/// Handle RecordEvent command.
pub fn record_event(engine: &TelemetryEngine, event: RawEvent) -> Result<Output> {
    Ok(Output::Event(engine.record(event)?))
}

/// Handle RecordEventsBatch command.
pub fn record_events_batch(engine: &TelemetryEngine, events: Vec<RawEvent>) -> Result<Output> {
    Ok(Output::Events(engine.record_batch(events)?))
}
