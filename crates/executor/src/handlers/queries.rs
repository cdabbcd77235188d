//! Auxiliary query handlers.

use spanlog_core::{Status, Timestamp};
use spanlog_engine::TelemetryEngine;

use crate::{Error, Output, Result};

/// Handle FindByStatus command.
pub fn find_by_status(engine: &TelemetryEngine, status: Status) -> Result<Output> {
    Ok(Output::Events(engine.find_by_status(status)?))
}

/// Handle FindByServiceAndOperation command.
pub fn find_by_service_and_operation(
    engine: &TelemetryEngine,
    service_name: &str,
    operation: &str,
) -> Result<Output> {
    Ok(Output::Events(
        engine.find_by_service_and_operation(service_name, operation)?,
    ))
}

/// Handle FindBetween command.
///
/// A reversed range is an argument error rather than an empty result.
pub fn find_between(engine: &TelemetryEngine, start: Timestamp, end: Timestamp) -> Result<Output> {
    if start > end {
        return Err(Error::InvalidArgument {
            reason: format!("range start {} is after end {}", start, end),
        });
    }
    Ok(Output::Events(engine.find_between(start, end)?))
}
