//! Service command handlers.

use spanlog_engine::TelemetryEngine;

use crate::{Output, Result};

/// Handle ListServices command.
pub fn list_services(engine: &TelemetryEngine) -> Result<Output> {
    Ok(Output::Names(engine.list_services()?))
}

/// Handle ListOperations command.
pub fn list_operations(engine: &TelemetryEngine, service_name: &str) -> Result<Output> {
    Ok(Output::Names(engine.list_operations(service_name)?))
}

/// Handle GetServiceMetrics command.
pub fn service_metrics(engine: &TelemetryEngine, service_name: &str) -> Result<Output> {
    Ok(Output::ServiceMetrics(engine.service_metrics(service_name)?))
}
