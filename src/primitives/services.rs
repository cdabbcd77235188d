//! Service listings and metrics.

use crate::error::Result;
use crate::types::ServiceMetrics;
use spanlog_engine::TelemetryEngine;

/// Service operations.
///
/// Access via `db.services`.
pub struct Services {
    engine: TelemetryEngine,
}

impl Services {
    pub(crate) fn new(engine: TelemetryEngine) -> Self {
        Self { engine }
    }

    /// Distinct service names.
    pub fn list(&self) -> Result<Vec<String>> {
        self.engine.list_services().map_err(Into::into)
    }

    /// Distinct operations seen on `service_name`.
    pub fn operations(&self, service_name: &str) -> Result<Vec<String>> {
        self.engine.list_operations(service_name).map_err(Into::into)
    }

    /// Request count, error rate, average duration and per-operation counts.
    ///
    /// A service with no events reports all zeros.
    pub fn metrics(&self, service_name: &str) -> Result<ServiceMetrics> {
        self.engine.service_metrics(service_name).map_err(Into::into)
    }
}
