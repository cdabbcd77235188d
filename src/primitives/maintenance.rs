//! Health and retention.

use crate::error::Result;
use crate::types::{CleanupReport, HealthSnapshot};
use spanlog_engine::TelemetryEngine;

/// Maintenance operations.
///
/// Access via `db.maintenance`.
pub struct Maintenance {
    engine: TelemetryEngine,
    default_older_than_days: i64,
}

impl Maintenance {
    pub(crate) fn new(engine: TelemetryEngine, default_older_than_days: i64) -> Self {
        Self {
            engine,
            default_older_than_days,
        }
    }

    /// Total and last-hour event counts.
    pub fn health(&self) -> Result<HealthSnapshot> {
        self.engine.health().map_err(Into::into)
    }

    /// Delete events older than `older_than_days` days.
    pub fn cleanup(&self, older_than_days: i64) -> Result<CleanupReport> {
        self.engine.cleanup(older_than_days).map_err(Into::into)
    }

    /// Delete events older than the configured retention age.
    pub fn cleanup_default(&self) -> Result<CleanupReport> {
        self.cleanup(self.default_older_than_days)
    }
}
