//! Health reporter

use crate::clock::Clock;
use chrono::Duration;
use spanlog_core::{HealthSnapshot, HealthStatus, SpanlogResult};
use spanlog_storage::EventStore;
use std::sync::Arc;

/// Window counted as "recent"
pub const RECENT_WINDOW_HOURS: i64 = 1;

/// Liveness statistics
///
/// Always reports `healthy`; the counts are the useful part.
#[derive(Clone)]
pub struct HealthReporter {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl HealthReporter {
    /// Create a reporter over `store`
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Take a snapshot
    pub fn health(&self) -> SpanlogResult<HealthSnapshot> {
        let now = self.clock.now();
        let total_events = self.store.count_all()?;
        let recent_events = self
            .store
            .count_since(now - Duration::hours(RECENT_WINDOW_HOURS))?;
        let services = self.store.distinct_service_names()?;

        Ok(HealthSnapshot {
            status: HealthStatus::Healthy,
            total_events,
            recent_events,
            tracked_services: services.len(),
            services,
            timestamp: now,
        })
    }
}
