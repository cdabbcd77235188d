//! Retention sweeper
//!
//! Runs only when asked; nothing here schedules itself.

use crate::clock::Clock;
use chrono::{DateTime, TimeDelta};
use spanlog_core::{CleanupReport, SpanlogResult, Timestamp};
use spanlog_storage::EventStore;
use std::sync::Arc;
use tracing::info;

/// Age-based bulk delete
#[derive(Clone)]
pub struct RetentionSweeper {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl RetentionSweeper {
    /// Create a sweeper over `store`
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Delete events stamped strictly before now minus `older_than_days`
    ///
    /// Any integer is accepted. A negative age puts the cutoff in the
    /// future; a cutoff beyond the representable range saturates.
    pub fn cleanup(&self, older_than_days: i64) -> SpanlogResult<CleanupReport> {
        let cutoff_date = cutoff(self.clock.now(), older_than_days);
        let deleted_events = self.store.delete_before(cutoff_date)?;
        info!(
            older_than_days,
            cutoff = %cutoff_date,
            deleted = deleted_events,
            "Retention sweep finished"
        );
        Ok(CleanupReport {
            deleted_events,
            cutoff_date,
            message: format!("Cleaned up traces older than {} days", older_than_days),
        })
    }
}

/// `now - days`, clamped to the representable range
pub fn cutoff(now: Timestamp, days: i64) -> Timestamp {
    let past = days >= 0;
    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(if past {
            DateTime::<chrono::Utc>::MIN_UTC
        } else {
            DateTime::<chrono::Utc>::MAX_UTC
        })
}
