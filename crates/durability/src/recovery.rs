//! Crash recovery
//!
//! Rebuilds a [`MemoryStore`] by replaying the log in append order. Insert
//! entries carry final ids, so the rebuilt store hands out the same next id
//! it would have before the restart.

use crate::wal::{read_wal, WalContents, WalEntry};
use spanlog_core::SpanlogResult;
use spanlog_storage::{EventStore, MemoryStore};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// What replay found and did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryResult {
    /// Entries applied
    pub wal_entries_replayed: u64,
    /// Events restored by insert entries
    pub events_restored: u64,
    /// Events removed again by replayed retention sweeps
    pub events_deleted: u64,
    /// Bytes of torn tail found after the last complete frame
    pub torn_bytes: u64,
    /// Time spent replaying
    pub recovery_time_micros: u64,
}

impl RecoveryResult {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Recovery complete: {} WAL entries, {} events restored, {} deleted, {} torn bytes, {:.2}ms",
            self.wal_entries_replayed,
            self.events_restored,
            self.events_deleted,
            self.torn_bytes,
            self.recovery_time_micros as f64 / 1000.0,
        )
    }

    /// Check if the log ended in a torn frame
    pub fn has_issues(&self) -> bool {
        self.torn_bytes > 0
    }
}

/// Replay the log at `path` into `store`
///
/// Returns the replay statistics and the length of the well-formed prefix.
pub fn recover(path: &Path, store: &MemoryStore) -> SpanlogResult<(RecoveryResult, u64)> {
    let started = Instant::now();
    let WalContents {
        entries,
        valid_len,
        torn_bytes,
    } = read_wal(path)?;

    let mut result = RecoveryResult {
        torn_bytes,
        ..Default::default()
    };

    for entry in entries {
        match entry {
            WalEntry::Insert { events } => {
                result.events_restored += events.len() as u64;
                store.apply(events);
            }
            WalEntry::DeleteBefore { cutoff } => {
                result.events_deleted += store.delete_before(cutoff)?;
            }
        }
        result.wal_entries_replayed += 1;
    }
    result.recovery_time_micros = started.elapsed().as_micros() as u64;

    if result.has_issues() {
        warn!(
            path = %path.display(),
            torn_bytes,
            "WAL ends in a torn frame; discarding it"
        );
    }
    info!("{}", result.summary());
    Ok((result, valid_len))
}
