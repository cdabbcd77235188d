//! Durability mode for WAL operations.
//!
//! Defines when appended entries are fsynced to disk.

use std::time::Duration;

/// Durability mode for WAL writes.
///
/// # Mode Comparison
///
/// | Mode | fsync | Use Case |
/// |------|-------|----------|
/// | None | never, no file at all | Tests, throwaway collectors |
/// | Batched | every N appends or T milliseconds | Production (balanced) |
/// | Strict | every append | Audit trails |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurabilityMode {
    /// No durability: the store lives in memory only.
    None,

    /// fsync after every append.
    Strict,

    /// fsync every `batch_size` appends OR once `interval_ms` has elapsed
    /// since the last fsync, whichever comes first.
    ///
    /// A crash may lose the appends made since the last fsync.
    Batched {
        /// Maximum time between fsyncs in milliseconds
        interval_ms: u64,
        /// Maximum appends between fsyncs
        batch_size: usize,
    },
}

impl DurabilityMode {
    /// Check if this mode writes a log at all.
    pub fn requires_wal(&self) -> bool {
        !matches!(self, DurabilityMode::None)
    }

    /// Check if every append is fsynced before returning.
    pub fn requires_immediate_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }

    /// Decide whether the log should be fsynced now.
    ///
    /// `pending` counts appends since the last fsync, `elapsed` is the time
    /// since the last fsync.
    pub fn should_sync(&self, pending: usize, elapsed: Duration) -> bool {
        match *self {
            DurabilityMode::None => false,
            DurabilityMode::Strict => pending > 0,
            DurabilityMode::Batched {
                interval_ms,
                batch_size,
            } => {
                pending > 0
                    && (pending >= batch_size.max(1)
                        || elapsed >= Duration::from_millis(interval_ms))
            }
        }
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::None => "No durability (fastest, all data lost on exit)",
            DurabilityMode::Strict => "Sync fsync (safest, slowest)",
            DurabilityMode::Batched { .. } => "Batched fsync (balanced speed/safety)",
        }
    }

    /// Create a buffered mode with recommended defaults.
    ///
    /// Returns `Batched { interval_ms: 100, batch_size: 1000 }`.
    pub fn buffered_default() -> Self {
        DurabilityMode::Batched {
            interval_ms: 100,
            batch_size: 1000,
        }
    }
}

impl Default for DurabilityMode {
    fn default() -> Self {
        Self::buffered_default()
    }
}
