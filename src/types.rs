//! Public types, re-exported from the internal crates.

// Events
pub use spanlog_core::{Event, EventId, EventRecord, EventType, RawEvent, Status, Timestamp};

// Derived views
pub use spanlog_core::{
    CleanupReport, HealthSnapshot, HealthStatus, ServiceMetrics, ServiceStats, Timeline,
    TimelineEntry, TracePage, TraceSummary,
};

// Querying
pub use spanlog_core::PageRequest;
pub use spanlog_engine::TraceFilter;

// Time
pub use spanlog_engine::{Clock, FixedClock, SystemClock};

// Storage
pub use spanlog_durability::{DurabilityMode, RecoveryResult};

// Commands
pub use spanlog_executor::{Command, Output};
