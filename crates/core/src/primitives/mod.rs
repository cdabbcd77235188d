//! Primitive types for spanlog
//!
//! This module defines the canonical data structures shared between the
//! `storage`, `engine`, and `executor` crates.
//!
//! ## Design Principle
//!
//! - **spanlog-core** defines the persisted entity and the derived views (this module)
//! - **spanlog-storage** defines how events are kept and looked up
//! - **spanlog-engine** turns looked-up events into views
//!
//! Views are plain result structs, one per read operation. They derive
//! `Serialize` only: they are produced, never parsed back.

pub mod event;
pub mod maintenance;
pub mod metrics;
pub mod trace;

// Re-export all types at module level
pub use event::{Event, EventRecord, EventType, RawEvent, Status};
pub use maintenance::{CleanupReport, HealthSnapshot, HealthStatus};
pub use metrics::{ServiceMetrics, ServiceStats};
pub use trace::{Timeline, TimelineEntry, TracePage, TraceSummary};
