//! Convenient imports for spanlog.
//!
//! ```ignore
//! use spanlog::prelude::*;
//!
//! let log = Spanlog::ephemeral()?;
//! log.events.record(RawEvent::new("t1", "s1", "svc", "op"))?;
//! ```

// Main entry point
pub use crate::database::{Spanlog, SpanlogBuilder};

// Configuration
pub use crate::config::Config;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Event, EventType, RawEvent, Status, Timestamp};

// Views and queries
pub use crate::types::{
    CleanupReport, HealthSnapshot, PageRequest, ServiceMetrics, Timeline, TraceFilter, TracePage,
};
