//! # spanlog
//!
//! Embedded telemetry collector.
//!
//! spanlog ingests span, log and metric events tagged with trace, span and
//! service identity, and answers questions about them: the events of a
//! trace, a trace's timeline, paged trace summaries, per-service metrics,
//! and overall health. Old events are removed with an age-based cleanup.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spanlog::prelude::*;
//!
//! let log = Spanlog::open("./telemetry")?;
//!
//! log.events.record(RawEvent {
//!     duration_ms: Some(120),
//!     ..RawEvent::new("trace-1", "span-1", "checkout", "pay")
//! })?;
//!
//! let timeline = log.traces.timeline("trace-1")?;
//! let metrics = log.services.metrics("checkout")?;
//! let health = log.maintenance.health()?;
//!
//! log.close()?;
//! ```
//!
//! ## Operation groups
//!
//! - [`Events`] - record events, query by status, operation or time
//! - [`Traces`] - trace events, timelines, summaries
//! - [`Services`] - service and operation listings, metrics
//! - [`Maintenance`] - health and retention
//!
//! Every operation is also reachable as a serializable [`Command`] through
//! [`Spanlog::executor`].

#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod primitives;
mod types;

pub mod prelude;

// Re-export main entry points
pub use config::{
    Config, DurabilityConfig, DurabilityKind, LogConfig, QueryConfig, RetentionConfig,
};
pub use database::{Spanlog, SpanlogBuilder};
pub use error::{Error, Result};

// Re-export operation groups
pub use primitives::{Events, Maintenance, Services, Traces};

// Re-export types
pub use types::*;

// Lower layers for callers that need them
pub use spanlog_engine::TelemetryEngine;
pub use spanlog_executor::{Error as CommandError, Executor, ExecutorConfig};
