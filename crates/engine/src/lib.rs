//! Aggregation engine for spanlog
//!
//! Every component is a stateless facade over an injected
//! `Arc<dyn EventStore>`:
//!
//! - [`Normalizer`]: fills defaults on inbound records
//! - [`Ingestor`]: normalizes then stores, single or batch
//! - [`TraceAssembler`]: ordered trace retrieval and timelines
//! - [`TraceSummaryBuilder`]: paginated, filterable trace summaries
//! - [`MetricsAggregator`]: per-service statistics and listings
//! - [`RetentionSweeper`]: age-based bulk delete
//! - [`HealthReporter`]: liveness statistics
//!
//! [`TelemetryEngine`] wires all of them to one store and one [`Clock`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod clock;
pub mod engine;
pub mod health;
pub mod ingest;
pub mod metrics;
pub mod normalizer;
pub mod retention;
pub mod summary;

pub use assembler::TraceAssembler;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::TelemetryEngine;
pub use health::HealthReporter;
pub use ingest::Ingestor;
pub use metrics::MetricsAggregator;
pub use normalizer::Normalizer;
pub use retention::RetentionSweeper;
pub use summary::{TraceFilter, TraceSummaryBuilder};
