//! TelemetryEngine: every component wired to one store
//!
//! ## Design
//!
//! The engine holds no state of its own beyond the shared store and clock
//! handles. Cloning it is cheap and clones share the store.
//!
//! # Example
//!
//! ```ignore
//! use spanlog_engine::TelemetryEngine;
//! use spanlog_storage::MemoryStore;
//!
//! let engine = TelemetryEngine::new(Arc::new(MemoryStore::new()));
//! engine.record(RawEvent::new("t1", "s1", "checkout", "pay"))?;
//! let timeline = engine.get_timeline("t1")?;
//! ```

use crate::assembler::TraceAssembler;
use crate::clock::{Clock, SystemClock};
use crate::health::HealthReporter;
use crate::ingest::Ingestor;
use crate::metrics::MetricsAggregator;
use crate::normalizer::Normalizer;
use crate::retention::RetentionSweeper;
use crate::summary::{TraceFilter, TraceSummaryBuilder};
use spanlog_core::{
    CleanupReport, Event, HealthSnapshot, PageRequest, RawEvent, ServiceMetrics, SpanlogResult,
    Status, Timeline, Timestamp, TracePage,
};
use spanlog_storage::EventStore;
use std::sync::Arc;

/// The aggregation core
#[derive(Clone)]
pub struct TelemetryEngine {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
    ingestor: Ingestor,
    assembler: TraceAssembler,
    summaries: TraceSummaryBuilder,
    metrics: MetricsAggregator,
    retention: RetentionSweeper,
    health: HealthReporter,
}

impl TelemetryEngine {
    /// Engine over `store` using wall-clock time
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Engine over `store` reading time from `clock`
    pub fn with_clock(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        let normalizer = Normalizer::new(clock.clone());
        Self {
            ingestor: Ingestor::new(store.clone(), normalizer),
            assembler: TraceAssembler::new(store.clone()),
            summaries: TraceSummaryBuilder::new(store.clone()),
            metrics: MetricsAggregator::new(store.clone()),
            retention: RetentionSweeper::new(store.clone(), clock.clone()),
            health: HealthReporter::new(store.clone(), clock.clone()),
            store,
            clock,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn EventStore> {
        &self.store
    }

    /// The time source
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    // ========================================================================
    // Ingestion
    // ========================================================================

    /// Record one event
    pub fn record(&self, raw: RawEvent) -> SpanlogResult<Event> {
        self.ingestor.record(raw)
    }

    /// Record a batch atomically
    pub fn record_batch(&self, raws: Vec<RawEvent>) -> SpanlogResult<Vec<Event>> {
        self.ingestor.record_batch(raws)
    }

    // ========================================================================
    // Traces
    // ========================================================================

    /// Events of a trace, oldest first
    pub fn get_trace(&self, trace_id: &str) -> SpanlogResult<Vec<Event>> {
        self.assembler.get_trace(trace_id)
    }

    /// Timeline of a trace
    pub fn get_timeline(&self, trace_id: &str) -> SpanlogResult<Timeline> {
        self.assembler.get_timeline(trace_id)
    }

    /// One page of trace summaries
    pub fn list_traces(&self, page: PageRequest, filter: &TraceFilter) -> SpanlogResult<TracePage> {
        self.summaries.list_traces(page, filter)
    }

    // ========================================================================
    // Services
    // ========================================================================

    /// Distinct services
    pub fn list_services(&self) -> SpanlogResult<Vec<String>> {
        self.metrics.list_services()
    }

    /// Distinct operations of a service
    pub fn list_operations(&self, service_name: &str) -> SpanlogResult<Vec<String>> {
        self.metrics.list_operations(service_name)
    }

    /// Statistics for a service
    pub fn service_metrics(&self, service_name: &str) -> SpanlogResult<ServiceMetrics> {
        self.metrics.service_metrics(service_name)
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Delete events older than `older_than_days`
    pub fn cleanup(&self, older_than_days: i64) -> SpanlogResult<CleanupReport> {
        self.retention.cleanup(older_than_days)
    }

    /// Liveness statistics
    pub fn health(&self) -> SpanlogResult<HealthSnapshot> {
        self.health.health()
    }

    // ========================================================================
    // Auxiliary queries
    // ========================================================================

    /// Events with `status`, oldest first
    pub fn find_by_status(&self, status: Status) -> SpanlogResult<Vec<Event>> {
        self.store.find_by_status(status)
    }

    /// Events of one operation on one service, oldest first
    pub fn find_by_service_and_operation(
        &self,
        service_name: &str,
        operation: &str,
    ) -> SpanlogResult<Vec<Event>> {
        self.store
            .find_by_service_and_operation(service_name, operation)
    }

    /// Events stamped within `[start, end]`, oldest first
    pub fn find_between(&self, start: Timestamp, end: Timestamp) -> SpanlogResult<Vec<Event>> {
        self.store.find_between(start, end)
    }
}
