//! Main entry point for spanlog.
//!
//! This module provides the `Spanlog` struct, which owns the event store,
//! the aggregation engine, and the command executor.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::primitives::{Events, Maintenance, Services, Traces};
use spanlog_durability::{DurabilityMode, DurableStore, RecoveryResult};
use spanlog_engine::{Clock, SystemClock, TelemetryEngine};
use spanlog_executor::Executor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// The spanlog collector.
///
/// Create one with [`Spanlog::open`], [`Spanlog::ephemeral`] or
/// [`Spanlog::builder`].
///
/// # Example
///
/// ```ignore
/// use spanlog::prelude::*;
///
/// let log = Spanlog::open("./telemetry")?;
///
/// log.events.record(RawEvent::new("t1", "s1", "checkout", "pay"))?;
/// let timeline = log.traces.timeline("t1")?;
/// let metrics = log.services.metrics("checkout")?;
///
/// log.close()?;
/// ```
pub struct Spanlog {
    store: Arc<DurableStore>,
    engine: TelemetryEngine,
    executor: Executor,
    config: Config,

    /// Ingestion and raw event queries
    pub events: Events,

    /// Trace retrieval, timelines and summaries
    pub traces: Traces,

    /// Service and operation listings, per-service metrics
    pub services: Services,

    /// Health and retention
    pub maintenance: Maintenance,
}

impl Spanlog {
    /// Open a collector whose log lives in `path`.
    ///
    /// Uses batched durability.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create a collector with no disk I/O.
    ///
    /// Nothing is written anywhere and all events are lost on drop.
    ///
    /// | Method | Disk Files | Recovery |
    /// |--------|------------|----------|
    /// | `Spanlog::ephemeral()` | None | No |
    /// | `Spanlog::open(path)` | `path/events.wal` | Yes |
    pub fn ephemeral() -> Result<Self> {
        Self::builder().ephemeral()
    }

    /// Open a collector as described by a configuration file's contents.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::builder().config(config).open()
    }

    /// Create a builder.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let log = Spanlog::builder()
    ///     .path("./telemetry")
    ///     .strict()
    ///     .open()?;
    /// ```
    pub fn builder() -> SpanlogBuilder {
        SpanlogBuilder::new()
    }

    /// Force every logged write to disk.
    pub fn flush(&self) -> Result<()> {
        self.store.flush().map_err(Into::into)
    }

    /// Flush and release the collector.
    pub fn close(self) -> Result<()> {
        self.flush()
    }

    /// Directory holding the log, `None` when ephemeral.
    pub fn path(&self) -> Option<&Path> {
        self.store.data_dir()
    }

    /// Get the current durability mode.
    pub fn durability_mode(&self) -> DurabilityMode {
        self.store.mode()
    }

    /// Check if this collector keeps nothing on disk.
    pub fn is_ephemeral(&self) -> bool {
        self.store.data_dir().is_none()
    }

    /// What log replay found when the collector was opened.
    pub fn recovery(&self) -> &RecoveryResult {
        self.store.recovery()
    }

    /// Settings the collector was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The aggregation engine, for direct access.
    pub fn engine(&self) -> &TelemetryEngine {
        &self.engine
    }

    /// Command dispatcher over the same engine.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    fn assemble(store: Arc<DurableStore>, clock: Arc<dyn Clock>, config: Config) -> Self {
        let engine = TelemetryEngine::with_clock(store.clone(), clock);
        let executor = Executor::with_config(engine.clone(), config.executor_config());
        Self {
            events: Events::new(engine.clone()),
            traces: Traces::new(engine.clone()),
            services: Services::new(engine.clone()),
            maintenance: Maintenance::new(
                engine.clone(),
                config.retention.default_older_than_days,
            ),
            store,
            engine,
            executor,
            config,
        }
    }
}

/// Builder for collector configuration.
///
/// # Example
///
/// ```ignore
/// // Production: fsync by count or interval
/// let log = Spanlog::builder()
///     .path("./telemetry")
///     .buffered()
///     .open()?;
///
/// // Tests: nothing on disk, pinned clock
/// let log = Spanlog::builder()
///     .clock(Arc::new(FixedClock::new(now)))
///     .ephemeral()?;
/// ```
pub struct SpanlogBuilder {
    path: Option<PathBuf>,
    mode: DurabilityMode,
    config: Config,
    clock: Option<Arc<dyn Clock>>,
}

impl SpanlogBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            path: None,
            mode: DurabilityMode::default(),
            config: Config::default(),
            clock: None,
        }
    }

    /// Set the log directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Take directory, durability and query settings from `config`.
    ///
    /// Later builder calls override what the config says.
    pub fn config(mut self, config: Config) -> Self {
        if let Some(dir) = &config.data_dir {
            self.path = Some(dir.clone());
        }
        self.mode = config.durability_mode();
        self.config = config;
        self
    }

    /// Keep no log at all.
    ///
    /// Equivalent to [`Spanlog::ephemeral`] even when a path is set.
    pub fn no_durability(mut self) -> Self {
        self.mode = DurabilityMode::None;
        self
    }

    /// Batched fsync (default): every 100ms or 1000 writes.
    pub fn buffered(mut self) -> Self {
        self.mode = DurabilityMode::buffered_default();
        self
    }

    /// Batched fsync with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `flush_interval_ms` - Maximum time between fsyncs
    /// * `max_pending_writes` - Maximum writes before forced fsync
    pub fn buffered_with(mut self, flush_interval_ms: u64, max_pending_writes: usize) -> Self {
        self.mode = DurabilityMode::Batched {
            interval_ms: flush_interval_ms,
            batch_size: max_pending_writes,
        };
        self
    }

    /// fsync after every write.
    pub fn strict(mut self) -> Self {
        self.mode = DurabilityMode::Strict;
        self
    }

    /// Read the current time from `clock` instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Open the collector.
    ///
    /// Fails when no path was given and durability is requested.
    pub fn open(self) -> Result<Spanlog> {
        self.config.validate()?;
        let store = match (&self.path, self.mode.requires_wal()) {
            (_, false) => DurableStore::ephemeral(),
            (Some(path), true) => DurableStore::open(path, self.mode)?,
            (None, true) => {
                return Err(Error::Config(
                    "a data directory is required for durable storage".into(),
                ))
            }
        };
        Ok(self.finish(store))
    }

    /// Open a collector with no disk I/O, ignoring any path.
    pub fn ephemeral(self) -> Result<Spanlog> {
        self.config.validate()?;
        Ok(self.finish(DurableStore::ephemeral()))
    }

    fn finish(self, store: DurableStore) -> Spanlog {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        debug!(
            path = ?store.data_dir(),
            mode = store.mode().description(),
            "Collector ready"
        );
        Spanlog::assemble(Arc::new(store), clock, self.config)
    }
}

impl Default for SpanlogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
