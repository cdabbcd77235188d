//! The Executor: dispatches commands to handlers.

use crate::handlers::{ingest, maintenance, queries, services, traces};
use crate::{Command, Output, Result};
use spanlog_engine::TelemetryEngine;
use tracing::debug;

/// Binding defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Page size when `ListTraces` omits one
    pub default_page_size: usize,
    /// Larger requested page sizes are clamped to this
    pub max_page_size: usize,
    /// Age used when `Cleanup` omits one
    pub default_older_than_days: i64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 1000,
            default_older_than_days: 7,
        }
    }
}

/// Stateless command dispatcher
///
/// Every command maps onto exactly one engine operation. The executor adds
/// argument defaults and checks; it never retries or caches.
#[derive(Clone)]
pub struct Executor {
    engine: TelemetryEngine,
    config: ExecutorConfig,
}

impl Executor {
    /// Create an executor with default binding settings
    pub fn new(engine: TelemetryEngine) -> Self {
        Self::with_config(engine, ExecutorConfig::default())
    }

    /// Create an executor with explicit binding settings
    pub fn with_config(engine: TelemetryEngine, config: ExecutorConfig) -> Self {
        Self { engine, config }
    }

    /// The engine commands run against
    pub fn engine(&self) -> &TelemetryEngine {
        &self.engine
    }

    /// Binding settings
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run one command
    pub fn execute(&self, command: Command) -> Result<Output> {
        debug!(command = command.name(), write = command.is_write(), "Executing command");
        let engine = &self.engine;
        match command {
            Command::RecordEvent { event } => ingest::record_event(engine, event),
            Command::RecordEventsBatch { events } => ingest::record_events_batch(engine, events),

            Command::GetTrace { trace_id } => traces::get_trace(engine, &trace_id),
            Command::GetTimeline { trace_id } => traces::get_timeline(engine, &trace_id),
            Command::ListTraces {
                page,
                size,
                service,
                operation,
                status,
            } => traces::list_traces(
                engine,
                &self.config,
                page,
                size,
                traces::filter(service, operation, status),
            ),

            Command::ListServices => services::list_services(engine),
            Command::ListOperations { service_name } => {
                services::list_operations(engine, &service_name)
            }
            Command::GetServiceMetrics { service_name } => {
                services::service_metrics(engine, &service_name)
            }

            Command::GetHealth => maintenance::health(engine),
            Command::Cleanup { older_than_days } => maintenance::cleanup(
                engine,
                older_than_days.unwrap_or(self.config.default_older_than_days),
            ),

            Command::FindByStatus { status } => queries::find_by_status(engine, status),
            Command::FindByServiceAndOperation {
                service_name,
                operation,
            } => queries::find_by_service_and_operation(engine, &service_name, &operation),
            Command::FindBetween { start, end } => queries::find_between(engine, start, end),
        }
    }

    /// Parse a JSON command and run it
    pub fn execute_json(&self, json: &str) -> Result<Output> {
        let command: Command =
            serde_json::from_str(json).map_err(|e| crate::Error::InvalidArgument {
                reason: format!("malformed command: {}", e),
            })?;
        self.execute(command)
    }
}
