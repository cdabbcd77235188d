//! Command enum: one variant per bound operation.

use serde::{Deserialize, Serialize};
use spanlog_core::{RawEvent, Status, Timestamp};

/// A request to the executor
///
/// Serialized with an internal `command` tag and camelCase fields:
///
/// ```json
/// {"command": "ListTraces", "page": 0, "size": 20, "service": "checkout"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all_fields = "camelCase")]
pub enum Command {
    // ==================== Ingestion ====================
    /// Submit a single event
    RecordEvent {
        /// Event as supplied by the caller
        event: RawEvent,
    },

    /// Submit a batch; all or nothing
    RecordEventsBatch {
        /// Events as supplied by the caller
        events: Vec<RawEvent>,
    },

    // ==================== Traces ====================
    /// Fetch a trace's events, oldest first
    GetTrace {
        /// Trace to fetch
        trace_id: String,
    },

    /// Fetch a trace's timeline
    GetTimeline {
        /// Trace to fetch
        trace_id: String,
    },

    /// List trace summaries
    ListTraces {
        /// Zero-based page index, default 0
        #[serde(default)]
        page: Option<usize>,
        /// Page size, default from configuration
        #[serde(default)]
        size: Option<usize>,
        /// Keep traces with an event from this service
        #[serde(default)]
        service: Option<String>,
        /// Keep traces with an event for this operation
        #[serde(default)]
        operation: Option<String>,
        /// Keep traces with an event whose status has this name
        #[serde(default)]
        status: Option<String>,
    },

    // ==================== Services ====================
    /// Distinct service names
    ListServices,

    /// Distinct operations of a service
    ListOperations {
        /// Service to inspect
        service_name: String,
    },

    /// Statistics for a service
    GetServiceMetrics {
        /// Service to inspect
        service_name: String,
    },

    // ==================== Maintenance ====================
    /// Liveness statistics
    GetHealth,

    /// Delete old events
    Cleanup {
        /// Age threshold in days, default from configuration
        #[serde(default)]
        older_than_days: Option<i64>,
    },

    // ==================== Auxiliary queries ====================
    /// Events with a status
    FindByStatus {
        /// Status to match
        status: Status,
    },

    /// Events of one operation on one service
    FindByServiceAndOperation {
        /// Service to match
        service_name: String,
        /// Operation to match
        operation: String,
    },

    /// Events within an inclusive time range
    FindBetween {
        /// Range start
        start: Timestamp,
        /// Range end
        end: Timestamp,
    },
}

impl Command {
    /// Variant name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::RecordEvent { .. } => "RecordEvent",
            Command::RecordEventsBatch { .. } => "RecordEventsBatch",
            Command::GetTrace { .. } => "GetTrace",
            Command::GetTimeline { .. } => "GetTimeline",
            Command::ListTraces { .. } => "ListTraces",
            Command::ListServices => "ListServices",
            Command::ListOperations { .. } => "ListOperations",
            Command::GetServiceMetrics { .. } => "GetServiceMetrics",
            Command::GetHealth => "GetHealth",
            Command::Cleanup { .. } => "Cleanup",
            Command::FindByStatus { .. } => "FindByStatus",
            Command::FindByServiceAndOperation { .. } => "FindByServiceAndOperation",
            Command::FindBetween { .. } => "FindBetween",
        }
    }

    /// Check if the command changes the store
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::RecordEvent { .. } | Command::RecordEventsBatch { .. } | Command::Cleanup { .. }
        )
    }
}
