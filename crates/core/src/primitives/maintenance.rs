//! Health and retention reports

use crate::types::Timestamp;
use serde::Serialize;

/// Liveness status
///
/// Only one value exists: the collector reports statistics, it does not
/// diagnose its dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Serving requests
    #[default]
    Healthy,
}

/// Statistics snapshot returned by the health operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    /// Always `healthy`
    pub status: HealthStatus,
    /// Events in the store
    pub total_events: u64,
    /// Events stamped within the last hour
    pub recent_events: u64,
    /// Number of distinct services
    pub tracked_services: usize,
    /// Distinct services, sorted
    pub services: Vec<String>,
    /// When the snapshot was taken
    pub timestamp: Timestamp,
}

/// Outcome of a retention sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupReport {
    /// Events removed
    pub deleted_events: u64,
    /// Events strictly older than this were removed
    pub cutoff_date: Timestamp,
    /// Human-readable summary
    pub message: String,
}
