//! Service metrics view

use serde::Serialize;
use std::collections::BTreeMap;

/// Performance rollup for one service
///
/// A service with no events reports only its name and a zero request count;
/// `stats` is `None` and nothing else is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetrics {
    /// Service the metrics describe
    pub service_name: String,
    /// Number of events recorded for the service
    pub request_count: u64,
    /// Present whenever `request_count > 0`
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ServiceStats>,
}

impl ServiceMetrics {
    /// Metrics for a service that has never been seen
    pub fn unknown(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            request_count: 0,
            stats: None,
        }
    }
}

/// Aggregates over a service's events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    /// Mean `durationMs` over events carrying one, rounded half up
    pub average_duration_ms: i64,
    /// Events with status `ERROR`
    pub error_count: u64,
    /// `error_count / request_count * 100`, rounded to two decimals
    pub error_rate: f64,
    /// Occurrences per operation name
    pub operation_counts: BTreeMap<String, u64>,
}
