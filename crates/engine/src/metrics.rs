//! Service metrics aggregator
//!
//! ## Rounding
//!
//! Both rounded figures round half up, toward positive infinity:
//! - `averageDurationMs`: nearest integer
//! - `errorRate`: nearest hundredth of a percent

use spanlog_core::{Event, ServiceMetrics, ServiceStats, SpanlogResult, Status};
use spanlog_storage::EventStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-service statistics and listings
#[derive(Clone)]
pub struct MetricsAggregator {
    store: Arc<dyn EventStore>,
}

impl MetricsAggregator {
    /// Create an aggregator reading from `store`
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Statistics for one service
    ///
    /// A service with no events reports `requestCount: 0` and nothing else.
    pub fn service_metrics(&self, service_name: &str) -> SpanlogResult<ServiceMetrics> {
        let events = self.store.find_by_service(service_name)?;
        if events.is_empty() {
            return Ok(ServiceMetrics::unknown(service_name));
        }

        Ok(ServiceMetrics {
            service_name: service_name.to_string(),
            request_count: events.len() as u64,
            stats: Some(compute_stats(&events)),
        })
    }

    /// Distinct service names, sorted
    pub fn list_services(&self) -> SpanlogResult<Vec<String>> {
        self.store.distinct_service_names()
    }

    /// Distinct operations of `service_name`, sorted
    pub fn list_operations(&self, service_name: &str) -> SpanlogResult<Vec<String>> {
        self.store.distinct_operations(service_name)
    }
}

fn compute_stats(events: &[Event]) -> ServiceStats {
    let durations: Vec<i64> = events.iter().filter_map(|e| e.duration_ms).collect();
    let average_duration_ms = average_half_up(&durations);

    let error_count = events.iter().filter(|e| e.status == Status::Error).count() as u64;
    let mut operation_counts = BTreeMap::new();
    for event in events {
        *operation_counts.entry(event.operation.clone()).or_insert(0u64) += 1;
    }

    ServiceStats {
        average_duration_ms,
        error_count,
        error_rate: error_rate(error_count, events.len() as u64),
        operation_counts,
    }
}

/// Percentage of errors, to two decimals; 0 when there are no requests
pub fn error_rate(error_count: u64, request_count: u64) -> f64 {
    if request_count == 0 {
        return 0.0;
    }
    let percent = error_count as f64 / request_count as f64 * 100.0;
    round_half_up(percent * 100.0) / 100.0
}

/// Exact `floor(sum / n + 0.5)`, 0 for no values
fn average_half_up(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let n = values.len() as i128;
    let rounded = (2 * sum + n).div_euclid(2 * n);
    // The mean of i64 values always fits back into i64.
    rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
