//! Telemetry Comprehensive Test Suite
//!
//! Exercises the public `Spanlog` facade end to end: ingestion, trace
//! assembly, summaries, metrics, retention, health, persistence and
//! concurrent use.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test telemetry_comprehensive
//!
//! # Run retention tests only
//! cargo test --test telemetry_comprehensive retention::
//! ```

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use spanlog::{Clock, FixedClock, RawEvent, Spanlog, Status, Timestamp};

// Test modules
pub mod commands;
pub mod concurrency;
pub mod durability;
pub mod health;
pub mod ingestion;
pub mod metrics;
pub mod properties;
pub mod retention;
pub mod summaries;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// The instant every test clock starts at
pub fn base_time() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 11, 5, 14, 0, 0).unwrap()
}

/// `base_time()` shifted by `ms` milliseconds
pub fn at_ms(ms: i64) -> Timestamp {
    base_time() + Duration::milliseconds(ms)
}

/// In-memory collector whose clock is pinned to `now`
pub fn create_collector_at(now: Timestamp) -> (Spanlog, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now));
    let log = Spanlog::builder()
        .clock(clock.clone() as Arc<dyn Clock>)
        .ephemeral()
        .expect("Failed to create ephemeral collector");
    (log, clock)
}

/// In-memory collector pinned to `base_time()`
pub fn create_collector() -> (Spanlog, Arc<FixedClock>) {
    create_collector_at(base_time())
}

/// Event with the four identity fields set and nothing else
pub fn event(trace: &str, span: &str, service: &str, operation: &str) -> RawEvent {
    RawEvent::new(trace, span, service, operation)
}

/// Event stamped `ms` milliseconds after `base_time()`
pub fn event_at(trace: &str, span: &str, service: &str, operation: &str, ms: i64) -> RawEvent {
    RawEvent {
        timestamp: Some(at_ms(ms)),
        ..event(trace, span, service, operation)
    }
}

/// Event with a status and duration, stamped at `base_time()`
pub fn outcome(service: &str, operation: &str, status: Status, duration_ms: i64) -> RawEvent {
    RawEvent {
        timestamp: Some(base_time()),
        status: Some(status),
        duration_ms: Some(duration_ms),
        ..event("t-metrics", "s", service, operation)
    }
}
