//! Event store contract
//!
//! The aggregation engine never talks to a concrete backend; every component
//! receives an `Arc<dyn EventStore>` at construction.
//!
//! ## Ordering Contract
//!
//! | Operation | Order |
//! |-----------|-------|
//! | `find_by_trace` | timestamp ascending, ties by insertion order |
//! | `find_by_service` | timestamp descending, ties by insertion order |
//! | `find_by_status`, `find_by_service_and_operation`, `find_between` | timestamp ascending, ties by insertion order |
//! | `distinct_service_names`, `distinct_operations`, `distinct_trace_ids` | lexicographic |
//!
//! ## Boundaries
//!
//! | Operation | Comparison |
//! |-----------|------------|
//! | `count_since(t)` | `timestamp > t` |
//! | `delete_before(t)` | `timestamp < t` |
//! | `find_between(a, b)` | `a <= timestamp <= b` |
//!
//! ## Errors
//!
//! Backends report failures as `SpanlogError::Storage` (or the I/O family).
//! Callers propagate them unchanged. Unknown traces or services are not
//! errors; they yield empty results.

use spanlog_core::{Event, EventRecord, SpanlogResult, Status, Timestamp};

/// Event store adapter
///
/// Implementations must be safe for concurrent use: reads may run in
/// parallel with each other and with inserts, and `delete_before` must be
/// atomic with respect to readers.
pub trait EventStore: Send + Sync {
    /// Insert one normalized record and return it with its assigned id
    fn insert(&self, record: EventRecord) -> SpanlogResult<Event>;

    /// Insert records atomically, returning them in input order
    fn insert_batch(&self, records: Vec<EventRecord>) -> SpanlogResult<Vec<Event>>;

    /// All events of a trace, oldest first
    fn find_by_trace(&self, trace_id: &str) -> SpanlogResult<Vec<Event>>;

    /// All events of a service, newest first
    fn find_by_service(&self, service_name: &str) -> SpanlogResult<Vec<Event>>;

    /// All events with the given status
    fn find_by_status(&self, status: Status) -> SpanlogResult<Vec<Event>>;

    /// All events of one operation on one service
    fn find_by_service_and_operation(
        &self,
        service_name: &str,
        operation: &str,
    ) -> SpanlogResult<Vec<Event>>;

    /// All events stamped within `[start, end]`
    fn find_between(&self, start: Timestamp, end: Timestamp) -> SpanlogResult<Vec<Event>>;

    /// Distinct service names, sorted
    fn distinct_service_names(&self) -> SpanlogResult<Vec<String>>;

    /// Distinct operations of a service, sorted
    fn distinct_operations(&self, service_name: &str) -> SpanlogResult<Vec<String>>;

    /// One page of distinct trace ids, sorted
    fn distinct_trace_ids(&self, offset: usize, limit: usize) -> SpanlogResult<Vec<String>>;

    /// Events stamped strictly after `since`
    fn count_since(&self, since: Timestamp) -> SpanlogResult<u64>;

    /// Total events
    fn count_all(&self) -> SpanlogResult<u64>;

    /// Remove events stamped strictly before `cutoff`; returns how many
    fn delete_before(&self, cutoff: Timestamp) -> SpanlogResult<u64>;
}
