//! In-memory event store
//!
//! # Design
//!
//! - Primary map: `BTreeMap<EventId, Event>` (ids are sequential)
//! - Time index: `BTreeSet<(Timestamp, EventId)>`, which is exactly the
//!   "timestamp ascending, ties by insertion order" ordering
//! - Secondary indices by trace, by service, and by (service, operation)
//! - One `parking_lot::RwLock` around all of it: readers run in parallel,
//!   every mutation (including a whole batch or a whole sweep) is atomic
//!
//! # Example
//!
//! ```ignore
//! use spanlog_storage::{EventStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let event = store.insert(record)?;
//! let trace = store.find_by_trace(&event.trace_id)?;
//! ```

use crate::index::SecondaryIndex;
use crate::store::EventStore;
use parking_lot::RwLock;
use spanlog_core::{Event, EventId, EventRecord, SpanlogResult, Status, Timestamp};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use tracing::debug;

/// Identifier handed to the first event of an empty store
const FIRST_EVENT_ID: EventId = EventId::new(1);

#[derive(Debug)]
struct Inner {
    events: BTreeMap<EventId, Event>,
    by_time: BTreeSet<(Timestamp, EventId)>,
    by_trace: SecondaryIndex<String>,
    by_service: SecondaryIndex<String>,
    by_operation: SecondaryIndex<(String, String)>,
    next_id: EventId,
}

impl Inner {
    fn new() -> Self {
        Self {
            events: BTreeMap::new(),
            by_time: BTreeSet::new(),
            by_trace: SecondaryIndex::new(),
            by_service: SecondaryIndex::new(),
            by_operation: SecondaryIndex::new(),
            next_id: FIRST_EVENT_ID,
        }
    }

    fn allocate(&mut self, count: usize) -> EventId {
        let first = self.next_id;
        self.next_id = EventId::new(first.as_u64() + count as u64);
        first
    }

    fn put(&mut self, event: Event) {
        let id = event.id;
        if id >= self.next_id {
            self.next_id = id.next();
        }
        if let Some(previous) = self.events.remove(&id) {
            self.unindex(&previous);
        }
        self.by_time.insert((event.timestamp, id));
        self.by_trace.insert(event.trace_id.clone(), id);
        self.by_service.insert(event.service_name.clone(), id);
        self.by_operation
            .insert((event.service_name.clone(), event.operation.clone()), id);
        self.events.insert(id, event);
    }

    fn unindex(&mut self, event: &Event) {
        self.by_time.remove(&(event.timestamp, event.id));
        self.by_trace.remove(&event.trace_id, event.id);
        self.by_service.remove(&event.service_name, event.id);
        self.by_operation.remove(
            &(event.service_name.clone(), event.operation.clone()),
            event.id,
        );
    }

    /// Resolve ids (ascending) and stable-sort by timestamp.
    fn chronological(&self, ids: impl Iterator<Item = EventId>) -> Vec<Event> {
        let mut events: Vec<Event> = ids.filter_map(|id| self.events.get(&id).cloned()).collect();
        events.sort_by_key(|e| e.timestamp);
        events
    }

    fn in_time_order(&self) -> impl Iterator<Item = &Event> + '_ {
        self.by_time
            .iter()
            .filter_map(move |(_, id)| self.events.get(id))
    }
}

/// BTreeMap-backed [`EventStore`]
///
/// Cheap to create; loses everything when dropped. Also the in-memory half
/// of the durable store.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.inner.read().events.len()
    }

    /// Check if the store holds no events
    pub fn is_empty(&self) -> bool {
        self.inner.read().events.is_empty()
    }

    /// Identifier the next inserted event would receive
    ///
    /// Nothing is reserved. Wrappers that log events with their final ids
    /// read this under their own write lock and then [`apply`](Self::apply),
    /// which moves the counter on; a write that fails in between consumes
    /// no ids.
    pub fn next_id(&self) -> EventId {
        self.inner.read().next_id
    }

    /// Apply already-identified events, replacing any with the same id
    ///
    /// Advances the id counter past the largest applied id.
    pub fn apply(&self, events: Vec<Event>) {
        let mut inner = self.inner.write();
        for event in events {
            inner.put(event);
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore for MemoryStore {
    fn insert(&self, record: EventRecord) -> SpanlogResult<Event> {
        let mut inner = self.inner.write();
        let id = inner.allocate(1);
        let event = record.into_event(id);
        inner.put(event.clone());
        Ok(event)
    }

    fn insert_batch(&self, records: Vec<EventRecord>) -> SpanlogResult<Vec<Event>> {
        let mut inner = self.inner.write();
        let first = inner.allocate(records.len());
        let events: Vec<Event> = records
            .into_iter()
            .enumerate()
            .map(|(offset, record)| {
                record.into_event(EventId::new(first.as_u64() + offset as u64))
            })
            .collect();
        for event in &events {
            inner.put(event.clone());
        }
        Ok(events)
    }

    fn find_by_trace(&self, trace_id: &str) -> SpanlogResult<Vec<Event>> {
        let inner = self.inner.read();
        Ok(inner.chronological(inner.by_trace.get(&trace_id.to_string())))
    }

    fn find_by_service(&self, service_name: &str) -> SpanlogResult<Vec<Event>> {
        let inner = self.inner.read();
        let mut events = inner.chronological(inner.by_service.get(&service_name.to_string()));
        // Stable sort keeps insertion order among equal timestamps.
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(events)
    }

    fn find_by_status(&self, status: Status) -> SpanlogResult<Vec<Event>> {
        let inner = self.inner.read();
        Ok(inner
            .in_time_order()
            .filter(|e| e.status == status)
            .cloned()
            .collect())
    }

    fn find_by_service_and_operation(
        &self,
        service_name: &str,
        operation: &str,
    ) -> SpanlogResult<Vec<Event>> {
        let inner = self.inner.read();
        let key = (service_name.to_string(), operation.to_string());
        Ok(inner.chronological(inner.by_operation.get(&key)))
    }

    fn find_between(&self, start: Timestamp, end: Timestamp) -> SpanlogResult<Vec<Event>> {
        if start > end {
            return Ok(Vec::new());
        }
        let inner = self.inner.read();
        let lower = (start, EventId::new(0));
        let upper = (end, EventId::new(u64::MAX));
        Ok(inner
            .by_time
            .range(lower..=upper)
            .filter_map(|(_, id)| inner.events.get(id).cloned())
            .collect())
    }

    fn distinct_service_names(&self) -> SpanlogResult<Vec<String>> {
        Ok(self.inner.read().by_service.keys().cloned().collect())
    }

    fn distinct_operations(&self, service_name: &str) -> SpanlogResult<Vec<String>> {
        let inner = self.inner.read();
        let start = (service_name.to_string(), String::new());
        Ok(inner
            .by_operation
            .keys_from(&start)
            .take_while(|(service, _)| service == service_name)
            .map(|(_, operation)| operation.clone())
            .collect())
    }

    fn distinct_trace_ids(&self, offset: usize, limit: usize) -> SpanlogResult<Vec<String>> {
        Ok(self
            .inner
            .read()
            .by_trace
            .keys()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count_since(&self, since: Timestamp) -> SpanlogResult<u64> {
        let inner = self.inner.read();
        // Every (since, _) pair sorts at or below (since, MAX).
        let lower = (since, EventId::new(u64::MAX));
        Ok(inner
            .by_time
            .range((Bound::Excluded(lower), Bound::Unbounded))
            .count() as u64)
    }

    fn count_all(&self) -> SpanlogResult<u64> {
        Ok(self.inner.read().events.len() as u64)
    }

    fn delete_before(&self, cutoff: Timestamp) -> SpanlogResult<u64> {
        let mut inner = self.inner.write();
        let doomed: Vec<EventId> = inner
            .by_time
            .range(..(cutoff, EventId::new(0)))
            .map(|(_, id)| *id)
            .collect();
        for id in &doomed {
            if let Some(event) = inner.events.remove(id) {
                inner.unindex(&event);
            }
        }
        debug!(cutoff = %cutoff, deleted = doomed.len(), "deleted events before cutoff");
        Ok(doomed.len() as u64)
    }
}
