//! Write-ahead logged event store
//!
//! `DurableStore` keeps every event in a [`MemoryStore`] and records each
//! mutation in the log before applying it. Reads never touch the log.
//!
//! Writers serialize on the log mutex so log order always matches apply
//! order; readers only take the memory store's read lock.

use crate::mode::DurabilityMode;
use crate::recovery::{recover, RecoveryResult};
use crate::wal::{Wal, WalEntry, WAL_FILE_NAME};
use parking_lot::Mutex;
use spanlog_core::{
    Event, EventId, EventRecord, SpanlogError, SpanlogResult, Status, Timestamp,
};
use spanlog_storage::{EventStore, MemoryStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Event store that survives restarts
#[derive(Debug)]
pub struct DurableStore {
    memory: MemoryStore,
    wal: Option<Mutex<Wal>>,
    data_dir: Option<PathBuf>,
    mode: DurabilityMode,
    recovery: RecoveryResult,
}

impl DurableStore {
    /// Open the store kept in `data_dir`, replaying its log
    ///
    /// The directory is created if missing. With [`DurabilityMode::None`]
    /// nothing is read or written and the store starts empty.
    pub fn open(data_dir: impl AsRef<Path>, mode: DurabilityMode) -> SpanlogResult<Self> {
        if !mode.requires_wal() {
            return Ok(Self::ephemeral());
        }

        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|e| {
            SpanlogError::storage(format!(
                "cannot create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let path = data_dir.join(WAL_FILE_NAME);
        let memory = MemoryStore::new();
        let (recovery, valid_len) = recover(&path, &memory)?;
        let wal = Wal::open(&path, mode, valid_len)?;

        info!(
            path = %data_dir.display(),
            mode = mode.description(),
            events = memory.len(),
            "Opened durable event store"
        );

        Ok(Self {
            memory,
            wal: Some(Mutex::new(wal)),
            data_dir: Some(data_dir.to_path_buf()),
            mode,
            recovery,
        })
    }

    /// A store with no log; contents vanish when it is dropped
    pub fn ephemeral() -> Self {
        Self {
            memory: MemoryStore::new(),
            wal: None,
            data_dir: None,
            mode: DurabilityMode::None,
            recovery: RecoveryResult::default(),
        }
    }

    /// fsync every logged mutation now, whatever the mode
    pub fn flush(&self) -> SpanlogResult<()> {
        if let Some(wal) = &self.wal {
            wal.lock().sync()?;
        }
        Ok(())
    }

    /// Directory holding the log, if any
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Durability mode in effect
    pub fn mode(&self) -> DurabilityMode {
        self.mode
    }

    /// What replay found when the store was opened
    pub fn recovery(&self) -> &RecoveryResult {
        &self.recovery
    }

    fn assign_and_log(&self, records: Vec<EventRecord>) -> SpanlogResult<Vec<Event>> {
        let Some(wal) = &self.wal else {
            return self.memory.insert_batch(records);
        };

        let mut wal = wal.lock();
        let first = self.memory.next_id();
        let events: Vec<Event> = records
            .into_iter()
            .enumerate()
            .map(|(offset, record)| {
                record.into_event(EventId::new(first.as_u64() + offset as u64))
            })
            .collect();

        wal.append(&WalEntry::Insert {
            events: events.clone(),
        })?;
        self.memory.apply(events.clone());
        Ok(events)
    }
}

impl EventStore for DurableStore {
    fn insert(&self, record: EventRecord) -> SpanlogResult<Event> {
        self.assign_and_log(vec![record])?
            .pop()
            .ok_or_else(|| SpanlogError::storage("insert produced no event"))
    }

    fn insert_batch(&self, records: Vec<EventRecord>) -> SpanlogResult<Vec<Event>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        self.assign_and_log(records)
    }

    fn find_by_trace(&self, trace_id: &str) -> SpanlogResult<Vec<Event>> {
        self.memory.find_by_trace(trace_id)
    }

    fn find_by_service(&self, service_name: &str) -> SpanlogResult<Vec<Event>> {
        self.memory.find_by_service(service_name)
    }

    fn find_by_status(&self, status: Status) -> SpanlogResult<Vec<Event>> {
        self.memory.find_by_status(status)
    }

    fn find_by_service_and_operation(
        &self,
        service_name: &str,
        operation: &str,
    ) -> SpanlogResult<Vec<Event>> {
        self.memory
            .find_by_service_and_operation(service_name, operation)
    }

    fn find_between(&self, start: Timestamp, end: Timestamp) -> SpanlogResult<Vec<Event>> {
        self.memory.find_between(start, end)
    }

    fn distinct_service_names(&self) -> SpanlogResult<Vec<String>> {
        self.memory.distinct_service_names()
    }

    fn distinct_operations(&self, service_name: &str) -> SpanlogResult<Vec<String>> {
        self.memory.distinct_operations(service_name)
    }

    fn distinct_trace_ids(&self, offset: usize, limit: usize) -> SpanlogResult<Vec<String>> {
        self.memory.distinct_trace_ids(offset, limit)
    }

    fn count_since(&self, since: Timestamp) -> SpanlogResult<u64> {
        self.memory.count_since(since)
    }

    fn count_all(&self) -> SpanlogResult<u64> {
        self.memory.count_all()
    }

    fn delete_before(&self, cutoff: Timestamp) -> SpanlogResult<u64> {
        let Some(wal) = &self.wal else {
            return self.memory.delete_before(cutoff);
        };

        let mut wal = wal.lock();
        wal.append(&WalEntry::DeleteBefore { cutoff })?;
        let deleted = self.memory.delete_before(cutoff)?;
        debug!(cutoff = %cutoff, deleted, "Logged retention sweep");
        Ok(deleted)
    }
}
