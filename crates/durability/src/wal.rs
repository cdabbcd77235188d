//! WAL (Write-Ahead Log) entries and file operations
//!
//! The log is a single append-only file, `events.wal`, inside the data
//! directory. Every state change is one frame:
//!
//! ```text
//! +-----------+-----------+---------------------------+
//! | len: u32  | crc: u32  | payload: bincode(WalEntry) |
//! +-----------+-----------+---------------------------+
//! ```
//!
//! Both header fields are little-endian; `crc` is CRC32 over the payload.
//!
//! Reading stops cleanly at a torn tail (a frame cut short by a crash).
//! A complete frame whose checksum does not match is corruption, not a torn
//! write, and fails the read.

use crate::mode::DurabilityMode;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use spanlog_core::{Event, SpanlogError, SpanlogResult, Timestamp};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, warn};

/// Log file name inside the data directory
pub const WAL_FILE_NAME: &str = "events.wal";

/// Frame header: length + checksum
pub const FRAME_HEADER_LEN: usize = 8;

/// Upper bound on a single payload; anything larger is garbage
const MAX_PAYLOAD_LEN: usize = 256 * 1024 * 1024;

/// WAL entry types
///
/// Inserts carry the events with their final ids so replay reproduces the
/// exact store, identifiers included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WalEntry {
    /// Events appended by one insert or batch insert
    Insert {
        /// Events in assignment order
        events: Vec<Event>,
    },

    /// Retention sweep
    DeleteBefore {
        /// Events stamped strictly before this were removed
        cutoff: Timestamp,
    },
}

impl WalEntry {
    /// Number of events carried by an insert entry
    pub fn event_count(&self) -> usize {
        match self {
            WalEntry::Insert { events } => events.len(),
            WalEntry::DeleteBefore { .. } => 0,
        }
    }
}

/// Encode one entry as a complete frame
pub fn encode_frame(entry: &WalEntry) -> SpanlogResult<Vec<u8>> {
    let payload =
        bincode::serialize(entry).map_err(|e| SpanlogError::serialization(e.to_string()))?;
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(SpanlogError::invalid_input(format!(
            "WAL entry of {} bytes exceeds the {} byte frame limit",
            payload.len(),
            MAX_PAYLOAD_LEN
        )));
    }

    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
    frame.write_u32::<LittleEndian>(payload.len() as u32)?;
    frame.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decode the frame at the start of `bytes`
///
/// Returns `Ok(None)` when `bytes` holds less than one complete frame,
/// otherwise the entry and the number of bytes it occupied.
pub fn decode_frame(bytes: &[u8]) -> SpanlogResult<Option<(WalEntry, usize)>> {
    if bytes.len() < FRAME_HEADER_LEN {
        return Ok(None);
    }

    let len = LittleEndian::read_u32(&bytes[0..4]) as usize;
    let crc = LittleEndian::read_u32(&bytes[4..8]);
    if len > MAX_PAYLOAD_LEN {
        return Err(SpanlogError::corruption(format!(
            "frame length {} exceeds limit",
            len
        )));
    }

    let end = FRAME_HEADER_LEN + len;
    if bytes.len() < end {
        return Ok(None);
    }

    let payload = &bytes[FRAME_HEADER_LEN..end];
    let actual = crc32fast::hash(payload);
    if actual != crc {
        return Err(SpanlogError::corruption(format!(
            "checksum mismatch: stored {:#010x}, computed {:#010x}",
            crc, actual
        )));
    }

    let entry: WalEntry = bincode::deserialize(payload)
        .map_err(|e| SpanlogError::corruption(format!("undecodable entry: {}", e)))?;
    Ok(Some((entry, end)))
}

/// Everything readable from a log file
#[derive(Debug, Default)]
pub struct WalContents {
    /// Entries in append order
    pub entries: Vec<WalEntry>,
    /// Length of the well-formed prefix
    pub valid_len: u64,
    /// Bytes after the well-formed prefix (a torn final frame)
    pub torn_bytes: u64,
}

/// Read every complete frame of the log at `path`
///
/// A missing file reads as empty.
pub fn read_wal(path: &Path) -> SpanlogResult<WalContents> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(WalContents::default()),
        Err(e) => return Err(e.into()),
    };

    let mut contents = WalContents::default();
    let mut offset = 0usize;
    while offset < bytes.len() {
        match decode_frame(&bytes[offset..]) {
            Ok(Some((entry, used))) => {
                contents.entries.push(entry);
                offset += used;
            }
            Ok(None) => break,
            Err(e) => {
                return Err(SpanlogError::corruption(format!(
                    "{} at offset {}: {}",
                    path.display(),
                    offset,
                    e
                )))
            }
        }
    }

    contents.valid_len = offset as u64;
    contents.torn_bytes = (bytes.len() - offset) as u64;
    debug!(
        path = %path.display(),
        entries = contents.entries.len(),
        valid_len = contents.valid_len,
        "Read WAL"
    );
    Ok(contents)
}

/// Append-only log writer
///
/// Each append is written to the OS in one call; fsync follows the
/// configured [`DurabilityMode`].
///
/// A failed append leaves the file as it was before the call: the partial
/// frame is cut off again. When the cut itself fails, or an fsync fails,
/// the writer is poisoned and refuses every later append until the store
/// is reopened and the log re-read.
#[derive(Debug)]
pub struct Wal {
    path: PathBuf,
    file: File,
    mode: DurabilityMode,
    len: u64,
    pending: usize,
    last_sync: Instant,
    poisoned: bool,
}

impl Wal {
    /// Open (creating if needed) the log at `path` for appending
    ///
    /// Bytes past `valid_len` are cut off first so new frames never follow
    /// a torn one.
    pub fn open(path: &Path, mode: DurabilityMode, valid_len: u64) -> SpanlogResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(path)?;

        let len = file.metadata()?.len();
        if len > valid_len {
            warn!(
                path = %path.display(),
                dropped = len - valid_len,
                "Truncating torn WAL tail"
            );
            file.set_len(valid_len)?;
            file.sync_all()?;
        }

        let file = OpenOptions::new().append(true).open(path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            path: path.to_path_buf(),
            file,
            mode,
            len,
            pending: 0,
            last_sync: Instant::now(),
            poisoned: false,
        })
    }

    /// Append one entry, syncing if the mode calls for it
    ///
    /// On error nothing of `entry` remains in the log.
    pub fn append(&mut self, entry: &WalEntry) -> SpanlogResult<()> {
        self.check_usable()?;
        let frame = encode_frame(entry)?;

        if let Err(e) = self.file.write_all(&frame) {
            self.rollback();
            return Err(e.into());
        }

        if self
            .mode
            .should_sync(self.pending + 1, self.last_sync.elapsed())
        {
            if let Err(e) = self.file.sync_data() {
                self.rollback();
                self.poison("fsync failed");
                return Err(e.into());
            }
            self.pending = 0;
            self.last_sync = Instant::now();
        } else {
            self.pending += 1;
        }

        self.len += frame.len() as u64;
        Ok(())
    }

    /// fsync everything appended so far
    pub fn sync(&mut self) -> SpanlogResult<()> {
        if self.pending == 0 {
            return Ok(());
        }
        self.check_usable()?;
        if let Err(e) = self.file.sync_data() {
            self.poison("fsync failed");
            return Err(e.into());
        }
        self.pending = 0;
        self.last_sync = Instant::now();
        Ok(())
    }

    /// Cut the file back to the end of the last complete append
    fn rollback(&mut self) {
        if let Err(e) = self.file.set_len(self.len) {
            self.poison("could not discard a partial frame");
            warn!(path = %self.path.display(), error = %e, "WAL rollback failed");
        }
    }

    fn poison(&mut self, reason: &str) {
        if !self.poisoned {
            error!(path = %self.path.display(), reason, "WAL disabled");
        }
        self.poisoned = true;
    }

    fn check_usable(&self) -> SpanlogResult<()> {
        if self.poisoned {
            return Err(SpanlogError::storage(format!(
                "{} is unusable after a failed write; reopen the store",
                self.path.display()
            )));
        }
        Ok(())
    }

    /// Check if an earlier failure disabled this writer
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Bytes of complete frames in the log
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Check if the log holds no frames
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends not yet fsynced
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Wal {
    fn drop(&mut self) {
        if self.poisoned {
            return;
        }
        if let Err(e) = self.sync() {
            warn!(path = %self.path.display(), error = %e, "Failed to sync WAL on close");
        }
    }
}
