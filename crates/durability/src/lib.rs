//! Durability layer for spanlog
//!
//! This crate makes the in-memory event store survive restarts:
//! - WAL: append-only log of inserts and retention sweeps
//! - Frames: length prefix plus CRC32 over a bincode payload
//! - Durability modes: None, Strict, Batched (default)
//! - Recovery: replay the log into a fresh `MemoryStore` on open

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mode;
pub mod recovery;
pub mod store;
pub mod wal;

pub use mode::DurabilityMode;
pub use recovery::RecoveryResult;
pub use store::DurableStore;
pub use wal::{Wal, WalEntry, WAL_FILE_NAME};
