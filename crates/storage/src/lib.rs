//! Storage layer for spanlog
//!
//! This crate implements the event store side of the collector:
//! - [`EventStore`]: the adapter contract every backend satisfies
//! - [`MemoryStore`]: BTreeMap-based storage behind a RwLock
//! - Secondary indices by trace and by service ([`index`])
//!
//! The durable, WAL-backed store lives in `spanlog-durability` and wraps a
//! [`MemoryStore`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod memory;
pub mod store;

pub use index::SecondaryIndex;
pub use memory::MemoryStore;
pub use store::EventStore;
