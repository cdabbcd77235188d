//! Grouped operations exposed as fields on [`Spanlog`](crate::Spanlog).
//!
//! - `db.events` - ingestion and raw event queries
//! - `db.traces` - per-trace views and paged summaries
//! - `db.services` - listings and per-service metrics
//! - `db.maintenance` - health and retention

mod events;
mod maintenance;
mod services;
mod traces;

pub use events::Events;
pub use maintenance::Maintenance;
pub use services::Services;
pub use traces::Traces;
