//! Command handlers, one module per area.
//!
//! Handlers are thin: they call one engine operation and wrap the result in
//! the matching [`Output`](crate::Output) variant. Store and validation
//! errors convert through `From<SpanlogError>`.

pub mod ingest;
pub mod maintenance;
pub mod queries;
pub mod services;
pub mod traces;
