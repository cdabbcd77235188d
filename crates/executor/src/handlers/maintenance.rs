//! Health and retention command handlers.

use spanlog_engine::TelemetryEngine;
use tracing::info;

use crate::{Output, Result};

/// Handle GetHealth command.
pub fn health(engine: &TelemetryEngine) -> Result<Output> {
    Ok(Output::Health(engine.health()?))
}

/// Handle Cleanup command.
///
/// Negative ages are passed through; they move the cutoff into the future.
pub fn cleanup(engine: &TelemetryEngine, older_than_days: i64) -> Result<Output> {
    if older_than_days < 0 {
        info!(older_than_days, "Cleanup requested with a negative age");
    }
    Ok(Output::Cleanup(engine.cleanup(older_than_days)?))
}
