//! Output enum: one shape per result kind.

use serde::Serialize;
use spanlog_core::{
    CleanupReport, Event, HealthSnapshot, ServiceMetrics, Timeline, TracePage,
};

/// Result of a [`Command`](crate::Command)
///
/// Serializes untagged: the JSON is exactly the wrapped view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// One stored event
    Event(Event),
    /// Stored events
    Events(Vec<Event>),
    /// Trace timeline
    Timeline(Timeline),
    /// Page of trace summaries
    TracePage(TracePage),
    /// Service or operation names
    Names(Vec<String>),
    /// Service statistics
    ServiceMetrics(ServiceMetrics),
    /// Health snapshot
    Health(HealthSnapshot),
    /// Retention sweep report
    Cleanup(CleanupReport),
}

impl Output {
    /// Variant name, for logging and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Event(_) => "Event",
            Output::Events(_) => "Events",
            Output::Timeline(_) => "Timeline",
            Output::TracePage(_) => "TracePage",
            Output::Names(_) => "Names",
            Output::ServiceMetrics(_) => "ServiceMetrics",
            Output::Health(_) => "Health",
            Output::Cleanup(_) => "Cleanup",
        }
    }
}
