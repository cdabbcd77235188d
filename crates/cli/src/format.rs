//! Output formatting: human-readable or JSON.

use spanlog::{CommandError, Event, Output, ServiceMetrics, Timeline, TracePage};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned text
    Human,
    /// One JSON document per result
    Json,
}

/// Render a command result.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Render a command failure.
pub fn format_error(err: &CommandError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let body = serde_json::json!({
                "error": err,
                "message": err.to_string(),
            });
            body.to_string()
        }
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!("{{\"error\":\"serialization failed: {}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Event(event) => format!("(stored) {}", event_line(event)),
        Output::Events(events) if events.is_empty() => "(empty)".to_string(),
        Output::Events(events) => events
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}) {}", i + 1, event_line(e)))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Timeline(timeline) => timeline_text(timeline),
        Output::TracePage(page) => trace_page_text(page),
        Output::Names(names) if names.is_empty() => "(empty list)".to_string(),
        Output::Names(names) => names
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}) \"{}\"", i + 1, n))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::ServiceMetrics(metrics) => metrics_text(metrics),
        Output::Health(health) => format!(
            "status: {}\ntotal events: {}\nrecent events: {}\nservices ({}): {}\ntimestamp: {}",
            to_json(&health.status).trim_matches('"'),
            health.total_events,
            health.recent_events,
            health.tracked_services,
            health.services.join(", "),
            health.timestamp.to_rfc3339(),
        ),
        Output::Cleanup(report) => format!(
            "{}\ndeleted: {}\ncutoff: {}",
            report.message,
            report.deleted_events,
            report.cutoff_date.to_rfc3339()
        ),
    }
}

fn event_line(e: &Event) -> String {
    let duration = e
        .duration_ms
        .map(|d| format!(" {}ms", d))
        .unwrap_or_default();
    format!(
        "#{} {} {}/{} trace={} span={} {} {}{}",
        e.id,
        e.timestamp.to_rfc3339(),
        e.service_name,
        e.operation,
        e.trace_id,
        e.span_id,
        e.event_type,
        e.status,
        duration
    )
}

fn timeline_text(t: &Timeline) -> String {
    if t.events.is_empty() {
        return format!("trace {}: (empty)", t.trace_id);
    }
    let mut lines = vec![format!(
        "trace {}: {} events, {} services, {}ms",
        t.trace_id,
        t.events.len(),
        t.service_count,
        t.total_duration
    )];
    for entry in &t.events {
        let parent = entry
            .parent_span_id
            .as_deref()
            .map(|p| format!(" <- {}", p))
            .unwrap_or_default();
        let duration = entry
            .duration_ms
            .map(|d| format!(" {}ms", d))
            .unwrap_or_default();
        lines.push(format!(
            "  {} {}/{} span={}{} {}{}",
            entry.timestamp.to_rfc3339(),
            entry.service_name,
            entry.operation,
            entry.span_id,
            parent,
            entry.status,
            duration
        ));
    }
    lines.join("\n")
}

fn trace_page_text(page: &TracePage) -> String {
    let mut lines = vec![format!(
        "page {} (size {}): {} traces",
        page.page, page.size, page.total_matched
    )];
    for (i, s) in page.traces.iter().enumerate() {
        lines.push(format!(
            "{}) {} {} {} spans {}ms [{}]",
            i + 1,
            s.trace_id,
            s.status,
            s.span_count,
            s.duration,
            s.services.join(", ")
        ));
    }
    lines.join("\n")
}

fn metrics_text(m: &ServiceMetrics) -> String {
    let mut lines = vec![
        format!("service: {}", m.service_name),
        format!("requests: {}", m.request_count),
    ];
    if let Some(stats) = &m.stats {
        lines.push(format!("average duration: {}ms", stats.average_duration_ms));
        lines.push(format!("errors: {}", stats.error_count));
        lines.push(format!("error rate: {}%", stats.error_rate));
        for (op, count) in &stats.operation_counts {
            lines.push(format!("  {}: {}", op, count));
        }
    }
    lines.join("\n")
}
