//! ArgMatches → Command conversion.

use chrono::{DateTime, Utc};
use clap::ArgMatches;
use spanlog::{Command, EventType, RawEvent, Status, Timestamp};
use std::io::Read;
use std::str::FromStr;

/// Convert clap ArgMatches into a collector command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "record" => Ok(Command::RecordEvent {
            event: parse_raw_event(m)?,
        }),
        "record-batch" => {
            let file = required(m, "file")?;
            Ok(Command::RecordEventsBatch {
                events: read_batch(&file)?,
            })
        }
        "trace" => Ok(Command::GetTrace {
            trace_id: required(m, "trace-id")?,
        }),
        "timeline" => Ok(Command::GetTimeline {
            trace_id: required(m, "trace-id")?,
        }),
        "traces" => Ok(Command::ListTraces {
            page: number(m, "page")?,
            size: number(m, "size")?,
            service: optional(m, "service"),
            operation: optional(m, "operation"),
            status: optional(m, "status"),
        }),
        "services" => Ok(Command::ListServices),
        "operations" => Ok(Command::ListOperations {
            service_name: required(m, "service")?,
        }),
        "metrics" => Ok(Command::GetServiceMetrics {
            service_name: required(m, "service")?,
        }),
        "health" => Ok(Command::GetHealth),
        "cleanup" => Ok(Command::Cleanup {
            older_than_days: number(m, "older-than-days")?,
        }),
        "find-status" => Ok(Command::FindByStatus {
            status: parse_status(&required(m, "status")?)?,
        }),
        "find-operation" => Ok(Command::FindByServiceAndOperation {
            service_name: required(m, "service")?,
            operation: required(m, "operation")?,
        }),
        "find-between" => Ok(Command::FindBetween {
            start: parse_timestamp(&required(m, "start")?)?,
            end: parse_timestamp(&required(m, "end")?)?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =========================================================================
// Event fields
// =========================================================================

fn parse_raw_event(m: &ArgMatches) -> Result<RawEvent, String> {
    Ok(RawEvent {
        trace_id: optional(m, "trace-id"),
        span_id: optional(m, "span-id"),
        parent_span_id: optional(m, "parent-span-id"),
        service_name: optional(m, "service"),
        operation: optional(m, "operation"),
        event_type: optional(m, "type")
            .map(|s| EventType::from_str(&s.to_ascii_uppercase()).map_err(|e| e.to_string()))
            .transpose()?,
        timestamp: optional(m, "timestamp")
            .map(|s| parse_timestamp(&s))
            .transpose()?,
        duration_ms: number(m, "duration-ms")?,
        status: optional(m, "status")
            .map(|s| parse_status(&s))
            .transpose()?,
        metadata: optional(m, "metadata"),
        http_method: optional(m, "http-method"),
        http_url: optional(m, "http-url"),
        http_status_code: number(m, "http-status")?,
        error_message: optional(m, "error-message"),
        user_id: optional(m, "user-id"),
        correlation_id: optional(m, "correlation-id"),
    })
}

fn read_batch(file: &str) -> Result<Vec<RawEvent>, String> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Cannot read stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(file).map_err(|e| format!("Cannot read {}: {}", file, e))?
    };
    serde_json::from_str(&text).map_err(|e| format!("Invalid event batch: {}", e))
}

// =========================================================================
// Argument helpers
// =========================================================================

fn optional(m: &ArgMatches, name: &str) -> Option<String> {
    m.get_one::<String>(name).cloned()
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    optional(m, name).ok_or_else(|| format!("Missing argument: {}", name))
}

fn number<T>(m: &ArgMatches, name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(m, name)
        .map(|s| s.parse::<T>())
        .transpose()
        .map_err(|e| format!("Invalid {}: {}", name, e))
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::from_str(&s.to_ascii_uppercase()).map_err(|e| e.to_string())
}

fn parse_timestamp(s: &str) -> Result<Timestamp, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp `{}`: {}", s, e))
}
