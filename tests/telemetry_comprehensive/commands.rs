//! Command Tests
//!
//! The executor reachable from the facade runs against the same events.

use crate::*;
use spanlog::{Command, CommandError, Output};

#[test]
fn test_facade_and_commands_share_state() {
    let (log, _) = create_collector();
    log.events.record(event_at("t1", "s1", "svc", "op", 0)).unwrap();

    let output = log
        .executor()
        .execute(Command::GetTrace {
            trace_id: "t1".into(),
        })
        .unwrap();
    match output {
        Output::Events(events) => assert_eq!(events.len(), 1),
        other => panic!("Expected Events, got {}", other.kind()),
    }

    log.executor()
        .execute(Command::RecordEvent {
            event: event_at("t1", "s2", "svc", "op", 10),
        })
        .unwrap();
    assert_eq!(log.traces.get("t1").unwrap().len(), 2);
}

#[test]
fn test_json_commands() {
    let (log, _) = create_collector();
    let executor = log.executor();

    executor
        .execute_json(
            r#"{"command":"RecordEventsBatch","events":[
                {"traceId":"t1","spanId":"s1","serviceName":"svc-a","operation":"call","timestamp":"2024-11-05T14:00:00Z"},
                {"traceId":"t1","spanId":"s2","serviceName":"svc-b","operation":"serve","timestamp":"2024-11-05T14:00:00.100Z"}
            ]}"#,
        )
        .unwrap();

    let timeline = serde_json::to_value(
        executor
            .execute_json(r#"{"command":"GetTimeline","traceId":"t1"}"#)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(timeline["totalDuration"], 100);
    assert_eq!(timeline["serviceCount"], 2);

    let page = serde_json::to_value(
        executor
            .execute_json(r#"{"command":"ListTraces","service":"svc-b"}"#)
            .unwrap(),
    )
    .unwrap();
    assert_eq!(page["totalMatched"], 1);
    assert_eq!(page["traces"][0]["traceId"], "t1");
}

#[test]
fn test_command_errors() {
    let (log, _) = create_collector();

    let err = log
        .executor()
        .execute_json(r#"{"command":"RecordEvent","event":{"traceId":"t1"}}"#)
        .unwrap_err();
    assert_eq!(
        err,
        CommandError::Validation {
            field: "spanId".into()
        }
    );

    let err = log
        .executor()
        .execute_json(r#"{"command":"Explode"}"#)
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_ARGUMENT");
}
