//! Ingestion Tests
//!
//! Normalization defaults, validation failures, batches, id assignment.

use crate::*;
use spanlog::{Error, EventType};

// =============================================================================
// DEFAULTING
// =============================================================================

#[test]
fn test_missing_optional_fields_defaulted() {
    let (log, clock) = create_collector();
    clock.advance(Duration::seconds(5));

    let stored = log.events.record(event("t1", "s1", "svc", "op")).unwrap();
    assert_eq!(stored.timestamp, base_time() + Duration::seconds(5));
    assert_eq!(stored.status, Status::Success);
    assert_eq!(stored.event_type, EventType::Span);
    assert_eq!(stored.duration_ms, None);
    assert_eq!(stored.parent_span_id, None);
}

#[test]
fn test_explicit_fields_preserved() {
    let (log, _) = create_collector();
    let ts = base_time() - Duration::hours(3);

    let stored = log
        .events
        .record(RawEvent {
            timestamp: Some(ts),
            status: Some(Status::Timeout),
            event_type: Some(EventType::Log),
            duration_ms: Some(0),
            parent_span_id: Some("root".into()),
            http_method: Some("GET".into()),
            http_url: Some("/orders/7".into()),
            http_status_code: Some(504),
            error_message: Some("upstream timed out".into()),
            user_id: Some("u-1".into()),
            correlation_id: Some("c-1".into()),
            metadata: Some("{\"region\":\"eu\"}".into()),
            ..event("t1", "s1", "svc", "op")
        })
        .unwrap();

    assert_eq!(stored.timestamp, ts);
    assert_eq!(stored.status, Status::Timeout);
    assert_eq!(stored.event_type, EventType::Log);
    assert_eq!(stored.duration_ms, Some(0));
    assert_eq!(stored.parent_span_id.as_deref(), Some("root"));
    assert_eq!(stored.http_status_code, Some(504));
    assert_eq!(stored.metadata.as_deref(), Some("{\"region\":\"eu\"}"));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_each_identity_field_required() {
    let (log, _) = create_collector();

    let cases: [(&str, fn(&mut RawEvent)); 4] = [
        ("traceId", |e| e.trace_id = None),
        ("spanId", |e| e.span_id = None),
        ("serviceName", |e| e.service_name = None),
        ("operation", |e| e.operation = None),
    ];

    for (field, clear) in cases {
        let mut raw = event("t1", "s1", "svc", "op");
        clear(&mut raw);
        match log.events.record(raw) {
            Err(Error::Validation { field: reported }) => assert_eq!(reported, field),
            other => panic!("Expected validation error for {}, got {:?}", field, other),
        }
    }

    assert_eq!(log.maintenance.health().unwrap().total_events, 0);
}

#[test]
fn test_empty_strings_accepted() {
    let (log, _) = create_collector();
    let stored = log.events.record(event("", "", "", "")).unwrap();
    assert_eq!(stored.trace_id, "");
    assert_eq!(log.traces.get("").unwrap().len(), 1);
}

// =============================================================================
// BATCHES AND IDS
// =============================================================================

#[test]
fn test_batch_is_all_or_nothing() {
    let (log, _) = create_collector();

    let mut bad = event("t1", "s3", "svc", "op");
    bad.operation = None;
    let err = log
        .events
        .record_batch(vec![
            event("t1", "s1", "svc", "op"),
            event("t1", "s2", "svc", "op"),
            bad,
        ])
        .unwrap_err();

    assert!(err.is_validation());
    assert!(log.traces.get("t1").unwrap().is_empty());
}

#[test]
fn test_batch_stores_in_order() {
    let (log, _) = create_collector();

    let stored = log
        .events
        .record_batch(vec![
            event_at("t1", "s1", "a", "x", 0),
            event_at("t2", "s1", "b", "y", 10),
        ])
        .unwrap();

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].id, stored[0].id.next());
    assert_eq!(log.services.list().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_empty_batch() {
    let (log, _) = create_collector();
    assert!(log.events.record_batch(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_ids_strictly_increase() {
    let (log, _) = create_collector();
    let mut last = None;
    for i in 0..20 {
        let id = log
            .events
            .record(event(&format!("t{}", i), "s", "svc", "op"))
            .unwrap()
            .id;
        if let Some(prev) = last {
            assert!(id > prev);
        }
        last = Some(id);
    }
}
