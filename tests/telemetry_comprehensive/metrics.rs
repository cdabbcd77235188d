//! Service Metrics Tests

use crate::*;

#[test]
fn test_unknown_service_reports_zero_only() {
    let (log, _) = create_collector();

    let metrics = log.services.metrics("ghost").unwrap();
    assert_eq!(metrics.request_count, 0);
    assert!(metrics.stats.is_none());

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"serviceName": "ghost", "requestCount": 0})
    );
}

#[test]
fn test_error_rate_rounds_to_two_decimals() {
    let (log, _) = create_collector();
    log.events.record(outcome("svc", "op", Status::Error, 10)).unwrap();
    log.events.record(outcome("svc", "op", Status::Success, 10)).unwrap();
    log.events.record(outcome("svc", "op", Status::Success, 10)).unwrap();

    let stats = log.services.metrics("svc").unwrap().stats.unwrap();
    assert_eq!(stats.error_count, 1);
    assert_eq!(stats.error_rate, 33.33);
}

#[test]
fn test_timeout_is_not_an_error() {
    let (log, _) = create_collector();
    log.events.record(outcome("svc", "op", Status::Timeout, 10)).unwrap();

    let stats = log.services.metrics("svc").unwrap().stats.unwrap();
    assert_eq!(stats.error_count, 0);
    assert_eq!(stats.error_rate, 0.0);
}

#[test]
fn test_average_ignores_events_without_duration() {
    let (log, _) = create_collector();
    log.events.record(outcome("svc", "op", Status::Success, 10)).unwrap();
    log.events.record(outcome("svc", "op", Status::Success, 21)).unwrap();
    log.events.record(event("t9", "s1", "svc", "op")).unwrap();

    let metrics = log.services.metrics("svc").unwrap();
    assert_eq!(metrics.request_count, 3);
    // (10 + 21) / 2 = 15.5 rounds up
    assert_eq!(metrics.stats.unwrap().average_duration_ms, 16);
}

#[test]
fn test_average_zero_when_no_durations() {
    let (log, _) = create_collector();
    log.events.record(event("t1", "s1", "svc", "op")).unwrap();

    let stats = log.services.metrics("svc").unwrap().stats.unwrap();
    assert_eq!(stats.average_duration_ms, 0);
}

#[test]
fn test_operation_counts_and_listings() {
    let (log, _) = create_collector();
    log.events.record(outcome("api", "get", Status::Success, 1)).unwrap();
    log.events.record(outcome("api", "get", Status::Success, 1)).unwrap();
    log.events.record(outcome("api", "put", Status::Success, 1)).unwrap();
    log.events.record(outcome("db", "query", Status::Success, 1)).unwrap();

    let stats = log.services.metrics("api").unwrap().stats.unwrap();
    assert_eq!(stats.operation_counts.get("get"), Some(&2));
    assert_eq!(stats.operation_counts.get("put"), Some(&1));
    assert_eq!(stats.operation_counts.len(), 2);

    assert_eq!(log.services.list().unwrap(), vec!["api", "db"]);
    assert_eq!(log.services.operations("api").unwrap(), vec!["get", "put"]);
    assert!(log.services.operations("ghost").unwrap().is_empty());
}

#[test]
fn test_metrics_scoped_to_service() {
    let (log, _) = create_collector();
    log.events.record(outcome("api", "get", Status::Error, 100)).unwrap();
    log.events.record(outcome("db", "query", Status::Success, 2)).unwrap();

    let db = log.services.metrics("db").unwrap();
    assert_eq!(db.request_count, 1);
    let stats = db.stats.unwrap();
    assert_eq!(stats.error_count, 0);
    assert_eq!(stats.average_duration_ms, 2);
}
