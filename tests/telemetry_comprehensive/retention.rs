//! Retention Tests
//!
//! Cleanup removes events stamped strictly before now minus N days.

use crate::*;

fn record_days_ago(log: &Spanlog, trace: &str, days: i64) {
    log.events
        .record(RawEvent {
            timestamp: Some(base_time() - Duration::days(days)),
            ..event(trace, "s1", "svc", "op")
        })
        .unwrap();
}

#[test]
fn test_cutoff_is_exclusive() {
    let (log, _) = create_collector();
    record_days_ago(&log, "exactly-seven", 7);
    log.events
        .record(RawEvent {
            timestamp: Some(base_time() - Duration::days(7) - Duration::milliseconds(1)),
            ..event("just-older", "s1", "svc", "op")
        })
        .unwrap();

    let report = log.maintenance.cleanup(7).unwrap();
    assert_eq!(report.deleted_events, 1);
    assert_eq!(report.cutoff_date, base_time() - Duration::days(7));
    assert_eq!(log.traces.get("exactly-seven").unwrap().len(), 1);
    assert!(log.traces.get("just-older").unwrap().is_empty());
}

#[test]
fn test_report_message() {
    let (log, _) = create_collector();
    let report = log.maintenance.cleanup(30).unwrap();
    assert_eq!(report.deleted_events, 0);
    assert_eq!(report.message, "Cleaned up traces older than 30 days");
}

#[test]
fn test_second_sweep_deletes_nothing() {
    let (log, _) = create_collector();
    record_days_ago(&log, "old", 10);
    record_days_ago(&log, "new", 0);

    assert_eq!(log.maintenance.cleanup(7).unwrap().deleted_events, 1);
    assert_eq!(log.maintenance.cleanup(7).unwrap().deleted_events, 0);
}

#[test]
fn test_zero_days_deletes_everything_before_now() {
    let (log, _) = create_collector();
    record_days_ago(&log, "yesterday", 1);
    log.events.record(event("now", "s1", "svc", "op")).unwrap();

    assert_eq!(log.maintenance.cleanup(0).unwrap().deleted_events, 1);
    assert_eq!(log.traces.get("now").unwrap().len(), 1);
}

#[test]
fn test_negative_days_reach_into_the_future() {
    let (log, _) = create_collector();
    record_days_ago(&log, "now", 0);

    let report = log.maintenance.cleanup(-1).unwrap();
    assert_eq!(report.deleted_events, 1);
    assert!(report.cutoff_date > base_time());
}

#[test]
fn test_huge_age_saturates() {
    let (log, _) = create_collector();
    record_days_ago(&log, "old", 3650);

    let report = log.maintenance.cleanup(i64::MAX).unwrap();
    assert_eq!(report.deleted_events, 0);
    assert_eq!(log.maintenance.health().unwrap().total_events, 1);
}

#[test]
fn test_default_age_from_config() {
    let (log, _) = create_collector();
    record_days_ago(&log, "eight", 8);
    record_days_ago(&log, "six", 6);

    let report = log.maintenance.cleanup_default().unwrap();
    assert_eq!(report.deleted_events, 1);
    assert_eq!(report.message, "Cleaned up traces older than 7 days");
}

#[test]
fn test_sweep_updates_every_view() {
    let (log, _) = create_collector();
    record_days_ago(&log, "old", 10);

    log.maintenance.cleanup(7).unwrap();
    assert!(log.services.list().unwrap().is_empty());
    assert_eq!(log.services.metrics("svc").unwrap().request_count, 0);
    assert!(log
        .traces
        .list(spanlog::PageRequest::new(0, 20), &spanlog::TraceFilter::new())
        .unwrap()
        .traces
        .is_empty());
}
