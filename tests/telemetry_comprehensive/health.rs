//! Health Tests

use crate::*;
use spanlog::HealthStatus;

#[test]
fn test_empty_collector_is_healthy() {
    let (log, _) = create_collector();
    let health = log.maintenance.health().unwrap();
    assert_eq!(health.status, HealthStatus::Healthy);
    assert_eq!(health.total_events, 0);
    assert_eq!(health.recent_events, 0);
    assert_eq!(health.tracked_services, 0);
    assert_eq!(health.timestamp, base_time());
}

#[test]
fn test_recent_window_is_one_hour_exclusive() {
    let (log, _) = create_collector();
    for (trace, minutes) in [("now", 0), ("half", 30), ("edge", 60), ("old", 90)] {
        log.events
            .record(RawEvent {
                timestamp: Some(base_time() - Duration::minutes(minutes)),
                ..event(trace, "s1", "svc", "op")
            })
            .unwrap();
    }

    let health = log.maintenance.health().unwrap();
    assert_eq!(health.total_events, 4);
    assert_eq!(health.recent_events, 2);
}

#[test]
fn test_recent_follows_the_clock() {
    let (log, clock) = create_collector();
    log.events.record(event("t1", "s1", "svc", "op")).unwrap();
    assert_eq!(log.maintenance.health().unwrap().recent_events, 1);

    clock.advance(Duration::hours(2));
    let health = log.maintenance.health().unwrap();
    assert_eq!(health.recent_events, 0);
    assert_eq!(health.total_events, 1);
}

#[test]
fn test_services_listed() {
    let (log, _) = create_collector();
    log.events.record(event("t1", "s1", "web", "op")).unwrap();
    log.events.record(event("t1", "s2", "auth", "op")).unwrap();
    log.events.record(event("t2", "s1", "web", "op")).unwrap();

    let health = log.maintenance.health().unwrap();
    assert_eq!(health.tracked_services, 2);
    assert_eq!(health.services, vec!["auth", "web"]);

    let json = serde_json::to_value(&health).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["trackedServices"], 2);
}
