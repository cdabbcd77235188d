//! Durability Tests
//!
//! Events, sweeps and id sequencing survive a close/reopen cycle.

use crate::*;
use spanlog::{Config, DurabilityMode};

fn open_strict(dir: &std::path::Path) -> Spanlog {
    let clock = Arc::new(FixedClock::new(base_time()));
    Spanlog::builder()
        .path(dir)
        .strict()
        .clock(clock as Arc<dyn Clock>)
        .open()
        .expect("Failed to open durable collector")
}

#[test]
fn test_events_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let log = open_strict(dir.path());
        log.events.record(event_at("t1", "s1", "svc-a", "call", 0)).unwrap();
        log.events.record(event_at("t1", "s2", "svc-b", "serve", 100)).unwrap();
        log.close().unwrap();
    }

    let log = open_strict(dir.path());
    assert_eq!(log.recovery().events_restored, 2);
    let timeline = log.traces.timeline("t1").unwrap();
    assert_eq!(timeline.total_duration, 100);
    assert_eq!(timeline.service_count, 2);
}

#[test]
fn test_ids_continue_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let first = {
        let log = open_strict(dir.path());
        let id = log.events.record(event("t1", "s1", "svc", "op")).unwrap().id;
        log.close().unwrap();
        id
    };

    let log = open_strict(dir.path());
    let second = log.events.record(event("t2", "s1", "svc", "op")).unwrap().id;
    assert!(second > first);
}

#[test]
fn test_cleanup_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let log = open_strict(dir.path());
        log.events
            .record(RawEvent {
                timestamp: Some(base_time() - Duration::days(10)),
                ..event("old", "s1", "svc", "op")
            })
            .unwrap();
        log.events.record(event("new", "s1", "svc", "op")).unwrap();
        assert_eq!(log.maintenance.cleanup(7).unwrap().deleted_events, 1);
        log.close().unwrap();
    }

    let log = open_strict(dir.path());
    assert!(log.traces.get("old").unwrap().is_empty());
    assert_eq!(log.traces.get("new").unwrap().len(), 1);
    assert_eq!(log.maintenance.health().unwrap().total_events, 1);
}

#[test]
fn test_rejected_batch_leaves_no_trace_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let log = open_strict(dir.path());
        let mut bad = event("t1", "s2", "svc", "op");
        bad.trace_id = None;
        assert!(log
            .events
            .record_batch(vec![event("t1", "s1", "svc", "op"), bad])
            .is_err());
        log.close().unwrap();
    }

    let log = open_strict(dir.path());
    assert_eq!(log.recovery().events_restored, 0);
    assert_eq!(log.maintenance.health().unwrap().total_events, 0);
}

#[test]
fn test_buffered_flush_then_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let log = Spanlog::builder()
            .path(dir.path())
            .buffered_with(60_000, 1_000_000)
            .open()
            .unwrap();
        assert!(matches!(
            log.durability_mode(),
            DurabilityMode::Batched { .. }
        ));
        for i in 0..50 {
            log.events
                .record(event(&format!("t{}", i), "s1", "svc", "op"))
                .unwrap();
        }
        log.flush().unwrap();
    }

    let log = Spanlog::open(dir.path()).unwrap();
    assert_eq!(log.maintenance.health().unwrap().total_events, 50);
}

#[test]
fn test_config_file_opens_durable_store() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("spanlog.toml");
    let data_dir = dir.path().join("data");
    std::fs::write(
        &config_path,
        format!(
            "data_dir = {:?}\n[durability]\nmode = \"strict\"\n[retention]\ndefault_older_than_days = 2\n",
            data_dir.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let log = Spanlog::from_config(config).unwrap();
    assert_eq!(log.path(), Some(data_dir.as_path()));
    assert_eq!(log.durability_mode(), DurabilityMode::Strict);
    log.events.record(event("t1", "s1", "svc", "op")).unwrap();
    assert!(data_dir.join("events.wal").exists());
}

#[test]
fn test_ephemeral_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = Spanlog::builder()
        .path(dir.path().join("never"))
        .no_durability()
        .open()
        .unwrap();
    log.events.record(event("t1", "s1", "svc", "op")).unwrap();
    assert!(log.is_ephemeral());
    assert!(!dir.path().join("never").exists());
}
