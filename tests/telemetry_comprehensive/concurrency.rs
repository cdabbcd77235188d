//! Concurrency Tests
//!
//! Writers and readers share one collector across threads.

use crate::*;
use std::thread;

#[test]
fn test_parallel_writers_lose_nothing() {
    let (log, _) = create_collector();
    let log = Arc::new(log);

    let handles: Vec<_> = (0..8)
        .map(|w| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..100 {
                    log.events
                        .record(event_at(
                            &format!("w{}", w),
                            &format!("s{}", i),
                            &format!("svc-{}", w % 2),
                            "op",
                            i,
                        ))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(log.maintenance.health().unwrap().total_events, 800);
    for w in 0..8 {
        let trace = log.traces.get(&format!("w{}", w)).unwrap();
        assert_eq!(trace.len(), 100);
        assert!(trace.windows(2).all(|p| p[0].timestamp <= p[1].timestamp));
    }
    assert_eq!(log.services.metrics("svc-0").unwrap().request_count, 400);
}

#[test]
fn test_ids_unique_under_contention() {
    let (log, _) = create_collector();
    let log = Arc::new(log);

    let handles: Vec<_> = (0..4)
        .map(|w| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                (0..50)
                    .map(|i| {
                        log.events
                            .record(event(&format!("t{}-{}", w, i), "s", "svc", "op"))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_readers_see_whole_batches() {
    let (log, _) = create_collector();
    let log = Arc::new(log);

    let writer = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for b in 0..50 {
                let batch = (0..4)
                    .map(|s| event_at(&format!("b{}", b), &format!("s{}", s), "svc", "op", s))
                    .collect();
                log.events.record_batch(batch).unwrap();
            }
        })
    };

    let reader = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for _ in 0..200 {
                let total = log.maintenance.health().unwrap().total_events;
                assert_eq!(total % 4, 0, "observed a partial batch");
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(log.maintenance.health().unwrap().total_events, 200);
}

#[test]
fn test_sweep_concurrent_with_listing() {
    let (log, _) = create_collector();
    for i in 0..100 {
        log.events
            .record(RawEvent {
                timestamp: Some(base_time() - Duration::days(30)),
                ..event(&format!("t{:03}", i), "s", "svc", "op")
            })
            .unwrap();
    }
    let log = Arc::new(log);

    let sweeper = {
        let log = Arc::clone(&log);
        thread::spawn(move || log.maintenance.cleanup(7).unwrap().deleted_events)
    };
    let lister = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for _ in 0..20 {
                let page = log
                    .traces
                    .list(spanlog::PageRequest::new(0, 100), &spanlog::TraceFilter::new())
                    .unwrap();
                assert!(page.traces.iter().all(|t| t.span_count == 1));
            }
        })
    };

    assert_eq!(sweeper.join().unwrap(), 100);
    lister.join().unwrap();
}
