//! Property Tests
//!
//! Ordering, timeline duration, error rate, defaulting and retention
//! checked over generated inputs.

use crate::*;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use spanlog::EventType;

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Success),
        Just(Status::Error),
        Just(Status::Timeout),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_trace_sorted_for_any_insert_order(
        offsets in prop::collection::vec(-100_000i64..100_000, 1..40),
        seed in any::<u64>(),
    ) {
        let (log, _) = create_collector();
        let mut shuffled: Vec<(usize, i64)> = offsets.iter().copied().enumerate().collect();
        shuffled.shuffle(&mut rand::rngs::StdRng::seed_from_u64(seed));

        for (i, ms) in &shuffled {
            log.events.record(event_at("t", &format!("s{}", i), "svc", "op", *ms)).unwrap();
        }

        let trace = log.traces.get("t").unwrap();
        prop_assert_eq!(trace.len(), offsets.len());
        prop_assert!(trace.windows(2).all(|p| p[0].timestamp <= p[1].timestamp));
    }

    #[test]
    fn prop_two_event_timeline_duration(t0 in 0i64..10_000_000, gap in 0i64..10_000_000) {
        let (log, _) = create_collector();
        log.events.record(event_at("t", "late", "svc", "op", t0 + gap)).unwrap();
        log.events.record(event_at("t", "early", "svc", "op", t0)).unwrap();

        let timeline = log.traces.timeline("t").unwrap();
        prop_assert_eq!(timeline.total_duration, gap);
    }

    #[test]
    fn prop_error_rate(statuses in prop::collection::vec(status_strategy(), 1..60)) {
        let (log, _) = create_collector();
        for status in &statuses {
            log.events.record(outcome("svc", "op", *status, 1)).unwrap();
        }

        let errors = statuses.iter().filter(|s| **s == Status::Error).count();
        let expected = ((errors as f64 / statuses.len() as f64 * 100.0) * 100.0 + 0.5).floor() / 100.0;

        let metrics = log.services.metrics("svc").unwrap();
        prop_assert_eq!(metrics.request_count, statuses.len() as u64);
        let stats = metrics.stats.unwrap();
        prop_assert_eq!(stats.error_count, errors as u64);
        prop_assert_eq!(stats.error_rate, expected);
        prop_assert!((0.0..=100.0).contains(&stats.error_rate));
    }

    #[test]
    fn prop_explicit_fields_never_altered(
        ms in -1_000_000_000i64..1_000_000_000,
        status in status_strategy(),
        kind in prop_oneof![Just(EventType::Span), Just(EventType::Log), Just(EventType::Metric)],
    ) {
        let (log, _) = create_collector();
        let stored = log.events.record(RawEvent {
            status: Some(status),
            event_type: Some(kind),
            ..event_at("t", "s", "svc", "op", ms)
        }).unwrap();

        prop_assert_eq!(stored.timestamp, at_ms(ms));
        prop_assert_eq!(stored.status, status);
        prop_assert_eq!(stored.event_type, kind);
    }

    #[test]
    fn prop_cleanup_removes_exactly_older_events(
        ages_hours in prop::collection::vec(0i64..24 * 30, 0..50),
        days in 0i64..30,
    ) {
        let (log, _) = create_collector();
        for (i, hours) in ages_hours.iter().enumerate() {
            log.events.record(RawEvent {
                timestamp: Some(base_time() - Duration::hours(*hours)),
                ..event(&format!("t{}", i), "s", "svc", "op")
            }).unwrap();
        }

        let older = ages_hours.iter().filter(|h| **h > days * 24).count() as u64;
        prop_assert_eq!(log.maintenance.cleanup(days).unwrap().deleted_events, older);
        prop_assert_eq!(
            log.maintenance.health().unwrap().total_events,
            ages_hours.len() as u64 - older
        );
        prop_assert_eq!(log.maintenance.cleanup(days).unwrap().deleted_events, 0);
    }
}
