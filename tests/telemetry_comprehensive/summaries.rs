//! Trace Summary Listing Tests
//!
//! Paging is applied to trace ids before filtering, so a filtered page can
//! come back short.

use crate::*;
use spanlog::{PageRequest, TraceFilter};

fn seed(log: &Spanlog) {
    // a: gateway only, success
    log.events.record(event_at("a", "s1", "gateway", "route", 0)).unwrap();
    // b: gateway -> orders, one error
    log.events.record(event_at("b", "s1", "gateway", "route", 0)).unwrap();
    log.events
        .record(RawEvent {
            status: Some(Status::Error),
            ..event_at("b", "s2", "orders", "create", 50)
        })
        .unwrap();
    // c: orders only, timeout
    log.events
        .record(RawEvent {
            status: Some(Status::Timeout),
            ..event_at("c", "s1", "orders", "list", 10)
        })
        .unwrap();
}

fn ids(page: &spanlog::TracePage) -> Vec<&str> {
    page.traces.iter().map(|t| t.trace_id.as_str()).collect()
}

#[test]
fn test_unfiltered_listing() {
    let (log, _) = create_collector();
    seed(&log);

    let page = log
        .traces
        .list(PageRequest::new(0, 20), &TraceFilter::new())
        .unwrap();
    assert_eq!(ids(&page), vec!["a", "b", "c"]);
    assert_eq!(page.total_matched, 3);
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 20);

    let b = &page.traces[1];
    assert_eq!(b.span_count, 2);
    assert_eq!(b.duration, 50);
    assert_eq!(b.services, vec!["gateway", "orders"]);
    assert_eq!(b.operations, vec!["route", "create"]);
    assert_eq!(b.status, Status::Error);

    // TIMEOUT alone does not make a trace an error
    assert_eq!(page.traces[2].status, Status::Success);
}

#[test]
fn test_filters_combine() {
    let (log, _) = create_collector();
    seed(&log);

    let by_service = log
        .traces
        .list(PageRequest::new(0, 20), &TraceFilter::new().service("orders"))
        .unwrap();
    assert_eq!(ids(&by_service), vec!["b", "c"]);

    let both = log
        .traces
        .list(
            PageRequest::new(0, 20),
            &TraceFilter::new().service("orders").status("ERROR"),
        )
        .unwrap();
    assert_eq!(ids(&both), vec!["b"]);

    let by_timeout = log
        .traces
        .list(PageRequest::new(0, 20), &TraceFilter::new().status("TIMEOUT"))
        .unwrap();
    assert_eq!(ids(&by_timeout), vec!["c"]);
}

#[test]
fn test_filters_check_each_field_independently() {
    let (log, _) = create_collector();
    seed(&log);

    // "b" has an orders event and a route event, just not the same event
    let page = log
        .traces
        .list(
            PageRequest::new(0, 20),
            &TraceFilter::new().service("orders").operation("route"),
        )
        .unwrap();
    assert_eq!(ids(&page), vec!["b"]);
}

#[test]
fn test_status_filter_is_case_sensitive() {
    let (log, _) = create_collector();
    seed(&log);

    let page = log
        .traces
        .list(PageRequest::new(0, 20), &TraceFilter::new().status("error"))
        .unwrap();
    assert!(page.traces.is_empty());
    assert_eq!(page.total_matched, 0);
}

#[test]
fn test_paging_happens_before_filtering() {
    let (log, _) = create_collector();
    seed(&log);

    // page 0 of size 2 is {a, b}; only b touches orders
    let first = log
        .traces
        .list(PageRequest::new(0, 2), &TraceFilter::new().service("orders"))
        .unwrap();
    assert_eq!(ids(&first), vec!["b"]);
    assert_eq!(first.total_matched, 1);

    let second = log
        .traces
        .list(PageRequest::new(1, 2), &TraceFilter::new().service("orders"))
        .unwrap();
    assert_eq!(ids(&second), vec!["c"]);

    let beyond = log
        .traces
        .list(PageRequest::new(5, 2), &TraceFilter::new())
        .unwrap();
    assert!(beyond.traces.is_empty());
}
