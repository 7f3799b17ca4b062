use chrono::{Duration, TimeZone, Utc};
use folio_types::{Clock, ManualClock, SystemClock, Timestamps};
use proptest::prelude::*;

fn instant(secs: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

// ── Timestamps ────────────────────────────────────────────────────

#[test]
fn fresh_timestamps_are_new() {
    let ts = Timestamps::new();
    assert!(ts.is_new());
    assert_eq!(ts.created, None);
    assert_eq!(ts.updated, None);
    assert_eq!(ts, Timestamps::default());
}

#[test]
fn first_touch_sets_both_to_same_instant() {
    let mut ts = Timestamps::new();
    ts.touch(instant(0));
    assert!(!ts.is_new());
    assert_eq!(ts.created, Some(instant(0)));
    assert_eq!(ts.updated, Some(instant(0)));
}

#[test]
fn later_touch_moves_only_updated() {
    let mut ts = Timestamps::new();
    ts.touch(instant(0));
    ts.touch(instant(30));
    assert_eq!(ts.created, Some(instant(0)));
    assert_eq!(ts.updated, Some(instant(30)));
}

#[test]
fn unsaved_timestamps_serialize_to_empty_object() {
    let json = serde_json::to_value(Timestamps::new()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

proptest! {
    #[test]
    fn created_never_changes_after_first_touch(offsets in prop::collection::vec(0i64..10_000, 1..20)) {
        let mut ts = Timestamps::new();
        let first = instant(offsets[0]);
        for offset in &offsets {
            ts.touch(instant(*offset));
        }
        prop_assert_eq!(ts.created, Some(first));
        prop_assert_eq!(ts.updated, Some(instant(*offsets.last().unwrap())));
    }
}

// ── Clocks ────────────────────────────────────────────────────────

#[test]
fn manual_clock_is_frozen_until_advanced() {
    let clock = ManualClock::new(instant(0));
    assert_eq!(clock.now(), clock.now());
    clock.advance(Duration::seconds(5));
    assert_eq!(clock.now(), instant(5));
}

#[test]
fn manual_clock_set_jumps() {
    let clock = ManualClock::new(instant(0));
    clock.set(instant(100));
    assert_eq!(clock.now(), instant(100));
}

#[test]
fn system_clock_does_not_go_backwards() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
