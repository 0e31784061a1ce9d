use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use sitewatch_core::next_tick_wait;

fn init_logging() {
    watch_logging::initialize_for_tests();
}

fn at(hour: u32, minute: u32, second: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, second).unwrap()
}

#[test]
fn mid_interval_waits_to_the_next_boundary() {
    init_logging();
    assert_eq!(next_tick_wait(at(10, 7, 0), 15), Duration::from_secs(480));
}

#[test]
fn exact_boundary_waits_a_full_interval() {
    init_logging();
    assert_eq!(next_tick_wait(at(10, 15, 0), 15), Duration::from_secs(900));
}

#[test]
fn end_of_hour_rolls_into_the_next_hour() {
    init_logging();
    assert_eq!(next_tick_wait(at(10, 59, 30), 15), Duration::from_secs(30));
}

#[test]
fn sub_second_offsets_are_trimmed() {
    init_logging();
    let now = at(10, 14, 59) + chrono::TimeDelta::milliseconds(500);
    assert_eq!(next_tick_wait(now, 15), Duration::from_millis(500));
}

#[test]
fn other_intervals_align_too() {
    init_logging();
    // Hourly: always the top of the next hour.
    assert_eq!(next_tick_wait(at(10, 0, 0), 60), Duration::from_secs(3600));
    assert_eq!(next_tick_wait(at(10, 42, 0), 60), Duration::from_secs(18 * 60));
    // Five-minute grid.
    assert_eq!(next_tick_wait(at(10, 13, 20), 5), Duration::from_secs(100));
}

#[test]
fn wait_is_always_positive() {
    init_logging();
    for minute in 0..60 {
        for second in [0, 1, 59] {
            let wait = next_tick_wait(at(10, minute, second), 15);
            assert!(wait > Duration::ZERO, "minute {minute} second {second}");
            assert!(wait <= Duration::from_secs(900));
        }
    }
}
