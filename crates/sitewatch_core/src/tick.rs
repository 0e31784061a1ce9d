use std::time::Duration;

use chrono::{DateTime, TimeDelta, Timelike, Utc};

/// How long to sleep from `now` until the next aligned tick.
///
/// The next boundary is the smallest multiple of `interval_minutes` strictly
/// greater than the current minute-of-hour; at or past minute 60 it rolls
/// into the next hour with the minute wrapping modulo 60. Seconds and
/// sub-seconds of the target are zero, so a sweep at exactly :15 waits a
/// full interval rather than zero.
pub fn next_tick_wait(now: DateTime<Utc>, interval_minutes: u32) -> Duration {
    let interval = interval_minutes.max(1);
    let fallback = Duration::from_secs(u64::from(interval) * 60);

    let next_minute = (now.minute() / interval + 1) * interval;
    let (add_hours, minute) = if next_minute >= 60 {
        (1, next_minute % 60)
    } else {
        (0, next_minute)
    };

    let Some(target) = now
        .with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .map(|t| t + TimeDelta::hours(add_hours))
    else {
        return fallback;
    };

    let mut wait = target.signed_duration_since(now);
    // Clock skew or a degenerate interval must still make forward progress.
    if wait <= TimeDelta::zero() {
        wait = wait + TimeDelta::seconds(i64::from(interval) * 60);
    }
    wait.to_std().unwrap_or(fallback)
}
