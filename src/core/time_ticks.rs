use chrono::{Datelike, TimeZone, Utc};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};

const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// 1970-01-04 was the first Sunday after the epoch.
const SUNDAY_OFFSET: f64 = 3.0 * DAY;

/// Calendar-aware tick interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeTickInterval {
    /// Fixed step in seconds, aligned to multiples of the step since the epoch.
    Seconds(f64),
    /// Sunday-aligned weeks.
    Weeks(u32),
    /// First day of every `n`-th month (January-aligned).
    Months(u32),
    /// January 1st of every `n`-th year.
    Years(i32),
}

const TICK_INTERVALS: [(TimeTickInterval, f64); 18] = [
    (TimeTickInterval::Seconds(SECOND), SECOND),
    (TimeTickInterval::Seconds(5.0 * SECOND), 5.0 * SECOND),
    (TimeTickInterval::Seconds(15.0 * SECOND), 15.0 * SECOND),
    (TimeTickInterval::Seconds(30.0 * SECOND), 30.0 * SECOND),
    (TimeTickInterval::Seconds(MINUTE), MINUTE),
    (TimeTickInterval::Seconds(5.0 * MINUTE), 5.0 * MINUTE),
    (TimeTickInterval::Seconds(15.0 * MINUTE), 15.0 * MINUTE),
    (TimeTickInterval::Seconds(30.0 * MINUTE), 30.0 * MINUTE),
    (TimeTickInterval::Seconds(HOUR), HOUR),
    (TimeTickInterval::Seconds(3.0 * HOUR), 3.0 * HOUR),
    (TimeTickInterval::Seconds(6.0 * HOUR), 6.0 * HOUR),
    (TimeTickInterval::Seconds(12.0 * HOUR), 12.0 * HOUR),
    (TimeTickInterval::Seconds(DAY), DAY),
    (TimeTickInterval::Seconds(2.0 * DAY), 2.0 * DAY),
    (TimeTickInterval::Weeks(1), WEEK),
    (TimeTickInterval::Months(1), MONTH),
    (TimeTickInterval::Months(3), 3.0 * MONTH),
    (TimeTickInterval::Years(1), YEAR),
];

/// Picks the interval whose duration is closest to `span / count`.
#[must_use]
pub fn select_tick_interval(start: f64, end: f64, count: usize) -> Option<TimeTickInterval> {
    if count == 0 || !start.is_finite() || !end.is_finite() {
        return None;
    }

    let (start, end) = (start.min(end), start.max(end));
    let target = (end - start) / count as f64;
    let index = TICK_INTERVALS.partition_point(|(_, duration)| *duration <= target);

    if index == TICK_INTERVALS.len() {
        let years = nice_step((end - start) / YEAR, count).max(1.0);
        return Some(TimeTickInterval::Years(years as i32));
    }
    if index == 0 {
        let step = nice_step(end - start, count).max(0.001);
        return Some(TimeTickInterval::Seconds(step));
    }

    let (below, below_duration) = TICK_INTERVALS[index - 1];
    let (above, above_duration) = TICK_INTERVALS[index];
    if target / below_duration < above_duration / target {
        Some(below)
    } else {
        Some(above)
    }
}

/// Returns roughly `count` calendar-aligned tick times inside `[start, end]`.
#[must_use]
pub fn time_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    match select_tick_interval(start, end, count) {
        Some(interval) => ticks_for_interval(start, end, interval),
        None => Vec::new(),
    }
}

/// Tick times inside `[start, end]` for an already selected interval.
#[must_use]
pub fn ticks_for_interval(start: f64, end: f64, interval: TimeTickInterval) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let (start, end) = (start.min(end), start.max(end));
    if start == end {
        return vec![start];
    }

    match interval {
        TimeTickInterval::Seconds(step) => aligned_steps(start, end, step, 0.0),
        TimeTickInterval::Weeks(weeks) => {
            aligned_steps(start, end, WEEK * f64::from(weeks), SUNDAY_OFFSET)
        }
        TimeTickInterval::Months(months) => month_ticks(start, end, months),
        TimeTickInterval::Years(years) => year_ticks(start, end, years),
    }
}

fn aligned_steps(start: f64, end: f64, step: f64, offset: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    if !step.is_finite() || step <= 0.0 {
        return ticks;
    }
    let first = ((start - offset) / step).ceil();
    let last = ((end - offset) / step).floor();
    let mut k = first;
    while k <= last {
        ticks.push(k * step + offset);
        k += 1.0;
    }
    ticks
}

fn month_ticks(start: f64, end: f64, every: u32) -> Vec<f64> {
    let Some(start_time) = unix_seconds_to_datetime(start) else {
        return Vec::new();
    };
    let every = every.max(1);
    let mut year = start_time.year();
    let mut month0 = start_time.month0();
    let mut ticks = Vec::new();

    loop {
        let Some(candidate) = Utc.with_ymd_and_hms(year, month0 + 1, 1, 0, 0, 0).single() else {
            break;
        };
        let seconds = datetime_to_unix_seconds(candidate);
        if seconds > end {
            break;
        }
        if seconds >= start && month0 % every == 0 {
            ticks.push(seconds);
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }
    ticks
}

fn year_ticks(start: f64, end: f64, every: i32) -> Vec<f64> {
    let (Some(start_time), Some(end_time)) =
        (unix_seconds_to_datetime(start), unix_seconds_to_datetime(end))
    else {
        return Vec::new();
    };
    let every = every.max(1);
    (start_time.year()..=end_time.year())
        .filter(|year| year.rem_euclid(every) == 0)
        .filter_map(|year| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single())
        .map(datetime_to_unix_seconds)
        .filter(|seconds| *seconds >= start && *seconds <= end)
        .collect()
}

/// 1/2/5 x 10^k step closest to `span / count`.
fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
