use std::sync::Arc;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::core::TimeTickInterval;

/// Caller-supplied `formatCurrency` collaborator.
pub type CurrencyFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
/// Caller-supplied `formatDate` collaborator.
pub type DateFormatterFn = Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync + 'static>;

/// Formats a USD amount the en-US way: `$64,850.35`, `-$0.50`.
#[must_use]
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{fraction}", group_thousands(integer))
}

/// Short calendar date such as `Oct 16`.
#[must_use]
pub fn format_short_date(time: DateTime<Utc>) -> String {
    time.format("%b %-d").to_string()
}

/// Date with time of day such as `Oct 16, 14:30`.
#[must_use]
pub fn format_date_time(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %H:%M").to_string()
}

/// Axis label whose precision follows the tick interval.
///
/// Sub-day ticks show the time of day, except on midnight where the new date
/// is shown instead. Month ticks show the month name and switch to the year
/// on January.
#[must_use]
pub fn format_time_tick(time: DateTime<Utc>, interval: TimeTickInterval) -> String {
    let pattern = match interval {
        TimeTickInterval::Seconds(step) if step < 1.0 => "%H:%M:%S%.3f",
        TimeTickInterval::Seconds(step) if step < 60.0 => "%H:%M:%S",
        TimeTickInterval::Seconds(step) if step < 86_400.0 => {
            if time.num_seconds_from_midnight() == 0 {
                "%b %-d"
            } else {
                "%H:%M"
            }
        }
        TimeTickInterval::Seconds(_) | TimeTickInterval::Weeks(_) => "%b %-d",
        TimeTickInterval::Months(_) if time.month() == 1 => "%Y",
        TimeTickInterval::Months(_) => "%b",
        TimeTickInterval::Years(_) => "%Y",
    };
    time.format(pattern).to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formatter pair consulted by the frame builders.
///
/// Without a custom date formatter, axis labels follow the tick interval and
/// the tooltip shows date and time.
#[derive(Clone)]
pub struct LabelFormatters {
    pub currency: CurrencyFormatterFn,
    pub date: Option<DateFormatterFn>,
}

impl LabelFormatters {
    #[must_use]
    pub fn axis_label(&self, time: DateTime<Utc>, interval: TimeTickInterval) -> String {
        match &self.date {
            Some(formatter) => formatter(time),
            None => format_time_tick(time, interval),
        }
    }

    #[must_use]
    pub fn tooltip_date(&self, time: DateTime<Utc>) -> String {
        match &self.date {
            Some(formatter) => formatter(time),
            None => format_date_time(time),
        }
    }
}

impl Default for LabelFormatters {
    fn default() -> Self {
        Self {
            currency: Arc::new(format_usd),
            date: None,
        }
    }
}

impl std::fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFormatters")
            .field("custom_date", &self.date.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_digits_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("64850"), "64,850");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
