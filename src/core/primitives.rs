use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`], rounded to whole milliseconds.
///
/// Returns `None` for non-finite input or instants chrono cannot represent.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

#[cfg(test)]
mod tests {
    use super::{datetime_to_unix_seconds, unix_seconds_to_datetime};
    use chrono::{TimeZone, Utc};

    #[test]
    fn unix_seconds_round_trip_keeps_millisecond_precision() {
        let time = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let seconds = datetime_to_unix_seconds(time);
        assert_eq!(unix_seconds_to_datetime(seconds), Some(time));
    }

    #[test]
    fn non_finite_seconds_have_no_datetime() {
        assert_eq!(unix_seconds_to_datetime(f64::NAN), None);
        assert_eq!(unix_seconds_to_datetime(f64::INFINITY), None);
    }
}
