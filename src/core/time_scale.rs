use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::core::{LinearScale, Sample};
use crate::error::{ChartError, ChartResult};

/// Horizontal scale mapping Unix seconds onto `[0, inner_width]`.
///
/// The domain is the exact extent of the fitted samples, without padding, so
/// the first sample lands on the left plot edge and the last on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, width_px: f64) -> ChartResult<Self> {
        if !width_px.is_finite() || width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            linear: LinearScale::new(time_start, time_end, 0.0, width_px)?,
        })
    }

    /// Fits the domain to `[first, last]` of an ascending sample slice.
    pub fn from_samples(samples: &[Sample], width_px: f64) -> ChartResult<Self> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        };
        Self::new(first.time_key(), last.time_key(), width_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.linear.range().1
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn datetime_to_pixel(self, time: DateTime<Utc>) -> ChartResult<f64> {
        self.time_to_pixel(datetime_to_unix_seconds(time))
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
