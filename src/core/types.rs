use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Measured surface size plus the compact/fullscreen presentation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl ViewState {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fullscreen: false,
        }
    }

    #[must_use]
    pub fn fullscreen(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fullscreen: true,
        }
    }

    #[must_use]
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// One `(timestamp, price, volume)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }

    pub fn from_decimal(timestamp: DateTime<Utc>, price: Decimal, volume: Decimal) -> ChartResult<Self> {
        Ok(Self {
            timestamp,
            price: decimal_to_f64(price, "price")?,
            volume: decimal_to_f64(volume, "volume")?,
        })
    }

    /// Unix seconds used as the time-scale domain value.
    #[must_use]
    pub fn time_key(&self) -> f64 {
        datetime_to_unix_seconds(self.timestamp)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.price.is_finite() {
            return Err(ChartError::InvalidData(
                "sample price must be finite".to_owned(),
            ));
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(ChartError::InvalidData(
                "sample volume must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Checks value sanity and ascending timestamp order.
///
/// Equal neighboring timestamps are accepted. The slice is never reordered.
pub fn validate_samples(samples: &[Sample]) -> ChartResult<()> {
    for sample in samples {
        sample.validate()?;
    }
    if let Some(index) = samples
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        return Err(ChartError::UnsortedSamples { index: index + 1 });
    }
    Ok(())
}
