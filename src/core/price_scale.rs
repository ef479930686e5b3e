use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Sample};
use crate::error::{ChartError, ChartResult};

/// Multiplicative padding applied around the observed price extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceScaleTuning {
    /// Domain start is `min(price) * (1 - bottom_padding_ratio)`.
    pub bottom_padding_ratio: f64,
    /// Domain end is `max(price) * (1 + top_padding_ratio)`.
    pub top_padding_ratio: f64,
}

impl Default for PriceScaleTuning {
    fn default() -> Self {
        Self {
            bottom_padding_ratio: 0.01,
            top_padding_ratio: 0.01,
        }
    }
}

impl PriceScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.bottom_padding_ratio.is_finite()
            || !self.top_padding_ratio.is_finite()
            || self.bottom_padding_ratio < 0.0
            || self.top_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "price scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Price axis mapped onto an inverted Y range `[band_height, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    linear: LinearScale,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64, band_height_px: f64) -> ChartResult<Self> {
        if !band_height_px.is_finite() || band_height_px < 0.0 {
            return Err(ChartError::InvalidData(
                "price band height must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            linear: LinearScale::new(price_min, price_max, band_height_px, 0.0)?,
        })
    }

    pub fn from_samples(
        samples: &[Sample],
        band_height_px: f64,
        tuning: PriceScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let min = samples.iter().map(|s| OrderedFloat(s.price)).min();
        let max = samples.iter().map(|s| OrderedFloat(s.price)).max();
        let (Some(min), Some(max)) = (min, max) else {
            return Err(ChartError::InvalidData(
                "price scale cannot be built from empty data".to_owned(),
            ));
        };

        Self::new(
            min.0 * (1.0 - tuning.bottom_padding_ratio),
            max.0 * (1.0 + tuning.top_padding_ratio),
            band_height_px,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn band_height_px(self) -> f64 {
        self.linear.range().0
    }

    /// Whether `price` lies inside the padded domain (either orientation).
    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        let (start, end) = self.domain();
        price >= start.min(end) && price <= start.max(end)
    }

    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(price)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
