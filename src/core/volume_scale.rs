use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Sample};
use crate::error::{ChartError, ChartResult};

/// Volume axis mapped onto the bottom band of the plot.
///
/// Domain is `[0, max(volume)]`; range is
/// `[plot_height, plot_height - band_height]` so zero volume sits on the plot
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeScale {
    linear: LinearScale,
}

impl VolumeScale {
    pub fn new(volume_max: f64, plot_height_px: f64, band_height_px: f64) -> ChartResult<Self> {
        if !plot_height_px.is_finite() || !band_height_px.is_finite() || band_height_px < 0.0 {
            return Err(ChartError::InvalidData(
                "volume band geometry must be finite and >= 0".to_owned(),
            ));
        }
        // An all-zero series keeps its bars flat on the baseline.
        let volume_max = if volume_max > 0.0 { volume_max } else { 1.0 };
        Ok(Self {
            linear: LinearScale::new(
                0.0,
                volume_max,
                plot_height_px,
                plot_height_px - band_height_px,
            )?,
        })
    }

    pub fn from_samples(
        samples: &[Sample],
        plot_height_px: f64,
        band_height_px: f64,
    ) -> ChartResult<Self> {
        let Some(max) = samples.iter().map(|s| OrderedFloat(s.volume)).max() else {
            return Err(ChartError::InvalidData(
                "volume scale cannot be built from empty data".to_owned(),
            ));
        };
        Self::new(max.0, plot_height_px, band_height_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Pixel Y of the zero-volume baseline.
    #[must_use]
    pub fn baseline_px(self) -> f64 {
        self.linear.range().0
    }

    pub fn volume_to_pixel(self, volume: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(volume)
    }
}
