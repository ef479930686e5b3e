use crate::core::{PlotLayout, PriceScale, Sample, TimeScale, Viewport, VolumeScale};
use crate::error::ChartResult;

use super::ChartEngineConfig;

/// Layout and scales resolved by the last successful render.
///
/// Pointer handling reads this snapshot instead of rebuilding scales, so the
/// overlay always agrees with what is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScene {
    pub layout: PlotLayout,
    pub time_scale: TimeScale,
    pub price_scale: PriceScale,
    pub volume_scale: VolumeScale,
}

impl ChartScene {
    #[must_use]
    pub fn layout_viewport(&self) -> Viewport {
        // Layouts only resolve for measured surfaces, so the sizes are whole pixels.
        Viewport::new(
            self.layout.surface_width as u32,
            self.layout.surface_height as u32,
        )
    }

    /// Fits all three scales to `samples` inside an already resolved layout.
    pub(super) fn build(
        samples: &[Sample],
        layout: PlotLayout,
        config: &ChartEngineConfig,
    ) -> ChartResult<Self> {
        let time_scale = TimeScale::from_samples(samples, layout.inner_width)?;
        let price_scale = PriceScale::from_samples(
            samples,
            layout.price_band_height,
            config.price_scale_tuning,
        )?;
        let volume_scale =
            VolumeScale::from_samples(samples, layout.inner_height, layout.volume_band_height)?;

        Ok(Self {
            layout,
            time_scale,
            price_scale,
            volume_scale,
        })
    }
}
