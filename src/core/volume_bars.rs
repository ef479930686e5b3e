use serde::{Deserialize, Serialize};

use crate::core::{Sample, TimeScale, VolumeScale};
use crate::error::{ChartError, ChartResult};

/// Plot-local geometry of one volume bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub x_center: f64,
    pub x_left: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects one fixed-width bar per sample, centered on its time position and
/// rising from the volume baseline.
pub fn project_volume_bars(
    samples: &[Sample],
    time_scale: TimeScale,
    volume_scale: VolumeScale,
    bar_width_px: f64,
) -> ChartResult<Vec<VolumeBar>> {
    if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "volume bar width must be finite and > 0".to_owned(),
        ));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let baseline_y = volume_scale.baseline_px();
    let half_width = bar_width_px * 0.5;
    let project = |sample: &Sample| -> ChartResult<VolumeBar> {
        let x_center = time_scale.time_to_pixel(sample.time_key())?;
        let y_top = volume_scale.volume_to_pixel(sample.volume)?;
        Ok(VolumeBar {
            x_center,
            x_left: x_center - half_width,
            y_top,
            width: bar_width_px,
            height: baseline_y - y_top,
        })
    };

    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        samples.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        samples.iter().map(project).collect()
    }
}
