use serde::{Deserialize, Serialize};

use crate::core::ViewState;
use crate::error::{ChartError, ChartResult};

/// Space reserved around the plot for axes and labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 50.0,
            bottom: 60.0,
            left: 50.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Resolved plot geometry for one render pass.
///
/// The plot occupies `inner_width x inner_height` starting at
/// `(margins.left, margins.top)`. Its upper part is the price band and the
/// bottom `volume_band_height` pixels hold volume bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub surface_width: f64,
    pub surface_height: f64,
    pub margins: PlotMargins,
    pub inner_width: f64,
    pub inner_height: f64,
    pub price_band_height: f64,
    pub volume_band_height: f64,
    pub fullscreen: bool,
}

impl PlotLayout {
    /// Returns `None` when the surface is unmeasured or too small to leave a
    /// positive plot area after margins.
    #[must_use]
    pub fn resolve(
        view_state: ViewState,
        margins: PlotMargins,
        volume_band_ratio: f64,
    ) -> Option<Self> {
        if !view_state.viewport().is_valid() {
            return None;
        }

        let surface_width = f64::from(view_state.width);
        let surface_height = f64::from(view_state.height);
        let inner_width = surface_width - margins.left - margins.right;
        let inner_height = surface_height - margins.top - margins.bottom;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return None;
        }

        let volume_band_height = inner_height * volume_band_ratio.clamp(0.0, 1.0);
        Some(Self {
            surface_width,
            surface_height,
            margins,
            inner_width,
            inner_height,
            price_band_height: inner_height - volume_band_height,
            volume_band_height,
            fullscreen: view_state.fullscreen,
        })
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        self.margins.left + self.inner_width
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.margins.top + self.inner_height
    }

    /// Whether a surface-space point lies inside the plot rectangle, edges
    /// included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.plot_left()..=self.plot_right()).contains(&x)
            && (self.plot_top()..=self.plot_bottom()).contains(&y)
    }

    /// Converts plot-local coordinates to surface coordinates.
    #[must_use]
    pub fn to_surface(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.margins.left, y + self.margins.top)
    }

    /// Converts surface coordinates to plot-local coordinates.
    #[must_use]
    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margins.left, y - self.margins.top)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotLayout, PlotMargins};
    use crate::core::ViewState;

    #[test]
    fn layout_splits_plot_into_price_and_volume_bands() {
        let layout = PlotLayout::resolve(ViewState::new(500, 480), PlotMargins::default(), 0.2)
            .expect("measured");
        assert_eq!(layout.inner_width, 400.0);
        assert_eq!(layout.inner_height, 400.0);
        assert_eq!(layout.volume_band_height, 80.0);
        assert_eq!(layout.price_band_height, 320.0);
    }

    #[test]
    fn contains_covers_plot_rect_only() {
        let layout = PlotLayout::resolve(ViewState::new(500, 480), PlotMargins::default(), 0.2)
            .expect("measured");
        assert!(layout.contains(50.0, 20.0));
        assert!(layout.contains(450.0, 420.0));
        assert!(!layout.contains(250.0, 19.0));
        assert!(!layout.contains(250.0, 421.0));
        assert!(!layout.contains(49.0, 200.0));
        assert!(!layout.contains(451.0, 200.0));
    }

    #[test]
    fn layout_rejects_surface_smaller_than_margins() {
        assert!(PlotLayout::resolve(ViewState::new(100, 80), PlotMargins::default(), 0.2).is_none());
        assert!(PlotLayout::resolve(ViewState::new(0, 400), PlotMargins::default(), 0.2).is_none());
    }
}
