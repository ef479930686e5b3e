use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, PriceScaleTuning};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Upper bound for `time_tick_count`; larger requests would only produce
/// overlapping labels.
pub const MAX_TIME_TICK_COUNT: usize = 64;

/// Where the hover tooltip sits relative to the pointer.
///
/// Compact and fullscreen layouts use separate offsets; the final box is
/// always clamped inside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipPlacement {
    pub compact_offset_x: f64,
    pub compact_offset_y: f64,
    pub fullscreen_offset_x: f64,
    pub fullscreen_offset_y: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub font_size_px: f64,
    pub line_gap_px: f64,
    /// Adds the sample date as a second tooltip line.
    pub show_date: bool,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            compact_offset_x: -96.0,
            compact_offset_y: -48.0,
            fullscreen_offset_x: 50.0,
            fullscreen_offset_y: -20.0,
            padding_x: 12.0,
            padding_y: 8.0,
            font_size_px: 14.0,
            line_gap_px: 4.0,
            show_date: false,
        }
    }
}

impl TooltipPlacement {
    #[must_use]
    pub fn offset(&self, fullscreen: bool) -> (f64, f64) {
        if fullscreen {
            (self.fullscreen_offset_x, self.fullscreen_offset_y)
        } else {
            (self.compact_offset_x, self.compact_offset_y)
        }
    }

    fn validate(self) -> ChartResult<Self> {
        let all_finite = [
            self.compact_offset_x,
            self.compact_offset_y,
            self.fullscreen_offset_x,
            self.fullscreen_offset_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ChartError::InvalidData(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        for (name, value) in [
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
            ("line_gap_px", self.line_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "tooltip `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public engine configuration.
///
/// Serializable so hosts can persist chart setup as JSON; missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEngineConfig {
    pub compact_margins: PlotMargins,
    pub fullscreen_margins: PlotMargins,
    pub price_scale_tuning: PriceScaleTuning,
    /// Fraction of the plot height reserved for volume bars.
    pub volume_band_ratio: f64,
    pub volume_bar_width_px: f64,
    pub time_tick_count: usize,
    pub tooltip: TooltipPlacement,
    pub show_last_price_badge: bool,
    pub style: RenderStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            compact_margins: PlotMargins::default(),
            fullscreen_margins: PlotMargins::default(),
            price_scale_tuning: PriceScaleTuning::default(),
            volume_band_ratio: 0.2,
            volume_bar_width_px: 4.0,
            time_tick_count: 4,
            tooltip: TooltipPlacement::default(),
            show_last_price_badge: true,
            style: RenderStyle::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.compact_margins = margins;
        self.fullscreen_margins = margins;
        self
    }

    #[must_use]
    pub fn with_fullscreen_margins(mut self, margins: PlotMargins) -> Self {
        self.fullscreen_margins = margins;
        self
    }

    #[must_use]
    pub fn with_price_scale_tuning(mut self, tuning: PriceScaleTuning) -> Self {
        self.price_scale_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_volume_band_ratio(mut self, ratio: f64) -> Self {
        self.volume_band_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_volume_bar_width_px(mut self, width: f64) -> Self {
        self.volume_bar_width_px = width;
        self
    }

    #[must_use]
    pub fn with_time_tick_count(mut self, count: usize) -> Self {
        self.time_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipPlacement) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_last_price_badge(mut self, enabled: bool) -> Self {
        self.show_last_price_badge = enabled;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn margins_for(&self, fullscreen: bool) -> PlotMargins {
        if fullscreen {
            self.fullscreen_margins
        } else {
            self.compact_margins
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.compact_margins.validate()?;
        self.fullscreen_margins.validate()?;
        self.price_scale_tuning.validate()?;
        self.tooltip.validate()?;
        self.style.validate()?;
        if self.time_tick_count > MAX_TIME_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "time tick count must be <= {MAX_TIME_TICK_COUNT}"
            )));
        }
        if !self.volume_band_ratio.is_finite() || !(0.0..1.0).contains(&self.volume_band_ratio) {
            return Err(ChartError::InvalidData(
                "volume band ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.volume_bar_width_px.is_finite() || self.volume_bar_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "volume bar width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize config json: {e}")))
    }
}
