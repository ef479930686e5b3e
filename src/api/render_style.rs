use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Colors, widths, and font sizes for both draw phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub area_top_color: Color,
    pub area_bottom_color: Color,
    pub price_line_color: Color,
    pub price_line_width: f64,
    pub volume_bar_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub time_axis_tick_length_px: f64,
    pub time_axis_label_color: Color,
    pub time_axis_label_font_size_px: f64,
    pub reference_line_color: Color,
    pub reference_line_width: f64,
    pub reference_line_style: LineStrokeStyle,
    pub reference_label_color: Color,
    pub reference_label_font_size_px: f64,
    pub last_price_badge_color: Color,
    pub last_price_badge_text_color: Color,
    pub last_price_badge_font_size_px: f64,
    pub crosshair_line_color: Color,
    pub crosshair_line_width: f64,
    pub crosshair_line_style: LineStrokeStyle,
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub tooltip_box_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_corner_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let blue = Color::rgb8(0x3b, 0x82, 0xf6);
        let gray = Color::rgb8(0x80, 0x80, 0x80);
        let white = Color::rgb(1.0, 1.0, 1.0);
        Self {
            area_top_color: blue.with_alpha(0.3),
            area_bottom_color: blue.with_alpha(0.0),
            price_line_color: Color::rgb8(75, 64, 238),
            price_line_width: 2.3,
            volume_bar_color: Color::rgb8(0xe5, 0xe7, 0xeb).with_alpha(0.5),
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            grid_line_width: 1.0,
            time_axis_tick_length_px: 6.0,
            time_axis_label_color: Color::rgb8(0x6b, 0x72, 0x80),
            time_axis_label_font_size_px: 10.0,
            reference_line_color: gray,
            reference_line_width: 1.0,
            reference_line_style: LineStrokeStyle::dashed(3.0, 3.0),
            reference_label_color: gray,
            reference_label_font_size_px: 12.0,
            last_price_badge_color: Color::rgb8(0x4b, 0x40, 0xee),
            last_price_badge_text_color: white,
            last_price_badge_font_size_px: 14.0,
            crosshair_line_color: Color::rgb8(0x66, 0x66, 0x66),
            crosshair_line_width: 1.0,
            crosshair_line_style: LineStrokeStyle::dashed(4.0, 4.0),
            marker_radius_px: 4.0,
            marker_fill_color: Color::rgb(0.0, 0.0, 1.0),
            marker_stroke_color: white,
            marker_stroke_width: 1.0,
            tooltip_box_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_text_color: white,
            tooltip_corner_radius_px: 2.0,
        }
    }
}

impl RenderStyle {
    /// Rejects colors outside `[0, 1]`, bad dash patterns, and non-finite or
    /// non-positive widths and font sizes.
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.area_top_color,
            self.area_bottom_color,
            self.price_line_color,
            self.volume_bar_color,
            self.grid_line_color,
            self.time_axis_label_color,
            self.reference_line_color,
            self.reference_label_color,
            self.last_price_badge_color,
            self.last_price_badge_text_color,
            self.crosshair_line_color,
            self.marker_fill_color,
            self.marker_stroke_color,
            self.tooltip_box_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }
        self.reference_line_style.validate()?;
        self.crosshair_line_style.validate()?;

        for (name, value) in [
            ("price_line_width", self.price_line_width),
            ("grid_line_width", self.grid_line_width),
            ("time_axis_label_font_size_px", self.time_axis_label_font_size_px),
            ("reference_line_width", self.reference_line_width),
            ("reference_label_font_size_px", self.reference_label_font_size_px),
            ("last_price_badge_font_size_px", self.last_price_badge_font_size_px),
            ("crosshair_line_width", self.crosshair_line_width),
            ("marker_radius_px", self.marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("time_axis_tick_length_px", self.time_axis_tick_length_px),
            ("marker_stroke_width", self.marker_stroke_width),
            ("tooltip_corner_radius_px", self.tooltip_corner_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
