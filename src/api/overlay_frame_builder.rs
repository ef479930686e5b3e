use smallvec::{SmallVec, smallvec};

use crate::error::ChartResult;
use crate::interaction::HoverSnap;
use crate::render::{
    CirclePrimitive, LinePrimitive, OverlayFrame, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive, TooltipBox,
};

use super::layout_helpers::{clamp_box_origin, estimate_label_text_width_px};
use super::{ChartEngine, ChartScene};

impl<R: Renderer> ChartEngine<R> {
    /// Builds the hover layer for `snap`, with the tooltip anchored at the
    /// surface-space `pointer`.
    pub(super) fn build_overlay_frame(
        &self,
        scene: &ChartScene,
        snap: HoverSnap,
        pointer: (f64, f64),
    ) -> ChartResult<OverlayFrame> {
        let layout = scene.layout;
        let style = self.config.style;
        let (x, y) = layout.to_surface(snap.x, snap.y);

        let crosshair = smallvec![
            LinePrimitive::new(
                x,
                layout.plot_top(),
                x,
                layout.plot_bottom(),
                style.crosshair_line_width,
                style.crosshair_line_color,
            )
            .with_stroke_style(style.crosshair_line_style),
            LinePrimitive::new(
                layout.plot_left(),
                y,
                layout.plot_right(),
                y,
                style.crosshair_line_width,
                style.crosshair_line_color,
            )
            .with_stroke_style(style.crosshair_line_style),
        ];

        let marker = CirclePrimitive {
            cx: x,
            cy: y,
            radius: style.marker_radius_px,
            fill_color: style.marker_fill_color,
            stroke_color: style.marker_stroke_color,
            stroke_width: style.marker_stroke_width,
        };

        let overlay = OverlayFrame {
            viewport: scene.layout_viewport(),
            crosshair,
            marker,
            tooltip: self.build_tooltip(scene, snap, pointer),
        };
        overlay.validate()?;
        Ok(overlay)
    }

    fn build_tooltip(&self, scene: &ChartScene, snap: HoverSnap, pointer: (f64, f64)) -> TooltipBox {
        let placement = self.config.tooltip;
        let style = self.config.style;
        let font = placement.font_size_px;

        let mut texts: SmallVec<[String; 2]> = smallvec![(self.formatters.currency)(snap.sample.price)];
        if placement.show_date {
            texts.push(self.formatters.tooltip_date(snap.sample.timestamp));
        }
        texts.retain(|text| !text.is_empty());

        let text_width = texts
            .iter()
            .map(|text| estimate_label_text_width_px(text, font))
            .fold(0.0, f64::max);
        let line_count = texts.len() as f64;
        let width = text_width + 2.0 * placement.padding_x;
        let height = line_count * font
            + (line_count - 1.0).max(0.0) * placement.line_gap_px
            + 2.0 * placement.padding_y;

        let (offset_x, offset_y) = placement.offset(scene.layout.fullscreen);
        let box_x = clamp_box_origin(pointer.0 + offset_x, width, scene.layout.surface_width);
        let box_y = clamp_box_origin(pointer.1 + offset_y, height, scene.layout.surface_height);

        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                TextPrimitive::new(
                    text,
                    box_x + placement.padding_x,
                    box_y + placement.padding_y + idx as f64 * (font + placement.line_gap_px),
                    font,
                    style.tooltip_text_color,
                    TextHAlign::Left,
                )
            })
            .collect();

        TooltipBox {
            rect: RectPrimitive::new(box_x, box_y, width, height, style.tooltip_box_color)
                .with_corner_radius(style.tooltip_corner_radius_px),
            lines,
        }
    }
}
