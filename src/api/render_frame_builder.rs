use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::{
    Sample, project_area_geometry, project_volume_bars, select_tick_interval, ticks_for_interval,
};
use crate::error::ChartResult;
use crate::render::{
    LabelBox, LinePrimitive, LineStrokeStyle, PathFill, PathPrimitive, PathStroke, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::layout_helpers::estimate_label_text_width_px;
use super::{ChartEngine, ChartScene};

const TIME_LABEL_GAP_PX: f64 = 3.0;
const REFERENCE_LABEL_GAP_PX: f64 = 4.0;
const BADGE_PADDING_X_PX: f64 = 6.0;
const BADGE_PADDING_Y_PX: f64 = 4.0;

impl<R: Renderer> ChartEngine<R> {
    /// Builds the static layer: area, price line, volume bars, time axis,
    /// reference line and the last-price badge.
    pub(super) fn build_render_frame(
        &self,
        samples: &[Sample],
        reference_price: f64,
        scene: &ChartScene,
    ) -> ChartResult<RenderFrame> {
        let layout = scene.layout;
        let style = self.config.style;
        let (left, top) = (layout.plot_left(), layout.plot_top());
        let mut frame = RenderFrame::new(scene.layout_viewport());

        let area = project_area_geometry(
            samples,
            scene.time_scale,
            scene.price_scale,
            layout.price_band_height,
        )?;
        frame.paths.push(PathPrimitive {
            commands: PathPrimitive::translated(&area.fill_path, left, top),
            fill: Some(PathFill::VerticalGradient {
                top_y: area.top_y() + top,
                bottom_y: area.baseline_y + top,
                top_color: style.area_top_color,
                bottom_color: style.area_bottom_color,
            }),
            stroke: None,
        });
        frame.paths.push(PathPrimitive {
            commands: PathPrimitive::translated(&area.line_path, left, top),
            fill: None,
            stroke: Some(PathStroke {
                color: style.price_line_color,
                width: style.price_line_width,
                style: LineStrokeStyle::Solid,
            }),
        });

        let bars = project_volume_bars(
            samples,
            scene.time_scale,
            scene.volume_scale,
            self.config.volume_bar_width_px,
        )?;
        frame.rects.extend(bars.into_iter().map(|bar| {
            RectPrimitive::new(
                bar.x_left + left,
                bar.y_top + top,
                bar.width,
                bar.height,
                style.volume_bar_color,
            )
        }));

        self.append_time_axis(&mut frame, scene)?;
        self.append_reference_line(&mut frame, reference_price, scene)?;
        if self.config.show_last_price_badge {
            if let Some(last) = samples.last() {
                self.append_last_price_badge(&mut frame, last.price, scene);
            }
        }

        Ok(frame)
    }

    fn append_time_axis(&self, frame: &mut RenderFrame, scene: &ChartScene) -> ChartResult<()> {
        let layout = scene.layout;
        let style = self.config.style;
        let (start, end) = scene.time_scale.domain();
        let plot_bottom = layout.plot_bottom();
        let Some(interval) = select_tick_interval(start, end, self.config.time_tick_count) else {
            return Ok(());
        };

        for tick in ticks_for_interval(start, end, interval) {
            let x = scene.time_scale.time_to_pixel(tick)? + layout.plot_left();
            frame.lines.push(LinePrimitive::new(
                x,
                plot_bottom,
                x,
                layout.plot_top(),
                style.grid_line_width,
                style.grid_line_color,
            ));
            frame.lines.push(LinePrimitive::new(
                x,
                plot_bottom,
                x,
                plot_bottom + style.time_axis_tick_length_px,
                style.grid_line_width,
                style.time_axis_label_color,
            ));

            let Some(time) = unix_seconds_to_datetime(tick) else {
                continue;
            };
            let text = self.formatters.axis_label(time, interval);
            if text.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                text,
                x,
                plot_bottom + style.time_axis_tick_length_px + TIME_LABEL_GAP_PX,
                style.time_axis_label_font_size_px,
                style.time_axis_label_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    /// Skipped when the price falls outside the padded price domain.
    fn append_reference_line(
        &self,
        frame: &mut RenderFrame,
        reference_price: f64,
        scene: &ChartScene,
    ) -> ChartResult<()> {
        if !scene.price_scale.contains(reference_price) {
            return Ok(());
        }

        let layout = scene.layout;
        let style = self.config.style;
        let y = scene.price_scale.price_to_pixel(reference_price)? + layout.plot_top();
        frame.lines.push(
            LinePrimitive::new(
                layout.plot_left(),
                y,
                layout.plot_right(),
                y,
                style.reference_line_width,
                style.reference_line_color,
            )
            .with_stroke_style(style.reference_line_style),
        );

        let text = (self.formatters.currency)(reference_price);
        if !text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                text,
                layout.plot_right() + REFERENCE_LABEL_GAP_PX,
                y - style.reference_label_font_size_px * 0.5,
                style.reference_label_font_size_px,
                style.reference_label_color,
                TextHAlign::Left,
            ));
        }
        Ok(())
    }

    fn append_last_price_badge(&self, frame: &mut RenderFrame, price: f64, scene: &ChartScene) {
        let style = self.config.style;
        let text = (self.formatters.currency)(price);
        if text.is_empty() {
            return;
        }

        let font = style.last_price_badge_font_size_px;
        let width = estimate_label_text_width_px(&text, font) + 2.0 * BADGE_PADDING_X_PX;
        let height = font + 2.0 * BADGE_PADDING_Y_PX;
        let x = (scene.layout.plot_right() - width).max(0.0);
        let y = scene.layout.plot_top();

        frame.badges.push(LabelBox {
            rect: RectPrimitive::new(x, y, width, height, style.last_price_badge_color)
                .with_corner_radius(height * 0.5),
            text: TextPrimitive::new(
                text,
                x + width * 0.5,
                y + BADGE_PADDING_Y_PX,
                font,
                style.last_price_badge_text_color,
                TextHAlign::Center,
            ),
        });
    }
}
