use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::{PathCommand, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, OverlayFrame, PathFill,
    PathPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango renderer backend.
///
/// The static frame is painted once into a cached layer. The visible
/// `surface` is recomposed from that cache plus the current overlay, so a
/// pointer move never repaints the series.
#[derive(Debug)]
pub struct CairoRenderer {
    static_layer: ImageSurface,
    surface: ImageSurface,
    clear_color: Color,
    static_stats: CairoRenderStats,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            });
        }

        Ok(Self {
            static_layer: create_surface(width, height)?,
            surface: create_surface(width, height)?,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            static_stats: CairoRenderStats::default(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Composited output: static layer plus current overlay.
    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn ensure_size(&mut self, viewport: Viewport) -> ChartResult<()> {
        let width = i32::try_from(viewport.width).map_err(|_| ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        let height = i32::try_from(viewport.height).map_err(|_| ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })?;
        if self.surface.width() == width && self.surface.height() == height {
            return Ok(());
        }
        self.static_layer = create_surface(width, height)?;
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    fn compose(&mut self, overlay: Option<&OverlayFrame>) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context
            .set_source_surface(&self.static_layer, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to select static layer", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to copy static layer", err))?;

        let mut stats = self.static_stats;
        if let Some(overlay) = overlay {
            draw_overlay(&context, overlay, &mut stats)?;
        }
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.ensure_size(frame.viewport)?;

        let context = Context::new(&self.static_layer)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut stats = CairoRenderStats::default();
        clear(&context, self.clear_color)?;
        draw_frame(&context, frame, &mut stats)?;
        self.static_stats = stats;

        self.compose(None)
    }

    fn render_overlay(&mut self, overlay: Option<&OverlayFrame>) -> ChartResult<()> {
        if let Some(overlay) = overlay {
            overlay.validate()?;
        }
        self.compose(overlay)
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn clear(context: &Context, color: Color) -> ChartResult<()> {
    color.validate()?;
    apply_color(context, color);
    context
        .paint()
        .map_err(|err| map_backend_error("failed to clear surface", err))
}

fn draw_frame(context: &Context, frame: &RenderFrame, stats: &mut CairoRenderStats) -> ChartResult<()> {
    for path in &frame.paths {
        draw_path(context, path)?;
        stats.paths_drawn += 1;
    }
    for rect in &frame.rects {
        draw_rect(context, *rect)?;
        stats.rects_drawn += 1;
    }
    for line in &frame.lines {
        draw_line(context, *line)?;
        stats.lines_drawn += 1;
    }
    for badge in &frame.badges {
        draw_rect(context, badge.rect)?;
        stats.rects_drawn += 1;
        draw_text(context, &badge.text);
        stats.texts_drawn += 1;
    }
    for text in &frame.texts {
        draw_text(context, text);
        stats.texts_drawn += 1;
    }
    Ok(())
}

fn draw_overlay(
    context: &Context,
    overlay: &OverlayFrame,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for line in &overlay.crosshair {
        draw_line(context, *line)?;
        stats.lines_drawn += 1;
    }
    draw_circle(context, overlay.marker)?;
    stats.circles_drawn += 1;
    draw_rect(context, overlay.tooltip.rect)?;
    stats.rects_drawn += 1;
    for text in &overlay.tooltip.lines {
        draw_text(context, text);
        stats.texts_drawn += 1;
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke_style(context: &Context, style: LineStrokeStyle) {
    match style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
    }
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    apply_stroke_style(context, line.stroke_style);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_path(context: &Context, path: &PathPrimitive) -> ChartResult<()> {
    context.new_path();
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo(v) => context.move_to(v.x, v.y),
            PathCommand::LineTo(v) => context.line_to(v.x, v.y),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => context.curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y),
            PathCommand::Close => context.close_path(),
        }
    }

    if let Some(fill) = path.fill {
        match fill {
            PathFill::Solid(color) => apply_color(context, color),
            PathFill::VerticalGradient {
                top_y,
                bottom_y,
                top_color,
                bottom_color,
            } => {
                let gradient = LinearGradient::new(0.0, top_y, 0.0, bottom_y);
                gradient.add_color_stop_rgba(
                    0.0,
                    top_color.red,
                    top_color.green,
                    top_color.blue,
                    top_color.alpha,
                );
                gradient.add_color_stop_rgba(
                    1.0,
                    bottom_color.red,
                    bottom_color.green,
                    bottom_color.blue,
                    bottom_color.alpha,
                );
                context
                    .set_source(&gradient)
                    .map_err(|err| map_backend_error("failed to select gradient", err))?;
            }
        }
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }

    if let Some(stroke) = path.stroke {
        apply_color(context, stroke.color);
        apply_stroke_style(context, stroke.style);
        context.set_line_width(stroke.width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }

    context.new_path();
    Ok(())
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        apply_stroke_style(context, LineStrokeStyle::Solid);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill_color);
    if circle.stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        apply_color(context, circle.stroke_color);
        apply_stroke_style(context, LineStrokeStyle::Solid);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    context.new_path();
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
