mod frame;
mod null_renderer;
mod primitives;

pub use frame::{LabelBox, OverlayFrame, RenderFrame, TooltipBox};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathFill, PathPrimitive, PathStroke,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Drawing happens in two independent phases. `render` replaces the static
/// layer and hides any overlay. `render_overlay` replaces only the overlay
/// (`None` hides it) and must leave the static layer untouched.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    fn render_overlay(&mut self, overlay: Option<&OverlayFrame>) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
