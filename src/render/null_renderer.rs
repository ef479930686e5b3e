use crate::error::ChartResult;
use crate::render::{OverlayFrame, RenderFrame, Renderer};

/// Headless renderer used by tests and engine usage without a display.
///
/// It validates every frame and retains exactly what a real surface would
/// currently show: the last static frame and the current overlay, if any.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub static_frame: Option<RenderFrame>,
    pub overlay: Option<OverlayFrame>,
    pub static_passes: usize,
    pub overlay_passes: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.static_frame = Some(frame.clone());
        self.overlay = None;
        self.static_passes += 1;
        Ok(())
    }

    fn render_overlay(&mut self, overlay: Option<&OverlayFrame>) -> ChartResult<()> {
        if let Some(overlay) = overlay {
            overlay.validate()?;
        }
        self.overlay = overlay.cloned();
        self.overlay_passes += 1;
        Ok(())
    }
}
