use crate::core::{Sample, ViewState};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, InteractionMode};
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, ChartScene};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Samples drawn by the last successful render (or set via `set_data`).
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn reference_price(&self) -> f64 {
        self.reference_price
    }

    #[must_use]
    pub fn view_state(&self) -> Option<ViewState> {
        self.view_state
    }

    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Maps a time (unix seconds) to a surface x coordinate.
    pub fn map_time_to_surface_x(&self, time: f64) -> ChartResult<f64> {
        let scene = self.rendered_scene()?;
        Ok(scene.time_scale.time_to_pixel(time)? + scene.layout.plot_left())
    }

    /// Maps a price to a surface y coordinate.
    pub fn map_price_to_surface_y(&self, price: f64) -> ChartResult<f64> {
        let scene = self.rendered_scene()?;
        Ok(scene.price_scale.price_to_pixel(price)? + scene.layout.plot_top())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Releases the owned drawing surface.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn rendered_scene(&self) -> ChartResult<&ChartScene> {
        self.scene.as_ref().ok_or_else(|| {
            ChartError::InvalidData("chart has not been rendered yet".to_owned())
        })
    }
}
