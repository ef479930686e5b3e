use tracing::trace;

use crate::core::nearest_sample_index;
use crate::error::ChartResult;
use crate::interaction::{HoverSnap, InteractionMode};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Handles a pointer move in surface pixels.
    ///
    /// Only the overlay is redrawn. A pointer outside the plot area or
    /// outside the series hides the overlay; a move before the first
    /// successful render is ignored.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let Some(scene) = self.scene else {
            trace!(x, y, "pointer move ignored before first render");
            return Ok(());
        };

        let previous = self.interaction.mode();
        let snap = if scene.layout.contains(x, y) {
            self.nearest_sample_at(x)
        } else {
            None
        };
        match snap {
            Some(snap) => {
                let overlay = self.build_overlay_frame(&scene, snap, (x, y))?;
                self.renderer.render_overlay(Some(&overlay))?;
            }
            None => self.renderer.render_overlay(None)?,
        }
        self.interaction.on_pointer_move(x, y, snap);

        let mode = self.interaction.mode();
        if mode != previous {
            trace!(?previous, ?mode, x, y, "hover transition");
        } else {
            trace!(x, y, hovering = snap.is_some(), "pointer move");
        }
        Ok(())
    }

    /// Clears the hover and hides the overlay.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        let was_hovering = self.interaction.mode() == InteractionMode::Hovering;
        self.interaction.on_pointer_leave();
        if self.scene.is_some() {
            self.renderer.render_overlay(None)?;
        }
        if was_hovering {
            trace!("hover cleared on pointer leave");
        }
        Ok(())
    }

    /// Resolves the sample nearest to a surface-space x coordinate.
    ///
    /// Pure query against the last rendered scene. Returns `None` before the
    /// first render and for pointers at or before the first sample or past
    /// the last one.
    #[must_use]
    pub fn nearest_sample_at(&self, x: f64) -> Option<HoverSnap> {
        let scene = self.scene?;
        let (plot_x, _) = scene.layout.to_plot(x, 0.0);
        let time = scene.time_scale.pixel_to_time(plot_x).ok()?;
        let index = nearest_sample_index(&self.samples, time)?;
        let sample = self.samples[index];

        Some(HoverSnap {
            sample,
            x: scene.time_scale.time_to_pixel(sample.time_key()).ok()?,
            y: scene.price_scale.price_to_pixel(sample.price).ok()?,
        })
    }
}
