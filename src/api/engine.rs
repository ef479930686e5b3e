use tracing::{debug, warn};

use crate::core::{PlotLayout, Sample, ViewState, validate_samples};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;
use crate::render::{RenderFrame, Renderer};

use super::{ChartEngineConfig, ChartScene, LabelFormatters};

/// Why a render pass left the surface untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No samples to draw.
    EmptySeries,
    /// The surface has no measured size, or it is too small to fit a plot
    /// inside the margins.
    UnmeasuredSurface,
}

/// Result of a full render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    Skipped(SkipReason),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }
}

enum RenderPass {
    Skipped(SkipReason),
    Ready { scene: ChartScene, frame: RenderFrame },
}

/// Interactive price-and-volume chart bound to one drawing surface.
///
/// The engine owns its renderer. `render` rebuilds scales and the static
/// layer; pointer methods only touch the overlay layer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) formatters: LabelFormatters,
    pub(super) samples: Vec<Sample>,
    pub(super) reference_price: f64,
    pub(super) view_state: Option<ViewState>,
    pub(super) scene: Option<ChartScene>,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            formatters: LabelFormatters::default(),
            samples: Vec::new(),
            reference_price: 0.0,
            view_state: None,
            scene: None,
            interaction: InteractionState::default(),
        })
    }

    /// Clears and redraws the whole surface.
    ///
    /// Empty input or an unmeasured surface is not an error: the call
    /// returns [`RenderOutcome::Skipped`] and leaves the surface and the
    /// engine state as they were. Unsorted or non-finite input is rejected
    /// and never repaired.
    pub fn render(
        &mut self,
        samples: &[Sample],
        reference_price: f64,
        view_state: ViewState,
    ) -> ChartResult<RenderOutcome> {
        match self.prepare_render_pass(samples, reference_price, view_state)? {
            RenderPass::Skipped(reason) => Ok(self.skip(reason, samples.len(), view_state)),
            RenderPass::Ready { scene, frame } => {
                self.renderer.render(&frame)?;
                self.samples.clear();
                self.samples.extend_from_slice(samples);
                Ok(self.commit_render_pass(scene, reference_price, view_state))
            }
        }
    }

    /// Replaces the retained data and redraws it at the current view state.
    ///
    /// Unlike [`render`](Self::render), the data is kept even when nothing
    /// can be drawn yet, so a later resize shows it.
    pub fn set_data(
        &mut self,
        samples: Vec<Sample>,
        reference_price: f64,
    ) -> ChartResult<RenderOutcome> {
        validate_reference_price(reference_price)?;
        validate_samples(&samples)?;
        self.samples = samples;
        self.reference_price = reference_price;

        match self.view_state {
            Some(view_state) => self.rerender(view_state),
            None => Ok(self.skip(
                SkipReason::UnmeasuredSurface,
                self.samples.len(),
                ViewState::new(0, 0),
            )),
        }
    }

    /// Records a new surface size or mode and redraws the retained data.
    pub fn set_view_state(&mut self, view_state: ViewState) -> ChartResult<RenderOutcome> {
        self.view_state = Some(view_state);
        self.rerender(view_state)
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> ChartResult<RenderOutcome> {
        let Some(view_state) = self.view_state else {
            return Ok(self.skip(
                SkipReason::UnmeasuredSurface,
                self.samples.len(),
                ViewState::new(0, 0).with_fullscreen(fullscreen),
            ));
        };
        self.set_view_state(view_state.with_fullscreen(fullscreen))
    }

    /// Redraws the retained samples. When they cannot be drawn, the previous
    /// scene no longer describes them, so hover is disabled until the next
    /// successful pass.
    fn rerender(&mut self, view_state: ViewState) -> ChartResult<RenderOutcome> {
        let pass = match self.prepare_render_pass(&self.samples, self.reference_price, view_state) {
            Ok(pass) => pass,
            Err(err) => return Err(self.fail_rerender(err)),
        };
        match pass {
            RenderPass::Skipped(reason) => {
                self.invalidate_scene()?;
                Ok(self.skip(reason, self.samples.len(), view_state))
            }
            RenderPass::Ready { scene, frame } => {
                if let Err(err) = self.renderer.render(&frame) {
                    return Err(self.fail_rerender(err));
                }
                Ok(self.commit_render_pass(scene, self.reference_price, view_state))
            }
        }
    }

    fn fail_rerender(&mut self, err: ChartError) -> ChartError {
        if let Err(hide_err) = self.invalidate_scene() {
            warn!(error = %hide_err, "failed to hide overlay after render failure");
        }
        err
    }

    /// Drops the scene, resets hover and hides the overlay.
    fn invalidate_scene(&mut self) -> ChartResult<()> {
        if self.scene.take().is_none() {
            return Ok(());
        }
        self.interaction.reset();
        debug!(samples = self.samples.len(), "chart scene invalidated");
        self.renderer.render_overlay(None)
    }

    fn prepare_render_pass(
        &self,
        samples: &[Sample],
        reference_price: f64,
        view_state: ViewState,
    ) -> ChartResult<RenderPass> {
        if samples.is_empty() {
            return Ok(RenderPass::Skipped(SkipReason::EmptySeries));
        }
        let margins = self.config.margins_for(view_state.fullscreen);
        let Some(layout) = PlotLayout::resolve(view_state, margins, self.config.volume_band_ratio)
        else {
            return Ok(RenderPass::Skipped(SkipReason::UnmeasuredSurface));
        };

        validate_reference_price(reference_price)?;
        validate_samples(samples)?;

        let scene = ChartScene::build(samples, layout, &self.config)?;
        let frame = self.build_render_frame(samples, reference_price, &scene)?;
        Ok(RenderPass::Ready { scene, frame })
    }

    fn commit_render_pass(
        &mut self,
        scene: ChartScene,
        reference_price: f64,
        view_state: ViewState,
    ) -> RenderOutcome {
        self.reference_price = reference_price;
        self.view_state = Some(view_state);
        self.scene = Some(scene);
        // The renderer already dropped its overlay; hover pixels are stale.
        self.interaction.reset();

        debug!(
            samples = self.samples.len(),
            width = view_state.width,
            height = view_state.height,
            fullscreen = view_state.fullscreen,
            "chart rendered"
        );
        RenderOutcome::Rendered
    }

    fn skip(&self, reason: SkipReason, samples: usize, view_state: ViewState) -> RenderOutcome {
        debug!(
            ?reason,
            samples,
            width = view_state.width,
            height = view_state.height,
            "render skipped"
        );
        RenderOutcome::Skipped(reason)
    }
}

fn validate_reference_price(reference_price: f64) -> ChartResult<()> {
    if !reference_price.is_finite() {
        return Err(ChartError::InvalidData(
            "reference price must be finite".to_owned(),
        ));
    }
    Ok(())
}
