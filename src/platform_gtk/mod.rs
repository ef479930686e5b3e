use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ChartEngine, RenderOutcome};
use crate::core::{Sample, ViewState};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

pub type UiEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

/// Hosts a chart engine inside a `gtk::DrawingArea`.
///
/// Resizes re-render the retained data, pointer motion drives the overlay,
/// and the draw callback only blits the composited Cairo surface.
pub struct GtkChartAdapter {
    drawing_area: gtk::DrawingArea,
    engine: UiEngine,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(engine: ChartEngine<CairoRenderer>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        install_draw_func(&drawing_area, &engine);
        install_resize_handler(&drawing_area, &engine);
        install_pointer_controller(&drawing_area, &engine);

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> UiEngine {
        Rc::clone(&self.engine)
    }

    /// Replaces the chart data and schedules a redraw.
    pub fn set_data(&self, samples: Vec<Sample>, reference_price: f64) -> ChartResult<RenderOutcome> {
        let outcome = self
            .engine
            .borrow_mut()
            .set_data(samples, reference_price)?;
        self.drawing_area.queue_draw();
        Ok(outcome)
    }

    pub fn set_fullscreen(&self, fullscreen: bool) -> ChartResult<RenderOutcome> {
        let outcome = self.engine.borrow_mut().set_fullscreen(fullscreen)?;
        self.drawing_area.queue_draw();
        Ok(outcome)
    }
}

fn install_draw_func(drawing_area: &gtk::DrawingArea, engine: &UiEngine) {
    let engine = Rc::clone(engine);
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(chart) = engine.try_borrow() else {
            return;
        };
        let surface = chart.renderer().surface();
        if surface.width() != width || surface.height() != height {
            // Resize has not re-rendered yet; the next draw picks it up.
            return;
        }
        let painted = context
            .set_source_surface(surface, 0.0, 0.0)
            .and_then(|()| context.paint());
        if let Err(err) = painted {
            warn!(error = %err, "failed to blit chart surface");
        }
    });
}

fn install_resize_handler(drawing_area: &gtk::DrawingArea, engine: &UiEngine) {
    let engine = Rc::clone(engine);
    drawing_area.connect_resize(move |area, width, height| {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return;
        };
        let Ok(mut chart) = engine.try_borrow_mut() else {
            return;
        };
        let fullscreen = chart.view_state().is_some_and(|state| state.fullscreen);
        let view_state = ViewState::new(width, height).with_fullscreen(fullscreen);
        if let Err(err) = chart.set_view_state(view_state) {
            warn!(error = %err, width, height, "chart re-render on resize failed");
        }
        area.queue_draw();
    });
}

fn install_pointer_controller(drawing_area: &gtk::DrawingArea, engine: &UiEngine) {
    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(engine);
        let area = drawing_area.downgrade();
        motion.connect_motion(move |_, x, y| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                if let Err(err) = chart.pointer_move(x, y) {
                    warn!(error = %err, x, y, "pointer move failed");
                }
            }
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });
    }
    {
        let engine = Rc::clone(engine);
        let area = drawing_area.downgrade();
        motion.connect_leave(move |_| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                if let Err(err) = chart.pointer_leave() {
                    warn!(error = %err, "pointer leave failed");
                }
            }
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });
    }
    drawing_area.add_controller(motion);
}
