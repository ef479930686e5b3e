use crate::core::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// No sample is selected and the overlay is hidden.
    Idle,
    /// A sample is selected and the overlay shows it.
    Hovering,
}

/// Selected sample together with its plot-local pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSnap {
    pub sample: Sample,
    pub x: f64,
    pub y: f64,
}

/// Transient pointer state, recomputed on every pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    pub nearest: Option<HoverSnap>,
    /// Last pointer position in surface pixels.
    pub pointer: Option<(f64, f64)>,
}

impl HoverState {
    #[must_use]
    pub fn nearest_sample(&self) -> Option<Sample> {
        self.nearest.map(|snap| snap.sample)
    }
}

/// Two-state hover machine driven by pointer events and full renders.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.hover.nearest.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Records a pointer move; `snap` is `None` when the pointer is outside
    /// the series.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, snap: Option<HoverSnap>) {
        self.hover.pointer = Some((x, y));
        self.hover.nearest = snap;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    /// A full render invalidates every pixel position held by the hover.
    pub fn reset(&mut self) {
        self.hover = HoverState::default();
    }
}
