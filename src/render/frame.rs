use smallvec::SmallVec;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for the static chart layer.
///
/// Backends paint `paths`, then `rects`, then `lines`, then `badges`, then
/// `texts`. Badges cover the gridlines behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub badges: Vec<LabelBox>,
    pub texts: Vec<TextPrimitive>,
}

/// Filled box with one label, painted as a unit above the line layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBox {
    pub rect: RectPrimitive,
    pub text: TextPrimitive,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            badges: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: LabelBox) -> Self {
        self.badges.push(badge);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_viewport(self.viewport)?;

        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for badge in &self.badges {
            badge.rect.validate()?;
            badge.text.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.badges.is_empty()
            && self.texts.is_empty()
    }
}

/// Floating label box near the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBox {
    pub rect: RectPrimitive,
    pub lines: SmallVec<[TextPrimitive; 2]>,
}

/// Hover layer drawn over the static frame: crosshair, marker, tooltip.
///
/// Each overlay fully replaces the previous one on the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub viewport: Viewport,
    pub crosshair: SmallVec<[LinePrimitive; 2]>,
    pub marker: CirclePrimitive,
    pub tooltip: TooltipBox,
}

impl OverlayFrame {
    pub fn validate(&self) -> ChartResult<()> {
        validate_viewport(self.viewport)?;
        for line in &self.crosshair {
            line.validate()?;
        }
        self.marker.validate()?;
        self.tooltip.rect.validate()?;
        for text in &self.tooltip.lines {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.crosshair.len() + 1 + 1 + self.tooltip.lines.len()
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
