use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, RectRole, TextPrimitive};

/// Backend-agnostic overlay scene: zoom box, selection box with its handles,
/// and the x-axis annotation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub grid_width: f64,
    pub grid_height: f64,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(grid_width: f64, grid_height: f64) -> Self {
        Self {
            grid_width,
            grid_height,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
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
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn rects_with_role(&self, role: RectRole) -> impl Iterator<Item = &RectPrimitive> {
        self.rects.iter().filter(move |rect| rect.role == role)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.grid_width.is_finite()
            || !self.grid_height.is_finite()
            || self.grid_width <= 0.0
            || self.grid_height <= 0.0
        {
            return Err(ChartError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
