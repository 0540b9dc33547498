use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Point in pixel space (client or grid-local, depending on context).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in grid-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Zero-area rectangles carry no selection.
    #[must_use]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Bounding box of the plot grid in client coordinates.
///
/// Hosts re-query this on every interaction; it is never cached across events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl GridRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Closed domain interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Finite and strictly increasing.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.is_finite() && self.min < self.max
    }

    #[must_use]
    pub fn contains_range(self, other: Self) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }
}

/// One entry per configured y-axis.
pub type YAxisRanges = SmallVec<[AxisRange; 2]>;

/// Domain window currently displayed by the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: AxisRange,
    pub y: YAxisRanges,
}

impl Viewport {
    #[must_use]
    pub fn new(x: AxisRange, y: impl IntoIterator<Item = AxisRange>) -> Self {
        Self {
            x,
            y: y.into_iter().collect(),
        }
    }

    /// Single y-axis viewport.
    #[must_use]
    pub fn single(x: AxisRange, y: AxisRange) -> Self {
        Self::new(x, [y])
    }

    #[must_use]
    pub fn primary_y(&self) -> Option<AxisRange> {
        self.y.first().copied()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_valid() {
            return Err(ChartError::InvalidData(
                "viewport x range must be finite with min < max".to_owned(),
            ));
        }
        if self.y.is_empty() {
            return Err(ChartError::InvalidData(
                "viewport requires at least one y-axis range".to_owned(),
            ));
        }
        if let Some(index) = self.y.iter().position(|range| !range.is_valid()) {
            return Err(ChartError::InvalidData(format!(
                "viewport y-axis {index} range must be finite with min < max"
            )));
        }
        Ok(())
    }
}

/// How domain values conventionally on the x-axis are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    #[default]
    Normal,
    /// Range-bar charts put datetime data on the y-axis scale while it is
    /// drawn horizontally; that axis is not bounded by the initial domain.
    RangeBar,
}
