use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::scale::{AxisScales, RatioSet};
use crate::core::types::{AxisOrientation, AxisRange, GridRect, ScreenPoint, Viewport};

/// Layout and domain snapshot the host provides for one event.
///
/// A host returns `None` instead of a snapshot while the grid is not laid out;
/// every interaction path treats that as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub grid: GridRect,
    /// Offset of the grid inside the drawing surface, applied to overlays.
    pub translate: ScreenPoint,
    pub viewport: Viewport,
    /// Domain the chart was initially built with; pan and wheel zoom never
    /// leave it on bounded axes.
    pub full_domain: Viewport,
    pub scales: AxisScales,
    pub ratios: RatioSet,
    /// Horizontal padding reserved by bar series on numeric x-axes.
    pub bar_padding: f64,
    pub orientation: AxisOrientation,
    /// Number of categories when a categorical x-axis is zoomed as numbers.
    pub category_count: Option<usize>,
}

impl ChartGeometry {
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.orientation, &self.scales, &self.ratios)
    }

    #[must_use]
    pub fn grid_width(&self) -> f64 {
        self.grid.width
    }

    #[must_use]
    pub fn grid_height(&self) -> f64 {
        self.grid.height
    }

    /// Client coordinates to grid-local coordinates, bar padding included.
    #[must_use]
    pub fn to_local(&self, client: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            client.x - self.grid.left - self.bar_padding,
            client.y - self.grid.top,
        )
    }

    /// Currently displayed window of the horizontally drawn domain.
    #[must_use]
    pub fn horizontal_domain(&self) -> AxisRange {
        match self.orientation {
            AxisOrientation::Normal => self.viewport.x,
            AxisOrientation::RangeBar => self.viewport.primary_y().unwrap_or(self.viewport.x),
        }
    }

    /// Full-domain limit of the horizontal axis; `None` when it is unbounded.
    #[must_use]
    pub fn horizontal_bounds(&self) -> Option<AxisRange> {
        match self.orientation {
            AxisOrientation::Normal => Some(self.full_domain.x),
            AxisOrientation::RangeBar => None,
        }
    }
}
