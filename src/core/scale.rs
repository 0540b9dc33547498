use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{AxisRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// Rounded axis extremes the grid is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceScale {
    pub nice_min: f64,
    pub nice_max: f64,
}

impl NiceScale {
    #[must_use]
    pub const fn new(nice_min: f64, nice_max: f64) -> Self {
        Self { nice_min, nice_max }
    }
}

impl From<AxisRange> for NiceScale {
    fn from(range: AxisRange) -> Self {
        Self::new(range.min, range.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScales {
    pub x: NiceScale,
    pub y: SmallVec<[NiceScale; 2]>,
}

impl AxisScales {
    /// Scales whose extremes coincide with the viewport window.
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            x: NiceScale::from(viewport.x),
            y: viewport.y.iter().copied().map(NiceScale::from).collect(),
        }
    }
}

/// Data-units-per-pixel factors derived from the viewport and grid size.
///
/// Read-only to gesture and annotation logic; the host recomputes it whenever
/// the window or the grid size changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub x_ratio: f64,
    pub y_ratio: SmallVec<[f64; 2]>,
    /// Horizontal ratio of the primary y scale, used by range-bar charts.
    pub inverted_y_ratio: f64,
}

impl RatioSet {
    pub fn from_viewport(viewport: &Viewport, grid_width: f64, grid_height: f64) -> ChartResult<Self> {
        if !grid_width.is_finite()
            || !grid_height.is_finite()
            || grid_width <= 0.0
            || grid_height <= 0.0
        {
            return Err(ChartError::InvalidGrid {
                width: grid_width,
                height: grid_height,
            });
        }
        viewport.validate()?;

        let primary_y_span = viewport.primary_y().map_or(0.0, AxisRange::span);
        Ok(Self {
            x_ratio: viewport.x.span() / grid_width,
            y_ratio: viewport
                .y
                .iter()
                .map(|range| range.span() / grid_height)
                .collect(),
            inverted_y_ratio: primary_y_span / grid_width,
        })
    }

    /// Ratio for y-axis `index`; NaN when the axis does not exist so that
    /// downstream bounds fail the finiteness check.
    #[must_use]
    pub fn y_ratio_at(&self, index: usize) -> f64 {
        self.y_ratio.get(index).copied().unwrap_or(f64::NAN)
    }
}
