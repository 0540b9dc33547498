use smallvec::SmallVec;

use crate::core::scale::{AxisScales, NiceScale, RatioSet};
use crate::core::types::{AxisOrientation, AxisRange, YAxisRanges};

/// Grid-local pixel to domain value: `nice_min + px * ratio`.
#[must_use]
pub fn screen_to_data(local_px: f64, nice_min: f64, ratio: f64) -> f64 {
    nice_min + local_px * ratio
}

/// Domain value to grid-local pixel: `(value - nice_min) / ratio`.
#[must_use]
pub fn data_to_screen(value: f64, nice_min: f64, ratio: f64) -> f64 {
    (value - nice_min) / ratio
}

/// Scale extremes plus the ratio that converts one pixel into domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    pub nice_min: f64,
    pub nice_max: f64,
    pub ratio: f64,
}

impl AxisMapping {
    #[must_use]
    pub fn new(scale: NiceScale, ratio: f64) -> Self {
        Self {
            nice_min: scale.nice_min,
            nice_max: scale.nice_max,
            ratio,
        }
    }
}

/// Stateless pixel/domain conversion for one ratio set.
///
/// The horizontal mapping reads the x scale and `x_ratio`, except for
/// range-bar charts where it reads the primary y scale and `inverted_y_ratio`.
/// Vertical mappings measure pixels downwards from `nice_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    horizontal: AxisMapping,
    vertical: SmallVec<[AxisMapping; 2]>,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(orientation: AxisOrientation, scales: &AxisScales, ratios: &RatioSet) -> Self {
        let horizontal = match orientation {
            AxisOrientation::Normal => AxisMapping::new(scales.x, ratios.x_ratio),
            AxisOrientation::RangeBar => AxisMapping::new(
                scales.y.first().copied().unwrap_or(scales.x),
                ratios.inverted_y_ratio,
            ),
        };
        let vertical = scales
            .y
            .iter()
            .enumerate()
            .map(|(index, scale)| AxisMapping::new(*scale, ratios.y_ratio_at(index)))
            .collect();
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> AxisMapping {
        self.horizontal
    }

    #[must_use]
    pub fn y_axis_count(&self) -> usize {
        self.vertical.len()
    }

    #[must_use]
    pub fn x_to_data(&self, local_px: f64) -> f64 {
        screen_to_data(local_px, self.horizontal.nice_min, self.horizontal.ratio)
    }

    #[must_use]
    pub fn data_to_x(&self, value: f64) -> f64 {
        data_to_screen(value, self.horizontal.nice_min, self.horizontal.ratio)
    }

    #[must_use]
    pub fn y_to_data(&self, axis: usize, local_px: f64) -> Option<f64> {
        let mapping = self.vertical.get(axis)?;
        Some(mapping.nice_max - local_px * mapping.ratio)
    }

    #[must_use]
    pub fn data_to_y(&self, axis: usize, value: f64) -> Option<f64> {
        let mapping = self.vertical.get(axis)?;
        Some((mapping.nice_max - value) / mapping.ratio)
    }

    /// Domain interval covered by the horizontal pixel span `[left, right]`.
    #[must_use]
    pub fn x_range(&self, left_px: f64, right_px: f64) -> AxisRange {
        AxisRange::new(self.x_to_data(left_px), self.x_to_data(right_px))
    }

    /// Domain intervals of every y-axis covered by the vertical span `[top, bottom]`.
    #[must_use]
    pub fn y_ranges(&self, top_px: f64, bottom_px: f64) -> YAxisRanges {
        self.vertical
            .iter()
            .map(|mapping| {
                AxisRange::new(
                    mapping.nice_max - bottom_px * mapping.ratio,
                    mapping.nice_max - top_px * mapping.ratio,
                )
            })
            .collect()
    }
}
