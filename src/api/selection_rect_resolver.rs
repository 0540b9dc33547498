use crate::core::{ScreenPoint, ScreenRect};
use crate::overlay::SelectionAxis;

/// Normalized drag rectangle plus the axes on which the drag ran backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SelectionRectResolution {
    pub rect: ScreenRect,
    pub inverted_x: bool,
    pub inverted_y: bool,
}

/// Builds the grid-local rectangle spanned from `start` to `current`.
///
/// Both points are clamped to the grid; `x` pins the height to the grid,
/// `y` pins the width, `xy` keeps both extents free.
pub(super) fn resolve_selection_rect(
    start: ScreenPoint,
    current: ScreenPoint,
    grid_width: f64,
    grid_height: f64,
    axis: SelectionAxis,
) -> SelectionRectResolution {
    let start_x = start.x.max(0.0).min(grid_width);
    let start_y = start.y.max(0.0).min(grid_height);
    let end_x = current.x.max(0.0).min(grid_width);
    let end_y = current.y.max(0.0).min(grid_height);

    let inverted_x = start_x > end_x;
    let inverted_y = start_y > end_y;
    let x = start_x.min(end_x);
    let y = start_y.min(end_y);
    let width = (end_x - start_x).abs();
    let height = (end_y - start_y).abs();

    let rect = match axis {
        SelectionAxis::X => ScreenRect::new(x, 0.0, width, grid_height),
        SelectionAxis::Y => ScreenRect::new(0.0, y, grid_width, height),
        SelectionAxis::Xy => ScreenRect::new(x, y, width, height),
    };
    SelectionRectResolution {
        rect,
        inverted_x,
        inverted_y,
    }
}
