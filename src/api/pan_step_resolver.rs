use crate::core::AxisRange;
use crate::interaction::MoveDirection;

/// One pan step moves the window by this fraction of the grid width.
pub const PAN_STEP_DIVISOR: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PanStep {
    /// New horizontal window.
    Accepted(AxisRange),
    /// The step would leave the bounded domain; the window stays as it was.
    Reverted,
    /// Vertical or no movement; horizontal panning has nothing to do.
    Idle,
}

/// Steps `current` opposite to the pointer movement.
///
/// Dragging left reveals later values, dragging right earlier ones. On a
/// bounded axis a step that leaves `bounds` is discarded rather than clamped.
pub(super) fn resolve_pan_step(
    current: AxisRange,
    direction: MoveDirection,
    grid_width: f64,
    ratio: f64,
    bounds: Option<AxisRange>,
) -> PanStep {
    let step = grid_width / PAN_STEP_DIVISOR * ratio;
    let next = match direction {
        MoveDirection::Left => current.shifted(step),
        MoveDirection::Right => current.shifted(-step),
        MoveDirection::Up | MoveDirection::Down | MoveDirection::None => return PanStep::Idle,
    };
    if !next.is_valid() {
        return PanStep::Reverted;
    }
    if let Some(bounds) = bounds {
        if next.min < bounds.min || next.max > bounds.max {
            return PanStep::Reverted;
        }
    }
    PanStep::Accepted(next)
}

#[cfg(test)]
mod tests {
    use super::{PanStep, resolve_pan_step};
    use crate::core::AxisRange;
    use crate::interaction::MoveDirection;

    #[test]
    fn left_drag_steps_forward_by_grid_fraction() {
        let step = resolve_pan_step(
            AxisRange::new(100.0, 400.0),
            MoveDirection::Left,
            300.0,
            1.0,
            Some(AxisRange::new(0.0, 1_000.0)),
        );
        assert_eq!(step, PanStep::Accepted(AxisRange::new(120.0, 420.0)));
    }

    #[test]
    fn right_drag_steps_backward() {
        let step = resolve_pan_step(
            AxisRange::new(100.0, 400.0),
            MoveDirection::Right,
            300.0,
            0.5,
            None,
        );
        assert_eq!(step, PanStep::Accepted(AxisRange::new(90.0, 390.0)));
    }

    #[test]
    fn step_past_bounds_is_reverted() {
        let step = resolve_pan_step(
            AxisRange::new(690.0, 990.0),
            MoveDirection::Left,
            300.0,
            1.0,
            Some(AxisRange::new(0.0, 1_000.0)),
        );
        assert_eq!(step, PanStep::Reverted);
    }

    #[test]
    fn vertical_movement_is_idle() {
        let step = resolve_pan_step(
            AxisRange::new(0.0, 10.0),
            MoveDirection::Up,
            300.0,
            1.0,
            None,
        );
        assert_eq!(step, PanStep::Idle);
    }
}
