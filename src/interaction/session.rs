use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// Interpretation of a drag, resolved from the active tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Pan,
    ZoomSelect,
    Select,
}

/// Dominant direction of the latest pan movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDirection {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// Compares the pointer against its previous position.
    ///
    /// The axis with the larger absolute delta wins; equal magnitudes keep
    /// `previous_direction`.
    #[must_use]
    pub fn resolve(previous: ScreenPoint, current: ScreenPoint, previous_direction: Self) -> Self {
        let delta_x = previous.x - current.x;
        let delta_y = previous.y - current.y;
        if delta_x.abs() > delta_y.abs() {
            if delta_x > 0.0 {
                return Self::Left;
            }
            if delta_x < 0.0 {
                return Self::Right;
            }
        } else if delta_y.abs() > delta_x.abs() {
            if delta_y > 0.0 {
                return Self::Up;
            }
            if delta_y < 0.0 {
                return Self::Down;
            }
        }
        previous_direction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Pressed,
    Dragging,
}

/// Ephemeral record of one press-to-release interaction.
///
/// Points are grid-local, bar padding included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSession {
    start: ScreenPoint,
    current: ScreenPoint,
    dragged: bool,
    mode: GestureMode,
    move_direction: MoveDirection,
    phase: GesturePhase,
}

impl GestureSession {
    #[must_use]
    pub fn begin(start: ScreenPoint, mode: GestureMode) -> Self {
        Self {
            start,
            current: start,
            dragged: false,
            mode,
            move_direction: MoveDirection::None,
            phase: GesturePhase::Pressed,
        }
    }

    #[must_use]
    pub fn start(self) -> ScreenPoint {
        self.start
    }

    #[must_use]
    pub fn current(self) -> ScreenPoint {
        self.current
    }

    #[must_use]
    pub fn dragged(self) -> bool {
        self.dragged
    }

    #[must_use]
    pub fn mode(self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn move_direction(self) -> MoveDirection {
        self.move_direction
    }

    #[must_use]
    pub fn phase(self) -> GesturePhase {
        self.phase
    }

    /// Records movement; once dragged, a session stays dragged.
    pub fn on_move(&mut self, current: ScreenPoint, mode: GestureMode) {
        self.current = current;
        self.mode = mode;
        self.dragged = true;
        self.phase = GesturePhase::Dragging;
    }

    pub fn set_current(&mut self, current: ScreenPoint) {
        self.current = current;
    }

    pub fn set_move_direction(&mut self, direction: MoveDirection) {
        self.move_direction = direction;
    }

    /// Absolute pixel distance between start and `end` on each axis.
    #[must_use]
    pub fn drag_distance(self, end: ScreenPoint) -> (f64, f64) {
        ((end.x - self.start.x).abs(), (end.y - self.start.y).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::{GesturePhase, GestureMode, GestureSession, MoveDirection};
    use crate::core::ScreenPoint;

    #[test]
    fn dominant_axis_decides_direction() {
        let previous = ScreenPoint::new(100.0, 100.0);
        assert_eq!(
            MoveDirection::resolve(previous, ScreenPoint::new(90.0, 97.0), MoveDirection::None),
            MoveDirection::Left
        );
        assert_eq!(
            MoveDirection::resolve(previous, ScreenPoint::new(104.0, 101.0), MoveDirection::None),
            MoveDirection::Right
        );
        assert_eq!(
            MoveDirection::resolve(previous, ScreenPoint::new(101.0, 90.0), MoveDirection::None),
            MoveDirection::Up
        );
        assert_eq!(
            MoveDirection::resolve(previous, ScreenPoint::new(99.0, 110.0), MoveDirection::None),
            MoveDirection::Down
        );
    }

    #[test]
    fn equal_magnitudes_keep_previous_direction() {
        let previous = ScreenPoint::new(0.0, 0.0);
        let next = ScreenPoint::new(5.0, 5.0);
        assert_eq!(
            MoveDirection::resolve(previous, next, MoveDirection::Left),
            MoveDirection::Left
        );
        assert_eq!(
            MoveDirection::resolve(previous, previous, MoveDirection::Down),
            MoveDirection::Down
        );
    }

    #[test]
    fn session_stays_dragged_after_first_move() {
        let mut session = GestureSession::begin(ScreenPoint::new(10.0, 10.0), GestureMode::Select);
        assert_eq!(session.phase(), GesturePhase::Pressed);
        session.on_move(ScreenPoint::new(12.0, 10.0), GestureMode::Select);
        session.set_current(ScreenPoint::new(10.0, 10.0));
        assert!(session.dragged());
        assert_eq!(session.phase(), GesturePhase::Dragging);
        assert_eq!(session.drag_distance(ScreenPoint::new(40.0, 4.0)), (30.0, 6.0));
    }
}
