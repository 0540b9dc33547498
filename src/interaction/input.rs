use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScreenPoint;

/// Element of the chart surface an input event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputTarget {
    #[default]
    Surface,
    LegendMarker,
    LegendText,
    Toolbar,
}

impl InputTarget {
    /// Legend and toolbar hits never reach the gesture state machine.
    #[must_use]
    pub fn is_non_interactive(self) -> bool {
        !matches!(self, Self::Surface)
    }
}

/// Mouse/pen sample in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
    pub primary_button: bool,
    pub shift_key: bool,
    pub target: InputTarget,
    /// Host monotonic clock in milliseconds.
    pub time_ms: u64,
}

impl PointerInput {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64, time_ms: u64) -> Self {
        Self {
            client_x,
            client_y,
            primary_button: true,
            shift_key: false,
            target: InputTarget::Surface,
            time_ms,
        }
    }

    #[must_use]
    pub fn with_primary_button(mut self, primary_button: bool) -> Self {
        self.primary_button = primary_button;
        self
    }

    #[must_use]
    pub fn with_shift(mut self, shift_key: bool) -> Self {
        self.shift_key = shift_key;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: InputTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn position(self) -> ScreenPoint {
        ScreenPoint::new(self.client_x, self.client_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchInput {
    /// Active touches; the first one drives start/move events.
    pub touches: SmallVec<[TouchPoint; 2]>,
    /// Touches that changed; the first one drives end events.
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
    pub shift_key: bool,
    pub target: InputTarget,
    pub time_ms: u64,
}

impl TouchInput {
    #[must_use]
    pub fn new(time_ms: u64) -> Self {
        Self {
            touches: SmallVec::new(),
            changed_touches: SmallVec::new(),
            shift_key: false,
            target: InputTarget::Surface,
            time_ms,
        }
    }

    #[must_use]
    pub fn with_touch(mut self, client_x: f64, client_y: f64) -> Self {
        self.touches.push(TouchPoint { client_x, client_y });
        self
    }

    #[must_use]
    pub fn with_changed_touch(mut self, client_x: f64, client_y: f64) -> Self {
        self.changed_touches.push(TouchPoint { client_x, client_y });
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: InputTarget) -> Self {
        self.target = target;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    pub client_x: f64,
    pub client_y: f64,
    /// Negative zooms in, positive zooms out.
    pub delta_y: f64,
    pub shift_key: bool,
    pub target: InputTarget,
    pub time_ms: u64,
}

impl WheelInput {
    #[must_use]
    pub fn new(client_x: f64, client_y: f64, delta_y: f64, time_ms: u64) -> Self {
        Self {
            client_x,
            client_y,
            delta_y,
            shift_key: false,
            target: InputTarget::Surface,
            time_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    Wheel,
}

impl InputEventKind {
    /// Every kind the gesture stream listens to.
    pub const GESTURE_STREAM: [Self; 8] = [
        Self::PointerDown,
        Self::PointerLeave,
        Self::PointerMove,
        Self::TouchStart,
        Self::TouchMove,
        Self::PointerUp,
        Self::TouchEnd,
        Self::Wheel,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    PointerLeave(PointerInput),
    TouchStart(TouchInput),
    TouchMove(TouchInput),
    TouchEnd(TouchInput),
    Wheel(WheelInput),
}

impl InputEvent {
    #[must_use]
    pub fn kind(&self) -> InputEventKind {
        match self {
            Self::PointerDown(_) => InputEventKind::PointerDown,
            Self::PointerMove(_) => InputEventKind::PointerMove,
            Self::PointerUp(_) => InputEventKind::PointerUp,
            Self::PointerLeave(_) => InputEventKind::PointerLeave,
            Self::TouchStart(_) => InputEventKind::TouchStart,
            Self::TouchMove(_) => InputEventKind::TouchMove,
            Self::TouchEnd(_) => InputEventKind::TouchEnd,
            Self::Wheel(_) => InputEventKind::Wheel,
        }
    }

    #[must_use]
    pub fn time_ms(&self) -> u64 {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerLeave(p) => {
                p.time_ms
            }
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) => t.time_ms,
            Self::Wheel(w) => w.time_ms,
        }
    }

    #[must_use]
    pub fn shift_key(&self) -> bool {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerLeave(p) => {
                p.shift_key
            }
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) => t.shift_key,
            Self::Wheel(w) => w.shift_key,
        }
    }

    #[must_use]
    pub fn target(&self) -> InputTarget {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerLeave(p) => {
                p.target
            }
            Self::TouchStart(t) | Self::TouchMove(t) | Self::TouchEnd(t) => t.target,
            Self::Wheel(w) => w.target,
        }
    }

    /// Client position driving this event.
    ///
    /// Touch start/move read the first active touch, touch end reads the first
    /// changed touch. `None` when the touch list is empty.
    #[must_use]
    pub fn client_position(&self) -> Option<ScreenPoint> {
        match self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) | Self::PointerLeave(p) => {
                Some(p.position())
            }
            Self::TouchStart(t) | Self::TouchMove(t) => t
                .touches
                .first()
                .map(|touch| ScreenPoint::new(touch.client_x, touch.client_y)),
            Self::TouchEnd(t) => t
                .changed_touches
                .first()
                .map(|touch| ScreenPoint::new(touch.client_x, touch.client_y)),
            Self::Wheel(w) => Some(ScreenPoint::new(w.client_x, w.client_y)),
        }
    }
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDisposition {
    Ignored,
    Handled,
    /// Handled, and the native default action (page scroll) must be suppressed.
    PreventDefault,
}
