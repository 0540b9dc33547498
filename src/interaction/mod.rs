pub mod input;
pub mod scheduler;
pub mod session;
pub mod subscription;

use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, ScreenRect};

pub use input::{
    EventDisposition, InputEvent, InputEventKind, InputTarget, PointerInput, TouchInput,
    TouchPoint, WheelInput,
};
pub use scheduler::{CancelToken, DelayedTask};
pub use session::{GestureMode, GesturePhase, GestureSession, MoveDirection};
pub use subscription::{ListenerKind, SubscriptionHandle, SubscriptionSet};

/// Toolbar tool that a shift toggle or the configured default selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarTool {
    #[default]
    Zoom,
    Pan,
    Selection,
}

/// Tools currently armed for drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveTools {
    pub zoom: bool,
    pub pan: bool,
    pub selection: bool,
}

impl ActiveTools {
    /// Gesture interpretation for a drag started now.
    #[must_use]
    pub fn gesture_mode(self) -> GestureMode {
        if self.pan {
            GestureMode::Pan
        } else if self.zoom {
            GestureMode::ZoomSelect
        } else {
            GestureMode::Select
        }
    }
}

/// Public phase of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Pressed,
    Dragging(GestureMode),
}

/// Interaction state shared by every component of one chart instance.
///
/// Created with the chart interaction and dropped with it; gesture handling
/// is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartInteractionState {
    pointer_down: bool,
    last_wheel_execution_ms: Option<u64>,
    last_pointer_position: Option<ScreenPoint>,
    committed_selection: Option<ScreenRect>,
    tools: ActiveTools,
    shift_was_pressed: bool,
    zoomed: bool,
}

impl ChartInteractionState {
    #[must_use]
    pub fn new(tools: ActiveTools) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pointer_down(self) -> bool {
        self.pointer_down
    }

    pub fn on_pointer_down(&mut self) {
        self.pointer_down = true;
    }

    pub fn on_pointer_up(&mut self) {
        self.pointer_down = false;
    }

    #[must_use]
    pub fn tools(self) -> ActiveTools {
        self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ActiveTools {
        &mut self.tools
    }

    #[must_use]
    pub fn shift_was_pressed(self) -> bool {
        self.shift_was_pressed
    }

    pub fn set_shift_was_pressed(&mut self, pressed: bool) {
        self.shift_was_pressed = pressed;
    }

    #[must_use]
    pub fn last_wheel_execution_ms(self) -> Option<u64> {
        self.last_wheel_execution_ms
    }

    /// `true` when more than `wheel_delay_ms` passed since the last executed
    /// wheel zoom, or when no wheel zoom ever ran.
    #[must_use]
    pub fn wheel_window_elapsed(self, now_ms: u64, wheel_delay_ms: u64) -> bool {
        match self.last_wheel_execution_ms {
            Some(last) => now_ms.saturating_sub(last) > wheel_delay_ms,
            None => true,
        }
    }

    pub fn record_wheel_execution(&mut self, now_ms: u64) {
        self.last_wheel_execution_ms = Some(now_ms);
    }

    #[must_use]
    pub fn last_pointer_position(self) -> Option<ScreenPoint> {
        self.last_pointer_position
    }

    /// Stores `position` and returns the previously recorded one.
    pub fn replace_last_pointer_position(&mut self, position: ScreenPoint) -> Option<ScreenPoint> {
        self.last_pointer_position.replace(position)
    }

    #[must_use]
    pub fn committed_selection(self) -> Option<ScreenRect> {
        self.committed_selection
    }

    pub fn set_committed_selection(&mut self, selection: Option<ScreenRect>) {
        self.committed_selection = selection;
    }

    #[must_use]
    pub fn zoomed(self) -> bool {
        self.zoomed
    }

    pub fn mark_zoomed(&mut self) {
        self.zoomed = true;
    }
}
