use crate::core::ScreenPoint;
use crate::interaction::{ChartInteractionState, GesturePhase, GestureSession, InteractionMode};
use crate::overlay::SelectionOverlay;

use super::{ChartInteraction, InteractionConfig, Lifecycle, ViewportHost, WheelZoomStats};

impl<H: ViewportHost> ChartInteraction<H> {
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to change the layout between events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ChartInteractionState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<GestureSession> {
        self.session
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        match self.session {
            None => InteractionMode::Idle,
            Some(session) => match session.phase() {
                GesturePhase::Pressed => InteractionMode::Pressed,
                GesturePhase::Dragging => InteractionMode::Dragging(session.mode()),
            },
        }
    }

    #[must_use]
    pub fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Client position of the latest gesture event.
    #[must_use]
    pub fn client_position(&self) -> Option<ScreenPoint> {
        self.client_position
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn wheel_stats(&self) -> WheelZoomStats {
        self.wheel_stats
    }
}
