use tracing::debug;

use crate::extensions::InteractionEvent;
use crate::interaction::{InputEventKind, ListenerKind};

use super::{ChartInteraction, Lifecycle, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Subscribes to the input stream, draws a preselected selection and
    /// builds the annotation layer. Attaching twice, or after `destroy`, does
    /// nothing.
    pub fn attach(&mut self) {
        if self.lifecycle != Lifecycle::Detached {
            return;
        }

        for kind in InputEventKind::GESTURE_STREAM {
            self.subscriptions.subscribe(kind, ListenerKind::Gesture);
        }
        if self.config.zoom.enabled && self.config.zoom.wheel_enabled {
            self.subscriptions
                .subscribe(InputEventKind::Wheel, ListenerKind::WheelZoom);
        }
        self.lifecycle = Lifecycle::Attached;

        self.draw_preselected_selection();
        self.rebuild_annotations();
        debug!(
            subscriptions = self.subscriptions.len(),
            "chart interaction attached"
        );
    }

    /// Releases every subscription, cancels both scheduled tasks and clears
    /// the overlays. No callback or listener runs afterwards.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }

        let released = self.subscriptions.release_all();
        let wheel_cancelled = self.wheel_task.cancel();
        let selection_cancelled = self.selection_task.cancel();

        self.overlay.hide_all();
        self.overlay.disable_adjustment();
        self.annotations.clear();
        self.session = None;
        self.state.on_pointer_up();

        self.emit_event(InteractionEvent::TornDown);
        self.listeners.clear();
        self.callbacks.clear();
        self.lifecycle = Lifecycle::Destroyed;

        debug!(
            released,
            wheel_cancelled, selection_cancelled, "chart interaction destroyed"
        );
    }
}
