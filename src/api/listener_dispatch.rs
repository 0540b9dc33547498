use tracing::trace;

use crate::extensions::{InteractionEvent, ListenerContext};

use super::{ChartInteraction, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    pub(super) fn listener_context(&self) -> ListenerContext {
        ListenerContext {
            interaction_mode: self.interaction_mode(),
            tools: self.state.tools(),
            visible_x: self
                .host
                .geometry()
                .map(|geometry| geometry.horizontal_domain()),
            zoomed: self.state.zoomed(),
        }
    }

    pub(super) fn emit_event(&mut self, event: InteractionEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        trace!(event = event.name(), listeners = self.listeners.len(), "dispatch");
        for listener in &mut self.listeners {
            listener.on_event(event, context);
        }
    }
}
