use tracing::trace;

use crate::core::{ChartGeometry, ScreenPoint};
use crate::extensions::InteractionEvent;
use crate::interaction::MoveDirection;

use super::pan_step_resolver::{PanStep, resolve_pan_step};
use super::{ChartInteraction, RangeUpdate, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Applies one pan step for the pointer now at `client`.
    ///
    /// Direction compares against the last pointer position, which persists
    /// across gestures.
    pub(super) fn pan_step(&mut self, client: ScreenPoint, geometry: &ChartGeometry) {
        let previous_position = self.state.replace_last_pointer_position(client);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let direction = match previous_position {
            Some(previous) => MoveDirection::resolve(previous, client, session.move_direction()),
            None => session.move_direction(),
        };
        session.set_move_direction(direction);

        let step = resolve_pan_step(
            geometry.horizontal_domain(),
            direction,
            geometry.grid_width(),
            geometry.mapper().horizontal().ratio,
            geometry.horizontal_bounds(),
        );
        let range = match step {
            PanStep::Accepted(range) => range,
            PanStep::Reverted => {
                trace!(?direction, "pan step reverted at domain bounds");
                return;
            }
            PanStep::Idle => return,
        };

        let update = RangeUpdate {
            xaxis: Some(range),
            yaxis: (!self.config.in_group()).then(|| geometry.full_domain.y.clone()),
        };
        self.host.update_range(&update, false);
        self.callbacks.scrolled(range);
        self.emit_event(InteractionEvent::Scrolled { x: range });
    }
}
