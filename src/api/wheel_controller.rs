use tracing::{debug, trace};

use crate::interaction::WheelInput;

use super::wheel_zoom_resolver::resolve_wheel_zoom;
use super::{ChartInteraction, RangeUpdate, ViewportHost, WHEEL_DEBOUNCE_MS, WHEEL_DELAY_MS};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Runs a wheel zoom now when the wheel window elapsed, then replaces the
    /// trailing execution with one for this event.
    pub(super) fn handle_wheel(&mut self, wheel: WheelInput) {
        let now_ms = wheel.time_ms;
        if self.state.wheel_window_elapsed(now_ms, WHEEL_DELAY_MS) {
            self.execute_wheel_zoom(wheel);
            self.state.record_wheel_execution(now_ms);
            self.wheel_stats.immediate += 1;
        }
        self.wheel_task.schedule(now_ms, WHEEL_DEBOUNCE_MS, wheel);
    }

    /// Trailing execution; applies only when the wheel window elapsed again
    /// at `fire_ms`.
    pub(super) fn fire_trailing_wheel(&mut self, wheel: WheelInput, fire_ms: u64) {
        self.wheel_stats.trailing_fired += 1;
        if !self.state.wheel_window_elapsed(fire_ms, WHEEL_DELAY_MS) {
            trace!(fire_ms, "trailing wheel zoom coalesced");
            return;
        }
        self.execute_wheel_zoom(wheel);
        self.state.record_wheel_execution(fire_ms);
        self.wheel_stats.trailing_applied += 1;
    }

    fn execute_wheel_zoom(&mut self, wheel: WheelInput) {
        let Some(geometry) = self.host.geometry() else {
            trace!("skip wheel zoom without grid layout");
            return;
        };
        let pointer_fraction = (wheel.client_x - geometry.grid.left) / geometry.grid.width;
        let Some(range) = resolve_wheel_zoom(
            geometry.horizontal_domain(),
            pointer_fraction,
            wheel.delta_y,
            geometry.horizontal_bounds(),
        ) else {
            debug!(delta_y = wheel.delta_y, "wheel zoom discarded");
            return;
        };

        let zoom = self.callbacks.filter_zoom(RangeUpdate::x_only(range));
        if !zoom.is_finite() {
            debug!("wheel zoom discarded after before-zoom hook");
            return;
        }
        self.apply_zoom(zoom);
    }
}
