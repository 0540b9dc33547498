use super::{ChartInteraction, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Runs scheduled tasks due at `now_ms`; hosts call this from their loop.
    ///
    /// Does nothing before `attach` or after `destroy`.
    pub fn poll_timers(&mut self, now_ms: u64) {
        if !self.is_live() {
            return;
        }

        if let Some(fire_ms) = self.wheel_task.due_at() {
            if let Some(wheel) = self.wheel_task.take_due(now_ms) {
                self.fire_trailing_wheel(wheel, fire_ms);
            }
        }
        if self.selection_task.take_due(now_ms).is_some() {
            self.fire_selection_notification();
        }
    }

    #[must_use]
    pub fn has_pending_wheel_zoom(&self) -> bool {
        self.wheel_task.is_pending()
    }

    #[must_use]
    pub fn has_pending_selection_notification(&self) -> bool {
        self.selection_task.is_pending()
    }
}
