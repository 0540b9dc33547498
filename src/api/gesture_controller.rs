use tracing::{debug, trace, warn};

use crate::core::{ChartGeometry, ScreenPoint};
use crate::extensions::InteractionEvent;
use crate::interaction::{
    EventDisposition, GestureMode, GestureSession, InputEvent, ListenerKind, ToolbarTool,
};
use crate::overlay::OverlayBox;

use super::commit_bounds_resolver::{resolve_categorical_snap, resolve_commit_bounds};
use super::{ChartInteraction, RangeUpdate, SelectionBounds, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Processes one input event in arrival order.
    ///
    /// Scheduled tasks due at the event timestamp run first. Events are
    /// ignored before `attach` and after `destroy`.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventDisposition {
        if !self.is_live() {
            return EventDisposition::Ignored;
        }
        self.poll_timers(event.time_ms());

        let mut disposition = EventDisposition::Ignored;
        if self
            .subscriptions
            .is_subscribed(event.kind(), ListenerKind::Gesture)
            && self.handle_gesture_event(event)
        {
            disposition = EventDisposition::Handled;
        }
        if let InputEvent::Wheel(wheel) = event {
            if self
                .subscriptions
                .is_subscribed(event.kind(), ListenerKind::WheelZoom)
            {
                self.handle_wheel(*wheel);
                disposition = EventDisposition::PreventDefault;
            }
        }
        disposition
    }

    fn handle_gesture_event(&mut self, event: &InputEvent) -> bool {
        self.apply_shift_toggle(event.shift_key());

        if event.target().is_non_interactive() {
            trace!(kind = ?event.kind(), "ignore input on non-interactive target");
            return false;
        }
        let Some(client) = event.client_position() else {
            return false;
        };
        self.client_position = Some(client);

        let Some(geometry) = self.host.geometry() else {
            trace!(kind = ?event.kind(), "ignore input without grid layout");
            return false;
        };
        let now_ms = event.time_ms();

        match event {
            InputEvent::PointerDown(pointer) if pointer.primary_button => {
                self.begin_gesture(client, &geometry);
            }
            InputEvent::TouchStart(_) => self.begin_gesture(client, &geometry),
            InputEvent::PointerMove(pointer) if pointer.primary_button => {
                self.continue_gesture(client, &geometry, now_ms);
            }
            InputEvent::TouchMove(_) => self.continue_gesture(client, &geometry, now_ms),
            InputEvent::PointerUp(_) | InputEvent::PointerLeave(_) | InputEvent::TouchEnd(_) => {
                self.end_gesture(client, &geometry);
            }
            _ => {}
        }

        self.make_selection_adjustable(&geometry);
        true
    }

    /// Holding shift arms the opposite of the default tool; releasing it
    /// restores the default.
    fn apply_shift_toggle(&mut self, shift_key: bool) {
        let auto_selected = self.config.auto_selected;
        if shift_key {
            self.state.set_shift_was_pressed(true);
            let toggled = if auto_selected == ToolbarTool::Pan {
                ToolbarTool::Zoom
            } else {
                ToolbarTool::Pan
            };
            self.toolbar
                .enable_zoom_pan_from_toolbar(toggled, self.state.tools_mut());
        } else if self.state.shift_was_pressed() {
            self.toolbar
                .enable_zoom_pan_from_toolbar(auto_selected, self.state.tools_mut());
            self.state.set_shift_was_pressed(false);
        }
    }

    fn begin_gesture(&mut self, client: ScreenPoint, geometry: &ChartGeometry) {
        let mode = self.state.tools().gesture_mode();
        self.session = Some(GestureSession::begin(geometry.to_local(client), mode));
        self.state.on_pointer_down();
        self.emit_event(InteractionEvent::GestureStarted { mode });
    }

    fn continue_gesture(&mut self, client: ScreenPoint, geometry: &ChartGeometry, now_ms: u64) {
        let tools = self.state.tools();
        let mode = tools.gesture_mode();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.on_move(geometry.to_local(client), mode);

        match mode {
            GestureMode::Pan => {
                self.state.set_committed_selection(None);
                if self.state.pointer_down() {
                    self.pan_step(client, geometry);
                }
            }
            GestureMode::ZoomSelect | GestureMode::Select => {
                if self.state.pointer_down() && (tools.zoom || tools.selection) {
                    self.draw_selection(geometry, now_ms);
                }
            }
        }
    }

    fn end_gesture(&mut self, client: ScreenPoint, geometry: &ChartGeometry) {
        let tools = self.state.tools();
        let session = self.session.take();

        if let Some(session) = session.filter(|_| self.state.pointer_down()) {
            let end = geometry.to_local(client);
            let (drag_x, drag_y) = session.drag_distance(end);
            if tools.zoom || tools.selection {
                self.commit_drag(session, drag_x, drag_y, geometry);
            }
        }

        self.overlay.hide(OverlayBox::Zoom);
        if tools.zoom {
            self.overlay.hide(OverlayBox::Selection);
        }
        self.state.on_pointer_up();
        if session.is_some() {
            self.emit_event(InteractionEvent::GestureEnded);
        }
    }

    fn commit_drag(
        &mut self,
        session: GestureSession,
        drag_x: f64,
        drag_y: f64,
        geometry: &ChartGeometry,
    ) {
        let tools = self.state.tools();
        let rect = if tools.zoom {
            self.overlay.zoom_box().rect
        } else {
            self.overlay.selection_box().rect
        };
        let mapper = geometry.mapper();
        let Some(bounds) = resolve_commit_bounds(session.dragged(), drag_x, drag_y, rect, &mapper)
        else {
            trace!(drag_x, drag_y, "drag not committed");
            self.selection_task.cancel();
            return;
        };
        let axis = self.config.drag_axis(tools);

        if tools.zoom {
            let x = match geometry.category_count {
                Some(count) => resolve_categorical_snap(bounds.x, count),
                None => bounds.x,
            };
            let candidate = RangeUpdate {
                xaxis: axis.includes_x().then_some(x),
                yaxis: axis.includes_y().then_some(bounds.y),
            };
            let zoom = self.callbacks.filter_zoom(candidate);
            if !zoom.is_finite() {
                warn!("discarding zoom commit with non-finite bounds");
                return;
            }
            self.apply_zoom(zoom);
        } else if tools.selection {
            let selection = SelectionBounds {
                x: bounds.x,
                y: axis.includes_y().then_some(bounds.y),
            };
            self.selection_task.cancel();
            self.state
                .set_committed_selection(Some(self.overlay.selection_box().rect));
            debug!(min_x = selection.x.min, max_x = selection.x.max, "selection committed");
            self.callbacks.selection_changed(&selection);
            self.emit_event(InteractionEvent::SelectionChanged {
                x: selection.x,
                y: selection.y.as_ref().and_then(|ranges| ranges.first().copied()),
            });
        }
    }

    /// Sends a zoom to the host and notifies; grouped charts keep their y-axes.
    pub(super) fn apply_zoom(&mut self, zoom: RangeUpdate) {
        let to_host = if self.config.in_group() {
            RangeUpdate {
                xaxis: zoom.xaxis,
                yaxis: None,
            }
        } else {
            zoom.clone()
        };
        self.host.update_range(&to_host, self.config.animate);
        self.state.mark_zoomed();

        debug!(
            xaxis = ?zoom.xaxis,
            y_axes = zoom.yaxis.as_ref().map_or(0, |ranges| ranges.len()),
            grouped = self.config.in_group(),
            "zoom applied"
        );
        self.callbacks.zoomed(&zoom);
        self.emit_event(InteractionEvent::Zoomed {
            x: zoom.xaxis,
            y: zoom.yaxis.as_ref().and_then(|ranges| ranges.first().copied()),
        });
    }
}
