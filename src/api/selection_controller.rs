use smallvec::smallvec;
use tracing::{debug, trace};

use crate::core::{AxisOrientation, AxisRange, ChartGeometry, ScreenRect};
use crate::extensions::InteractionEvent;
use crate::overlay::{HandleEdge, OverlayBox};

use super::commit_bounds_resolver::drag_exceeds_threshold;
use super::selection_rect_resolver::resolve_selection_rect;
use super::{
    ChartInteraction, SELECTION_DRAG_DEBOUNCE_MS, SELECTION_RESIZE_DEBOUNCE_MS, SelectionBounds,
    ViewportHost,
};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Redraws the zoom and selection boxes for the live drag.
    pub(super) fn draw_selection(&mut self, geometry: &ChartGeometry, now_ms: u64) {
        let Some(session) = self.session else {
            return;
        };
        let tools = self.state.tools();
        let resolved = resolve_selection_rect(
            session.start(),
            session.current(),
            geometry.grid_width(),
            geometry.grid_height(),
            self.config.drag_axis(tools),
        );
        let rect = resolved.rect;

        if tools.zoom && session.dragged() {
            let width = if rect.width < 0.0 { 1.0 } else { rect.width };
            self.overlay.show(
                OverlayBox::Zoom,
                ScreenRect { width, ..rect },
                geometry.translate,
            );
        }
        if tools.selection {
            let sized = ScreenRect {
                width: rect.width.max(0.0),
                height: rect.height.max(0.0),
                ..rect
            };
            self.overlay
                .show(OverlayBox::Selection, sized, geometry.translate);

            let (drag_x, drag_y) = session.drag_distance(session.current());
            if drag_exceeds_threshold(session.dragged(), drag_x, drag_y) {
                self.schedule_selection_notification(now_ms, SELECTION_RESIZE_DEBOUNCE_MS);
            }
        }
        trace!(
            x = rect.x,
            width = rect.width,
            inverted_x = resolved.inverted_x,
            inverted_y = resolved.inverted_y,
            "selection rect drawn"
        );
    }

    /// Enables drag and resize handles once the selection box has an area;
    /// an already adjustable selection gets limits for the current grid.
    pub(super) fn make_selection_adjustable(&mut self, geometry: &ChartGeometry) {
        if self.overlay.is_adjustable() {
            self.overlay.refit_adjustment(
                self.config.selection.axis,
                geometry.grid_width(),
                geometry.grid_height(),
            );
            return;
        }
        let selection = self.overlay.selection_box();
        if !selection.visible || !selection.rect.has_area() {
            return;
        }
        self.overlay.enable_adjustment(
            self.config.selection.axis,
            self.config.selection.handles.clone(),
            geometry.grid_width(),
            geometry.grid_height(),
        );
    }

    /// Draws the committed selection again, or the configured preselection,
    /// when the zoom tool is not armed.
    pub(super) fn draw_preselected_selection(&mut self) {
        if self.state.tools().zoom || !self.config.selection.enabled {
            return;
        }
        let Some(geometry) = self.host.geometry() else {
            trace!("skip preselection without grid layout");
            return;
        };

        if let Some(rect) = self.state.committed_selection() {
            self.overlay
                .show(OverlayBox::Selection, rect, geometry.translate);
            self.make_selection_adjustable(&geometry);
            return;
        }

        let Some(range) = self.config.selection.preselected_xaxis else {
            return;
        };
        let mapper = geometry.mapper();
        let x = mapper.data_to_x(range.min);
        let width = mapper.data_to_x(range.max) - x;
        let rect = ScreenRect::new(x, 0.0, width, geometry.grid_height());
        if !rect.is_finite() {
            trace!("skip preselection without finite geometry");
            return;
        }

        self.overlay
            .show(OverlayBox::Selection, rect, geometry.translate);
        self.make_selection_adjustable(&geometry);
        self.state.set_committed_selection(Some(rect));

        debug!(min_x = range.min, max_x = range.max, "preselected selection drawn");
        let bounds = SelectionBounds { x: range, y: None };
        self.callbacks.selection_changed(&bounds);
        self.emit_event(InteractionEvent::SelectionChanged { x: range, y: None });
    }

    /// Drags the committed selection; the notification follows with no delay.
    ///
    /// Returns `false` when there is no adjustable selection or no grid
    /// layout.
    pub fn drag_selection_by(&mut self, dx: f64, dy: f64, now_ms: u64) -> bool {
        if !self.is_live() {
            return false;
        }
        self.poll_timers(now_ms);
        if !self.refit_selection_limits() {
            return false;
        }
        let Some(rect) = self.overlay.drag_selection_by(dx, dy) else {
            return false;
        };
        self.state.set_committed_selection(Some(rect));
        self.schedule_selection_notification(now_ms, SELECTION_DRAG_DEBOUNCE_MS);
        true
    }

    /// Moves one edge of the committed selection to grid-local `x`.
    pub fn resize_selection_edge(&mut self, edge: HandleEdge, x: f64, now_ms: u64) -> bool {
        if !self.is_live() {
            return false;
        }
        self.poll_timers(now_ms);
        if !self.refit_selection_limits() {
            return false;
        }
        let Some(rect) = self.overlay.resize_selection_edge(edge, x) else {
            return false;
        };
        self.state.set_committed_selection(Some(rect));
        self.schedule_selection_notification(now_ms, SELECTION_RESIZE_DEBOUNCE_MS);
        true
    }

    fn refit_selection_limits(&mut self) -> bool {
        let Some(geometry) = self.host.geometry() else {
            trace!("skip selection adjustment without grid layout");
            return false;
        };
        self.overlay.refit_adjustment(
            self.config.selection.axis,
            geometry.grid_width(),
            geometry.grid_height(),
        );
        true
    }

    fn schedule_selection_notification(&mut self, now_ms: u64, delay_ms: u64) {
        if !self.state.tools().selection {
            return;
        }
        self.selection_task.schedule(now_ms, delay_ms, ());
    }

    /// Reports the current selection box in domain units.
    pub(super) fn fire_selection_notification(&mut self) {
        let selection = self.overlay.selection_box();
        if !selection.visible {
            return;
        }
        let Some(geometry) = self.host.geometry() else {
            trace!("skip selection notification without grid layout");
            return;
        };
        let Some(bounds) = selection_bounds(&geometry, selection.rect) else {
            return;
        };

        self.callbacks.selection_changed(&bounds);
        self.callbacks.brush_scrolled(&bounds);
        self.emit_event(InteractionEvent::SelectionChanged {
            x: bounds.x,
            y: bounds.y.as_ref().and_then(|ranges| ranges.first().copied()),
        });
    }
}

/// Domain bounds of a drawn selection rectangle; range-bar charts report the
/// whole `[0, 1]` band on y.
fn selection_bounds(geometry: &ChartGeometry, rect: ScreenRect) -> Option<SelectionBounds> {
    let mapper = geometry.mapper();
    let x = mapper.x_range(rect.x, rect.right());
    let y = match geometry.orientation {
        AxisOrientation::Normal => mapper.y_ranges(rect.y, rect.bottom()),
        AxisOrientation::RangeBar => smallvec![AxisRange::new(0.0, 1.0)],
    };
    if !x.is_finite() || y.iter().any(|range| !range.is_finite()) {
        return None;
    }
    Some(SelectionBounds { x, y: Some(y) })
}
