use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, YAxisRanges};

use super::RangeUpdate;

/// Domain bounds of the current selection rectangle.
///
/// `y` is `None` when the selection does not constrain the y-axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub x: AxisRange,
    pub y: Option<YAxisRanges>,
}

pub type SelectionCallback = Box<dyn FnMut(&SelectionBounds)>;
pub type ZoomedCallback = Box<dyn FnMut(&RangeUpdate)>;
pub type ScrolledCallback = Box<dyn FnMut(AxisRange)>;
/// Rewrites candidate zoom bounds; axes left unset in the result keep the
/// candidate value.
pub type BeforeZoomHook = Box<dyn FnMut(&RangeUpdate) -> RangeUpdate>;

/// User callbacks supplied at construction.
#[derive(Default)]
pub struct InteractionCallbacks {
    pub on_selection_changed: Option<SelectionCallback>,
    pub on_zoomed: Option<ZoomedCallback>,
    pub on_scrolled: Option<ScrolledCallback>,
    pub on_brush_scrolled: Option<SelectionCallback>,
    pub before_zoom: Option<BeforeZoomHook>,
}

impl InteractionCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_selection_changed(mut self, callback: impl FnMut(&SelectionBounds) + 'static) -> Self {
        self.on_selection_changed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_zoomed(mut self, callback: impl FnMut(&RangeUpdate) + 'static) -> Self {
        self.on_zoomed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_scrolled(mut self, callback: impl FnMut(AxisRange) + 'static) -> Self {
        self.on_scrolled = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_brush_scrolled(mut self, callback: impl FnMut(&SelectionBounds) + 'static) -> Self {
        self.on_brush_scrolled = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn before_zoom(mut self, hook: impl FnMut(&RangeUpdate) -> RangeUpdate + 'static) -> Self {
        self.before_zoom = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for InteractionCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionCallbacks")
            .field("on_selection_changed", &self.on_selection_changed.is_some())
            .field("on_zoomed", &self.on_zoomed.is_some())
            .field("on_scrolled", &self.on_scrolled.is_some())
            .field("on_brush_scrolled", &self.on_brush_scrolled.is_some())
            .field("before_zoom", &self.before_zoom.is_some())
            .finish()
    }
}

/// Callbacks after construction-time resolution; invoking an absent one is a no-op.
pub(super) struct ResolvedCallbacks {
    selection_changed: Option<SelectionCallback>,
    zoomed: Option<ZoomedCallback>,
    scrolled: Option<ScrolledCallback>,
    brush_scrolled: Option<SelectionCallback>,
    before_zoom: Option<BeforeZoomHook>,
}

impl ResolvedCallbacks {
    /// The brush callback is dropped unless a brush link is configured.
    pub(super) fn resolve(callbacks: InteractionCallbacks, brush_enabled: bool) -> Self {
        Self {
            selection_changed: callbacks.on_selection_changed,
            zoomed: callbacks.on_zoomed,
            scrolled: callbacks.on_scrolled,
            brush_scrolled: callbacks.on_brush_scrolled.filter(|_| brush_enabled),
            before_zoom: callbacks.before_zoom,
        }
    }

    pub(super) fn selection_changed(&mut self, bounds: &SelectionBounds) {
        if let Some(callback) = self.selection_changed.as_mut() {
            callback(bounds);
        }
    }

    pub(super) fn brush_scrolled(&mut self, bounds: &SelectionBounds) {
        if let Some(callback) = self.brush_scrolled.as_mut() {
            callback(bounds);
        }
    }

    pub(super) fn zoomed(&mut self, update: &RangeUpdate) {
        if let Some(callback) = self.zoomed.as_mut() {
            callback(update);
        }
    }

    pub(super) fn scrolled(&mut self, range: AxisRange) {
        if let Some(callback) = self.scrolled.as_mut() {
            callback(range);
        }
    }

    pub(super) fn filter_zoom(&mut self, candidate: RangeUpdate) -> RangeUpdate {
        match self.before_zoom.as_mut() {
            Some(hook) => {
                let rewritten = hook(&candidate);
                candidate.merged_with(rewritten)
            }
            None => candidate,
        }
    }

    /// Drops every callback; nothing fires afterwards.
    pub(super) fn clear(&mut self) {
        self.selection_changed = None;
        self.zoomed = None;
        self.scrolled = None;
        self.brush_scrolled = None;
        self.before_zoom = None;
    }
}

impl fmt::Debug for ResolvedCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCallbacks")
            .field("selection_changed", &self.selection_changed.is_some())
            .field("zoomed", &self.zoomed.is_some())
            .field("scrolled", &self.scrolled.is_some())
            .field("brush_scrolled", &self.brush_scrolled.is_some())
            .field("before_zoom", &self.before_zoom.is_some())
            .finish()
    }
}
