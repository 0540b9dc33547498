mod adjustable;

use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, ScreenRect};

pub use adjustable::{AdjustableRect, DragConstraint, HandleEdge, HandlesConfig};

/// Axes a drag selection or drag zoom is allowed to span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAxis {
    #[default]
    X,
    Y,
    Xy,
}

impl SelectionAxis {
    #[must_use]
    pub fn includes_x(self) -> bool {
        matches!(self, Self::X | Self::Xy)
    }

    #[must_use]
    pub fn includes_y(self) -> bool {
        matches!(self, Self::Y | Self::Xy)
    }

    /// Drag limits for a committed selection box on a `width x height` grid.
    #[must_use]
    pub fn drag_constraint(self, width: f64, height: f64) -> DragConstraint {
        match self {
            Self::X => DragConstraint::boxed(width, height),
            Self::Y => DragConstraint::horizontal(0.0, width),
            Self::Xy => DragConstraint::unconstrained(),
        }
    }
}

/// Which of the two overlay rectangles an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayBox {
    Zoom,
    Selection,
}

/// One drawn overlay rectangle in grid-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionRegion {
    pub rect: ScreenRect,
    /// Grid offset inside the drawing surface.
    pub translate: ScreenPoint,
    pub visible: bool,
}

/// Zoom box and selection box plus the adjustment state of the latter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionOverlay {
    zoom: SelectionRegion,
    selection: SelectionRegion,
    adjustable: Option<AdjustableRect>,
}

impl SelectionOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn region_mut(&mut self, target: OverlayBox) -> &mut SelectionRegion {
        match target {
            OverlayBox::Zoom => &mut self.zoom,
            OverlayBox::Selection => &mut self.selection,
        }
    }

    #[must_use]
    pub fn region(&self, target: OverlayBox) -> SelectionRegion {
        match target {
            OverlayBox::Zoom => self.zoom,
            OverlayBox::Selection => self.selection,
        }
    }

    #[must_use]
    pub fn zoom_box(&self) -> SelectionRegion {
        self.zoom
    }

    #[must_use]
    pub fn selection_box(&self) -> SelectionRegion {
        self.selection
    }

    /// Draws `rect` at the grid offset `translate`.
    pub fn show(&mut self, target: OverlayBox, rect: ScreenRect, translate: ScreenPoint) {
        *self.region_mut(target) = SelectionRegion {
            rect,
            translate,
            visible: true,
        };
    }

    /// Hides the rectangle and resets its geometry.
    pub fn hide(&mut self, target: OverlayBox) {
        *self.region_mut(target) = SelectionRegion::default();
    }

    pub fn hide_all(&mut self) {
        self.hide(OverlayBox::Zoom);
        self.hide(OverlayBox::Selection);
    }

    /// Makes the selection box draggable within the limits of `axis` and
    /// resizable by its edge handles inside the grid box.
    pub fn enable_adjustment(
        &mut self,
        axis: SelectionAxis,
        handles: HandlesConfig,
        grid_width: f64,
        grid_height: f64,
    ) {
        self.adjustable = Some(AdjustableRect::new(
            axis.drag_constraint(grid_width, grid_height),
            DragConstraint::boxed(grid_width, grid_height),
            handles,
        ));
    }

    /// Recomputes the drag and resize limits of an adjustable selection for
    /// the current grid size. No-op while adjustment is disabled.
    pub fn refit_adjustment(&mut self, axis: SelectionAxis, grid_width: f64, grid_height: f64) {
        if let Some(adjustable) = self.adjustable.as_mut() {
            *adjustable = AdjustableRect::new(
                axis.drag_constraint(grid_width, grid_height),
                DragConstraint::boxed(grid_width, grid_height),
                adjustable.handles().clone(),
            );
        }
    }

    pub fn disable_adjustment(&mut self) {
        self.adjustable = None;
    }

    #[must_use]
    pub fn is_adjustable(&self) -> bool {
        self.adjustable.is_some()
    }

    #[must_use]
    pub fn adjustable(&self) -> Option<&AdjustableRect> {
        self.adjustable.as_ref()
    }

    /// Moves the visible, adjustable selection box and returns its new rect.
    pub fn drag_selection_by(&mut self, dx: f64, dy: f64) -> Option<ScreenRect> {
        let adjustable = self.adjustable.as_ref()?;
        if !self.selection.visible || !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        self.selection.rect = adjustable.drag(self.selection.rect, dx, dy);
        Some(self.selection.rect)
    }

    /// Moves one edge of the visible, adjustable selection box to `x`.
    pub fn resize_selection_edge(&mut self, edge: HandleEdge, x: f64) -> Option<ScreenRect> {
        let adjustable = self.adjustable.as_ref()?;
        if !self.selection.visible {
            return None;
        }
        self.selection.rect = adjustable.resize(self.selection.rect, edge, x);
        Some(self.selection.rect)
    }
}
