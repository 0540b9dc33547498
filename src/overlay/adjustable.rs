use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::ScreenRect;

/// Vertical edge of a rectangle that carries a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleEdge {
    Left,
    Right,
}

fn default_handle_edges() -> SmallVec<[HandleEdge; 2]> {
    smallvec![HandleEdge::Left, HandleEdge::Right]
}

fn default_handle_point_size() -> f64 {
    8.0
}

/// Resize handles drawn on an adjustable rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlesConfig {
    #[serde(default = "default_handle_edges")]
    pub edges: SmallVec<[HandleEdge; 2]>,
    #[serde(default = "default_handle_point_size")]
    pub point_size: f64,
}

impl Default for HandlesConfig {
    fn default() -> Self {
        Self {
            edges: default_handle_edges(),
            point_size: default_handle_point_size(),
        }
    }
}

/// Limits a dragged or resized rectangle must stay within; `None` is open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragConstraint {
    pub min_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_x: Option<f64>,
    pub max_y: Option<f64>,
}

impl DragConstraint {
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            min_x: None,
            min_y: None,
            max_x: None,
            max_y: None,
        }
    }

    /// Horizontal limits only.
    #[must_use]
    pub const fn horizontal(min_x: f64, max_x: f64) -> Self {
        Self {
            min_x: Some(min_x),
            min_y: None,
            max_x: Some(max_x),
            max_y: None,
        }
    }

    /// Whole box `[0, width] x [0, height]`.
    #[must_use]
    pub const fn boxed(width: f64, height: f64) -> Self {
        Self {
            min_x: Some(0.0),
            min_y: Some(0.0),
            max_x: Some(width),
            max_y: Some(height),
        }
    }

    /// Moves `rect` back inside the limits without changing its size.
    ///
    /// When the rectangle is wider than the limits, the minimum edge wins.
    #[must_use]
    pub fn constrain(self, rect: ScreenRect) -> ScreenRect {
        let mut x = rect.x;
        let mut y = rect.y;
        if let Some(max_x) = self.max_x {
            x = x.min(max_x - rect.width);
        }
        if let Some(min_x) = self.min_x {
            x = x.max(min_x);
        }
        if let Some(max_y) = self.max_y {
            y = y.min(max_y - rect.height);
        }
        if let Some(min_y) = self.min_y {
            y = y.max(min_y);
        }
        ScreenRect { x, y, ..rect }
    }

    fn limit_x(self, x: f64) -> f64 {
        let mut x = x;
        if let Some(max_x) = self.max_x {
            x = x.min(max_x);
        }
        if let Some(min_x) = self.min_x {
            x = x.max(min_x);
        }
        x
    }
}

/// Drag and edge-resize behavior attached to an overlay rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustableRect {
    drag: DragConstraint,
    resize: DragConstraint,
    handles: HandlesConfig,
}

impl AdjustableRect {
    #[must_use]
    pub fn new(drag: DragConstraint, resize: DragConstraint, handles: HandlesConfig) -> Self {
        Self {
            drag,
            resize,
            handles,
        }
    }

    #[must_use]
    pub fn drag_constraint(&self) -> DragConstraint {
        self.drag
    }

    #[must_use]
    pub fn resize_constraint(&self) -> DragConstraint {
        self.resize
    }

    #[must_use]
    pub fn handles(&self) -> &HandlesConfig {
        &self.handles
    }

    #[must_use]
    pub fn drag(&self, rect: ScreenRect, dx: f64, dy: f64) -> ScreenRect {
        self.drag.constrain(rect.translated(dx, dy))
    }

    /// Moves one vertical edge to `x`; the opposite edge stays put and the
    /// width never goes negative.
    #[must_use]
    pub fn resize(&self, rect: ScreenRect, edge: HandleEdge, x: f64) -> ScreenRect {
        if !self.handles.edges.contains(&edge) || !x.is_finite() {
            return rect;
        }
        let x = self.resize.limit_x(x);
        match edge {
            HandleEdge::Left => {
                let right = rect.right();
                let left = x.min(right);
                ScreenRect {
                    x: left,
                    width: right - left,
                    ..rect
                }
            }
            HandleEdge::Right => {
                let right = x.max(rect.x);
                ScreenRect {
                    width: right - rect.x,
                    ..rect
                }
            }
        }
    }

    /// Square handle rectangles centered on each configured edge.
    #[must_use]
    pub fn handle_rects(&self, rect: ScreenRect) -> SmallVec<[(HandleEdge, ScreenRect); 2]> {
        let size = self.handles.point_size;
        let center_y = rect.y + rect.height / 2.0;
        self.handles
            .edges
            .iter()
            .map(|edge| {
                let center_x = match edge {
                    HandleEdge::Left => rect.x,
                    HandleEdge::Right => rect.right(),
                };
                (
                    *edge,
                    ScreenRect::new(center_x - size / 2.0, center_y - size / 2.0, size, size),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjustableRect, DragConstraint, HandleEdge, HandlesConfig};
    use crate::core::ScreenRect;

    fn boxed() -> AdjustableRect {
        AdjustableRect::new(
            DragConstraint::boxed(200.0, 100.0),
            DragConstraint::boxed(200.0, 100.0),
            HandlesConfig::default(),
        )
    }

    #[test]
    fn drag_stops_at_box_edges() {
        let rect = ScreenRect::new(150.0, 0.0, 40.0, 100.0);
        let moved = boxed().drag(rect, 30.0, 5.0);
        assert_eq!(moved, ScreenRect::new(160.0, 0.0, 40.0, 100.0));
    }

    #[test]
    fn horizontal_constraint_leaves_y_free() {
        let adjustable = AdjustableRect::new(
            DragConstraint::horizontal(0.0, 200.0),
            DragConstraint::boxed(200.0, 100.0),
            HandlesConfig::default(),
        );
        let moved = adjustable.drag(ScreenRect::new(10.0, 10.0, 20.0, 20.0), -30.0, 200.0);
        assert_eq!(moved, ScreenRect::new(0.0, 210.0, 20.0, 20.0));
    }

    #[test]
    fn resize_never_crosses_opposite_edge() {
        let rect = ScreenRect::new(50.0, 0.0, 40.0, 100.0);
        let left = boxed().resize(rect, HandleEdge::Left, 120.0);
        assert_eq!(left, ScreenRect::new(90.0, 0.0, 0.0, 100.0));

        let right = boxed().resize(rect, HandleEdge::Right, 500.0);
        assert_eq!(right, ScreenRect::new(50.0, 0.0, 150.0, 100.0));
    }

    #[test]
    fn handles_are_centered_on_edges() {
        let rects = boxed().handle_rects(ScreenRect::new(20.0, 0.0, 60.0, 100.0));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (HandleEdge::Left, ScreenRect::new(16.0, 46.0, 8.0, 8.0)));
        assert_eq!(rects[1], (HandleEdge::Right, ScreenRect::new(76.0, 46.0, 8.0, 8.0)));
    }
}
