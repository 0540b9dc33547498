use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::annotations::{AnnotationKind, XAxisAnnotation};
use crate::core::{AxisRange, ChartGeometry, ScreenPoint, ScreenRect};
use crate::overlay::{AdjustableRect, DragConstraint, HandleEdge, HandlesConfig};

/// Receives the `{min_x, max_x}` domain bounds of a selectable range after
/// a drag or resize completes.
pub type AnnotationCallback = Box<dyn FnMut(AxisRange)>;

/// Receives the clicked range annotation.
pub type AnnotationClickCallback = Box<dyn FnMut(&XAxisAnnotation)>;

/// Drawn state of one resolved annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRegion {
    pub annotation: XAxisAnnotation,
    /// Domain bounds, updated on every completed adjustment.
    pub axis_range: AxisRange,
    /// Grid-local rectangle; zero width for line annotations.
    pub rect: ScreenRect,
    /// Present only for selectable ranges.
    pub adjustable: Option<AdjustableRect>,
}

/// Owns the annotation layer regions and the per-annotation callbacks.
#[derive(Default)]
pub struct AnnotationRangeController {
    regions: Vec<AnnotationRegion>,
    callbacks: IndexMap<String, AnnotationCallback>,
    click_callbacks: IndexMap<String, AnnotationClickCallback>,
}

impl fmt::Debug for AnnotationRangeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationRangeController")
            .field("regions", &self.regions)
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .field("click_callbacks", &self.click_callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AnnotationRangeController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the completion callback of the selectable range `id`,
    /// replacing any previous one.
    pub fn register_callback(&mut self, id: impl Into<String>, callback: AnnotationCallback) {
        self.callbacks.insert(id.into(), callback);
    }

    pub fn unregister_callback(&mut self, id: &str) -> bool {
        self.callbacks.shift_remove(id).is_some()
    }

    /// Registers the click handler of the range annotation `id`.
    pub fn register_click_callback(&mut self, id: impl Into<String>, callback: AnnotationClickCallback) {
        self.click_callbacks.insert(id.into(), callback);
    }

    pub fn unregister_click_callback(&mut self, id: &str) -> bool {
        self.click_callbacks.shift_remove(id).is_some()
    }

    #[must_use]
    pub fn regions(&self) -> &[AnnotationRegion] {
        &self.regions
    }

    #[must_use]
    pub fn region(&self, id: &str) -> Option<&AnnotationRegion> {
        self.regions
            .iter()
            .find(|region| region.annotation.id.as_deref() == Some(id))
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut AnnotationRegion> {
        self.regions
            .iter_mut()
            .find(|region| region.annotation.id.as_deref() == Some(id))
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Lays out every annotation against the current geometry.
    ///
    /// Selectable ranges may move between the nearest non-selectable
    /// neighbours on each side, or the grid edges when there are none.
    pub fn rebuild(&mut self, annotations: &[XAxisAnnotation], geometry: &ChartGeometry) {
        let mapper = geometry.mapper();
        let grid_height = geometry.grid_height();

        let mut regions: Vec<AnnotationRegion> = annotations
            .iter()
            .filter_map(|annotation| {
                let bounds = annotation.kind.bounds();
                let x1 = mapper.data_to_x(bounds.min);
                let x2 = mapper.data_to_x(bounds.max);
                if !x1.is_finite() || !x2.is_finite() {
                    trace!(index = annotation.index, "skip annotation without pixel position");
                    return None;
                }
                let rect = ScreenRect::new(
                    x1 + annotation.style.offset_x,
                    annotation.style.offset_y,
                    x2 - x1,
                    grid_height,
                );
                Some(AnnotationRegion {
                    annotation: annotation.clone(),
                    axis_range: bounds,
                    rect,
                    adjustable: None,
                })
            })
            .collect();

        let fixed: Vec<(AxisRange, ScreenRect)> = regions
            .iter()
            .filter(|region| !region.annotation.kind.is_selectable())
            .map(|region| (region.axis_range, region.rect))
            .collect();

        for region in regions
            .iter_mut()
            .filter(|region| region.annotation.kind.is_selectable())
        {
            let (min_x, max_x) = neighbour_limits(region.axis_range, &fixed, geometry.grid_width());
            let constraint = DragConstraint {
                min_x: Some(min_x),
                min_y: Some(0.0),
                max_x: Some(max_x),
                max_y: Some(grid_height),
            };
            region.adjustable = Some(AdjustableRect::new(
                constraint,
                constraint,
                HandlesConfig::default(),
            ));
        }

        debug!(count = regions.len(), "annotation layer rebuilt");
        self.regions = regions;
    }

    /// Drags the selectable range `id` horizontally.
    pub fn drag_by(&mut self, id: &str, dx: f64) -> Option<ScreenRect> {
        let region = self.region_mut(id)?;
        let adjustable = region.adjustable.as_ref()?;
        region.rect = adjustable.drag(region.rect, dx, 0.0);
        Some(region.rect)
    }

    /// Moves one edge of the selectable range `id` to grid-local `x`.
    pub fn resize_edge(&mut self, id: &str, edge: HandleEdge, x: f64) -> Option<ScreenRect> {
        let region = self.region_mut(id)?;
        let adjustable = region.adjustable.as_ref()?;
        region.rect = adjustable.resize(region.rect, edge, x);
        Some(region.rect)
    }

    /// Converts the current rectangle of `id` back to domain bounds, stores
    /// them and invokes the registered callback.
    pub fn complete(&mut self, id: &str, geometry: &ChartGeometry) -> Option<AxisRange> {
        let mapper = geometry.mapper();
        let region = self.region_mut(id)?;
        region.adjustable.as_ref()?;

        let offset_x = region.annotation.style.offset_x;
        let range = AxisRange::new(
            mapper.x_to_data(region.rect.x - offset_x),
            mapper.x_to_data(region.rect.right() - offset_x),
        );
        if !range.is_finite() {
            return None;
        }
        region.axis_range = range;
        if let AnnotationKind::SelectableRange { x1, x2 } = &mut region.annotation.kind {
            *x1 = range.min;
            *x2 = range.max;
        }

        if let Some(callback) = self.callbacks.get_mut(id) {
            callback(range);
        }
        debug!(id, min_x = range.min, max_x = range.max, "annotation range adjusted");
        Some(range)
    }

    /// Finds the topmost range annotation under the grid-local `point` and
    /// runs its click handler, if one is registered.
    ///
    /// Returns the index of the hit annotation. Lines are not clickable.
    pub fn click_at(&mut self, point: ScreenPoint) -> Option<usize> {
        let region = self.regions.iter().rev().find(|region| {
            !matches!(region.annotation.kind, AnnotationKind::Line { .. })
                && point.x >= region.rect.x
                && point.x <= region.rect.right()
                && point.y >= region.rect.y
                && point.y <= region.rect.bottom()
        })?;

        if let Some(callback) = region
            .annotation
            .id
            .as_deref()
            .and_then(|id| self.click_callbacks.get_mut(id))
        {
            callback(&region.annotation);
        }
        trace!(index = region.annotation.index, "annotation clicked");
        Some(region.annotation.index)
    }
}

fn neighbour_limits(range: AxisRange, fixed: &[(AxisRange, ScreenRect)], grid_width: f64) -> (f64, f64) {
    fixed
        .iter()
        .fold((0.0_f64, grid_width), |(min_x, max_x), (other, rect)| {
            let min_x = if other.min < range.min {
                min_x.max(rect.right())
            } else {
                min_x
            };
            let max_x = if other.max > range.max {
                max_x.min(rect.x)
            } else {
                max_x
            };
            (min_x, max_x)
        })
}
