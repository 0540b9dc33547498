use crate::core::{AxisRange, CoordinateMapper, ScreenRect, YAxisRanges};

/// Minimum drag distance, in pixels on either axis, that commits a drag.
pub const DRAG_COMMIT_THRESHOLD_PX: f64 = 10.0;

/// Domain bounds covered by a committed drag rectangle.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CommitBounds {
    pub x: AxisRange,
    pub y: YAxisRanges,
}

pub(super) fn drag_exceeds_threshold(dragged: bool, drag_x: f64, drag_y: f64) -> bool {
    dragged && (drag_x > DRAG_COMMIT_THRESHOLD_PX || drag_y > DRAG_COMMIT_THRESHOLD_PX)
}

/// Maps the final rectangle to domain bounds when the drag qualifies as a
/// commit; plain clicks and degenerate or non-finite ranges yield `None`.
pub(super) fn resolve_commit_bounds(
    dragged: bool,
    drag_x: f64,
    drag_y: f64,
    rect: ScreenRect,
    mapper: &CoordinateMapper,
) -> Option<CommitBounds> {
    if !drag_exceeds_threshold(dragged, drag_x, drag_y) {
        return None;
    }
    let x = mapper.x_range(rect.x, rect.right());
    if x.min == x.max || !x.is_finite() {
        return None;
    }
    let y = mapper.y_ranges(rect.y, rect.bottom());
    if y.iter().any(|range| !range.is_finite()) {
        return None;
    }
    Some(CommitBounds { x, y })
}

/// Snaps zoom bounds of a categorical axis to whole categories.
///
/// Bounds are floored; a low bound below the first category resets the
/// window to all `category_count` categories, and windows narrower than two
/// categories end one category after the low bound.
pub(super) fn resolve_categorical_snap(range: AxisRange, category_count: usize) -> AxisRange {
    let mut low = range.min.floor();
    let mut high = range.max.floor();
    if low < 1.0 {
        low = 1.0;
        high = category_count as f64;
    }
    if high - low < 2.0 {
        high = low + 1.0;
    }
    AxisRange::new(low, high)
}

#[cfg(test)]
mod tests {
    use super::{
        drag_exceeds_threshold, resolve_categorical_snap, resolve_commit_bounds,
    };
    use crate::core::{
        AxisOrientation, AxisRange, AxisScales, CoordinateMapper, RatioSet, ScreenRect, Viewport,
    };

    fn mapper() -> CoordinateMapper {
        let viewport = Viewport::single(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 10.0));
        let ratios = RatioSet::from_viewport(&viewport, 200.0, 100.0).expect("ratios");
        CoordinateMapper::new(
            AxisOrientation::Normal,
            &AxisScales::from_viewport(&viewport),
            &ratios,
        )
    }

    #[test]
    fn threshold_is_strict_on_both_axes() {
        assert!(!drag_exceeds_threshold(true, 10.0, 10.0));
        assert!(drag_exceeds_threshold(true, 10.5, 0.0));
        assert!(drag_exceeds_threshold(true, 0.0, 11.0));
        assert!(!drag_exceeds_threshold(false, 50.0, 50.0));
    }

    #[test]
    fn committed_rect_maps_to_domain() {
        let bounds = resolve_commit_bounds(
            true,
            100.0,
            0.0,
            ScreenRect::new(20.0, 25.0, 100.0, 50.0),
            &mapper(),
        )
        .expect("bounds");
        assert!((bounds.x.min - 10.0).abs() <= 1e-9);
        assert!((bounds.x.max - 60.0).abs() <= 1e-9);
        assert!((bounds.y[0].min - 2.5).abs() <= 1e-9);
        assert!((bounds.y[0].max - 7.5).abs() <= 1e-9);
    }

    #[test]
    fn zero_width_rect_is_degenerate() {
        let bounds = resolve_commit_bounds(
            true,
            0.0,
            40.0,
            ScreenRect::new(20.0, 0.0, 0.0, 40.0),
            &mapper(),
        );
        assert!(bounds.is_none());
    }

    #[test]
    fn categorical_snap_resets_low_windows_to_all_categories() {
        let snapped = resolve_categorical_snap(AxisRange::new(0.6, 1.4), 12);
        assert_eq!(snapped, AxisRange::new(1.0, 12.0));

        let snapped = resolve_categorical_snap(AxisRange::new(0.6, 1.4), 1);
        assert_eq!(snapped, AxisRange::new(1.0, 2.0));

        let snapped = resolve_categorical_snap(AxisRange::new(3.2, 4.9), 12);
        assert_eq!(snapped, AxisRange::new(3.0, 4.0));

        let snapped = resolve_categorical_snap(AxisRange::new(3.2, 7.9), 12);
        assert_eq!(snapped, AxisRange::new(3.0, 7.0));
    }
}
