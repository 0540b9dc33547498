use crate::core::AxisRange;

pub const WHEEL_ZOOM_IN_FACTOR: f64 = 0.5;
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 1.5;
/// Smallest window a wheel zoom may produce, as a share of the full span.
pub const WHEEL_MIN_SPAN_RATIO: f64 = 0.01;

/// Computes the horizontal window after one wheel step.
///
/// `delta_y < 0` zooms in to half the span keeping the value under
/// `pointer_fraction` fixed; `delta_y > 0` zooms out to 150% of the span
/// about the current center. With `bounds`, the result is clamped to them
/// and widened to at least 1% of their span. Returns `None` for a zero delta
/// or a result that is not a finite increasing range.
pub(super) fn resolve_wheel_zoom(
    current: AxisRange,
    pointer_fraction: f64,
    delta_y: f64,
    bounds: Option<AxisRange>,
) -> Option<AxisRange> {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return None;
    }

    let span = current.span();
    let mut next = if delta_y < 0.0 {
        let pivot = current.min + pointer_fraction * span;
        let next_span = WHEEL_ZOOM_IN_FACTOR * span;
        let min = pivot - pointer_fraction * next_span;
        AxisRange::new(min, min + next_span)
    } else {
        let center = current.center();
        let half = WHEEL_ZOOM_OUT_FACTOR * span / 2.0;
        AxisRange::new(center - half, center + half)
    };

    if let Some(bounds) = bounds {
        next = clamp_to_bounds(next, bounds);
    }

    next.is_valid().then_some(next)
}

fn clamp_to_bounds(range: AxisRange, bounds: AxisRange) -> AxisRange {
    let mut min = range.min.max(bounds.min);
    let mut max = range.max.min(bounds.max);

    let min_span = bounds.span() * WHEEL_MIN_SPAN_RATIO;
    if max - min < min_span {
        let mid = (min + max) / 2.0;
        min = mid - min_span / 2.0;
        max = mid + min_span / 2.0;
        if min < bounds.min {
            let shift = bounds.min - min;
            min += shift;
            max += shift;
        } else if max > bounds.max {
            let shift = max - bounds.max;
            min -= shift;
            max -= shift;
        }
    }
    AxisRange::new(min, max)
}
