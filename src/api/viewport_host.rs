use serde::{Deserialize, Serialize};

use crate::core::{
    AxisOrientation, AxisRange, AxisScales, ChartGeometry, GridRect, RatioSet, ScreenPoint,
    Viewport, YAxisRanges,
};
use crate::error::ChartResult;

/// Range-update request sent to the host; absent axes keep their window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeUpdate {
    pub xaxis: Option<AxisRange>,
    pub yaxis: Option<YAxisRanges>,
}

impl RangeUpdate {
    #[must_use]
    pub fn x_only(xaxis: AxisRange) -> Self {
        Self {
            xaxis: Some(xaxis),
            yaxis: None,
        }
    }

    /// Fields set in `override_with` win; the rest keep `self`.
    #[must_use]
    pub fn merged_with(&self, override_with: Self) -> Self {
        Self {
            xaxis: override_with.xaxis.or(self.xaxis),
            yaxis: override_with.yaxis.or_else(|| self.yaxis.clone()),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.xaxis.is_none_or(AxisRange::is_finite)
            && self
                .yaxis
                .as_ref()
                .is_none_or(|ranges| ranges.iter().all(|range| range.is_finite()))
    }
}

/// Chart-side collaborator that owns the viewport and the layout.
///
/// `geometry` is queried on every interaction and must reflect the current
/// layout; `None` means the grid is not laid out and the event is a no-op.
pub trait ViewportHost {
    fn geometry(&self) -> Option<ChartGeometry>;
    fn update_range(&mut self, update: &RangeUpdate, animate: bool);
}

/// In-memory host that applies range updates to its own viewport and
/// records every request.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessViewportHost {
    grid: GridRect,
    translate: ScreenPoint,
    viewport: Viewport,
    full_domain: Viewport,
    bar_padding: f64,
    orientation: AxisOrientation,
    category_count: Option<usize>,
    attached: bool,
    updates: Vec<(RangeUpdate, bool)>,
}

impl HeadlessViewportHost {
    /// Host showing `full_domain` on `grid`.
    pub fn new(grid: GridRect, full_domain: Viewport) -> ChartResult<Self> {
        grid.validate()?;
        full_domain.validate()?;
        Ok(Self {
            grid,
            translate: ScreenPoint::default(),
            viewport: full_domain.clone(),
            full_domain,
            bar_padding: 0.0,
            orientation: AxisOrientation::Normal,
            category_count: None,
            attached: true,
            updates: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_bar_padding(mut self, bar_padding: f64) -> Self {
        self.bar_padding = bar_padding;
        self
    }

    #[must_use]
    pub fn with_category_count(mut self, category_count: usize) -> Self {
        self.category_count = Some(category_count);
        self
    }

    #[must_use]
    pub fn with_translate(mut self, translate: ScreenPoint) -> Self {
        self.translate = translate;
        self
    }

    /// Starts from `viewport` instead of the full domain.
    pub fn with_viewport(mut self, viewport: Viewport) -> ChartResult<Self> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(self)
    }

    pub fn set_grid(&mut self, grid: GridRect) -> ChartResult<()> {
        self.grid = grid.validate()?;
        Ok(())
    }

    /// Simulates an unmounted layout.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn full_domain(&self) -> &Viewport {
        &self.full_domain
    }

    /// Every received update with its animate flag, oldest first.
    #[must_use]
    pub fn updates(&self) -> &[(RangeUpdate, bool)] {
        &self.updates
    }

    pub fn clear_updates(&mut self) {
        self.updates.clear();
    }
}

impl ViewportHost for HeadlessViewportHost {
    fn geometry(&self) -> Option<ChartGeometry> {
        if !self.attached {
            return None;
        }
        let ratios = RatioSet::from_viewport(&self.viewport, self.grid.width, self.grid.height).ok()?;
        Some(ChartGeometry {
            grid: self.grid,
            translate: self.translate,
            viewport: self.viewport.clone(),
            full_domain: self.full_domain.clone(),
            scales: AxisScales::from_viewport(&self.viewport),
            ratios,
            bar_padding: self.bar_padding,
            orientation: self.orientation,
            category_count: self.category_count,
        })
    }

    fn update_range(&mut self, update: &RangeUpdate, animate: bool) {
        self.updates.push((update.clone(), animate));

        if let Some(ranges) = &update.yaxis {
            for (current, next) in self.viewport.y.iter_mut().zip(ranges) {
                if next.is_valid() {
                    *current = *next;
                }
            }
        }
        if let Some(xaxis) = update.xaxis.filter(|range| range.is_valid()) {
            match self.orientation {
                AxisOrientation::Normal => self.viewport.x = xaxis,
                AxisOrientation::RangeBar => {
                    if let Some(primary) = self.viewport.y.first_mut() {
                        *primary = xaxis;
                    }
                }
            }
        }
    }
}
