use tracing::trace;

use crate::annotations::{AnnotationRegion, XAxisAnnotation};
use crate::core::{AxisRange, ScreenPoint, ScreenRect};
use crate::extensions::InteractionEvent;
use crate::overlay::HandleEdge;

use super::{ChartInteraction, ViewportHost};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Lays the annotation layer out again against the current geometry.
    ///
    /// Hosts call this after every re-render; without a layout the layer is
    /// emptied.
    pub fn rebuild_annotations(&mut self) {
        if !self.is_live() {
            return;
        }
        match self.host.geometry() {
            Some(geometry) => self.annotations.rebuild(&self.annotation_set, &geometry),
            None => {
                trace!("clear annotation layer without grid layout");
                self.annotations.clear();
            }
        }
    }

    /// Registers the callback receiving `{min_x, max_x}` of the selectable
    /// range annotation `id` after each completed drag or resize.
    pub fn on_annotation_range_changed(
        &mut self,
        id: impl Into<String>,
        callback: impl FnMut(AxisRange) + 'static,
    ) {
        self.annotations.register_callback(id, Box::new(callback));
    }

    /// Registers the click handler of the range annotation `id`.
    pub fn on_annotation_clicked(
        &mut self,
        id: impl Into<String>,
        callback: impl FnMut(&XAxisAnnotation) + 'static,
    ) {
        self.annotations.register_click_callback(id, Box::new(callback));
    }

    /// Dispatches a click at client coordinates to the range annotation under
    /// it and returns that annotation's index.
    pub fn click_annotation(&mut self, client: ScreenPoint) -> Option<usize> {
        if !self.is_live() {
            return None;
        }
        let geometry = self.host.geometry()?;
        let index = self.annotations.click_at(geometry.to_local(client))?;
        self.emit_event(InteractionEvent::AnnotationClicked { index });
        Some(index)
    }

    #[must_use]
    pub fn annotation_regions(&self) -> &[AnnotationRegion] {
        self.annotations.regions()
    }

    pub fn drag_annotation_by(&mut self, id: &str, dx: f64) -> Option<ScreenRect> {
        if !self.is_live() {
            return None;
        }
        self.annotations.drag_by(id, dx)
    }

    pub fn resize_annotation_edge(&mut self, id: &str, edge: HandleEdge, x: f64) -> Option<ScreenRect> {
        if !self.is_live() {
            return None;
        }
        self.annotations.resize_edge(id, edge, x)
    }

    /// Finishes a drag or resize of `id` and reports its new domain bounds.
    pub fn complete_annotation_adjustment(&mut self, id: &str) -> Option<AxisRange> {
        if !self.is_live() {
            return None;
        }
        let geometry = self.host.geometry()?;
        let range = self.annotations.complete(id, &geometry)?;
        let region = self.annotations.region(id)?;
        let (index, kind) = (region.annotation.index, region.annotation.kind);

        // later rebuilds lay the range out where the user left it
        if let Some(annotation) = self
            .annotation_set
            .iter_mut()
            .find(|annotation| annotation.index == index)
        {
            annotation.kind = kind;
        }
        self.emit_event(InteractionEvent::AnnotationRangeChanged { index, range });
        Some(range)
    }
}
