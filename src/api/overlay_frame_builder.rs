use crate::annotations::{AnnotationKind, AnnotationRegion};
use crate::core::ScreenRect;
use crate::error::ChartResult;
use crate::overlay::SelectionRegion;
use crate::render::{
    Color, LinePrimitive, OverlayFrame, OverlayRenderer, RectPrimitive, RectRole, StrokeStyle,
    TextPrimitive,
};

use super::{ChartInteraction, OverlayStyle, ViewportHost};

const HANDLE_FILL: Color = Color::rgb(1.0, 1.0, 1.0);

impl<H: ViewportHost> ChartInteraction<H> {
    /// Builds the overlay scene for the current state.
    ///
    /// Returns `None` while the host has no grid layout.
    #[must_use]
    pub fn build_overlay_frame(&self) -> Option<OverlayFrame> {
        let geometry = self.host.geometry()?;
        let mut frame = OverlayFrame::new(geometry.grid_width(), geometry.grid_height());

        let zoom = self.overlay.zoom_box();
        if zoom.visible {
            frame.rects.push(region_rect(zoom, &self.config.zoom.style, RectRole::ZoomBox));
        }

        let selection = self.overlay.selection_box();
        if selection.visible {
            let style = &self.config.selection.style;
            frame
                .rects
                .push(region_rect(selection, style, RectRole::SelectionBox));
            if let Some(adjustable) = self.overlay.adjustable() {
                let rect = translated(selection);
                for (_, handle) in adjustable.handle_rects(rect) {
                    frame.rects.push(handle_rect(
                        handle,
                        stroke_of(style),
                        RectRole::SelectionHandle,
                    ));
                }
            }
        }

        for region in self.annotations.regions() {
            push_annotation(&mut frame, region, geometry.grid_height());
        }

        Some(frame)
    }

    /// Builds the overlay frame and hands it to `renderer`.
    ///
    /// Without a grid layout nothing is rendered.
    pub fn render_overlay(&self, renderer: &mut impl OverlayRenderer) -> ChartResult<()> {
        match self.build_overlay_frame() {
            Some(frame) => renderer.render(&frame),
            None => Ok(()),
        }
    }
}

fn translated(region: SelectionRegion) -> ScreenRect {
    region.rect.translated(region.translate.x, region.translate.y)
}

fn stroke_of(style: &OverlayStyle) -> StrokeStyle {
    StrokeStyle {
        color: style.stroke_color.with_alpha(style.stroke_opacity),
        width: style.stroke_width,
        dash_length: style.stroke_dash_length,
    }
}

fn region_rect(region: SelectionRegion, style: &OverlayStyle, role: RectRole) -> RectPrimitive {
    let rect = translated(region);
    RectPrimitive {
        x: rect.x,
        y: rect.y,
        width: rect.width.max(0.0),
        height: rect.height.max(0.0),
        fill: style.fill_color.with_alpha(style.fill_opacity),
        stroke: stroke_of(style),
        role,
    }
}

fn handle_rect(rect: ScreenRect, stroke: StrokeStyle, role: RectRole) -> RectPrimitive {
    RectPrimitive {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        fill: HANDLE_FILL,
        stroke: StrokeStyle {
            dash_length: 0.0,
            ..stroke
        },
        role,
    }
}

fn push_annotation(frame: &mut OverlayFrame, region: &AnnotationRegion, grid_height: f64) {
    let annotation = &region.annotation;
    let style = &annotation.style;
    let border = StrokeStyle {
        color: style.border_color,
        width: style.border_width.max(0.0),
        dash_length: style.dash_length,
    };

    match annotation.kind {
        AnnotationKind::Line { .. } => {
            if style.border_width > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    region.rect.x,
                    style.offset_y,
                    region.rect.x,
                    grid_height,
                    border,
                ));
            }
        }
        AnnotationKind::Range { .. } | AnnotationKind::SelectableRange { .. } => {
            frame.rects.push(RectPrimitive {
                x: region.rect.x,
                y: region.rect.y,
                width: region.rect.width.max(0.0),
                height: region.rect.height.max(0.0),
                fill: style.fill_color.with_alpha(style.opacity),
                stroke: border,
                role: RectRole::AnnotationRange,
            });
            if let Some(adjustable) = &region.adjustable {
                for (_, handle) in adjustable.handle_rects(region.rect) {
                    frame
                        .rects
                        .push(handle_rect(handle, border, RectRole::AnnotationHandle));
                }
            }
        }
    }

    let label = &annotation.label;
    if !label.text.is_empty() {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            region.rect.x + label.offset_x,
            label.baseline_y(grid_height),
            label.font_size_px,
            label.color,
            label.h_align,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SelectionConfig;
    use crate::core::ScreenPoint;

    #[test]
    fn region_rect_applies_translate_and_opacity() {
        let region = SelectionRegion {
            rect: ScreenRect::new(10.0, 0.0, 30.0, 50.0),
            translate: ScreenPoint::new(2.0, 3.0),
            visible: true,
        };
        let style = SelectionConfig::default().style;
        let rect = region_rect(region, &style, RectRole::SelectionBox);
        assert!((rect.x - 12.0).abs() <= 1e-9);
        assert!((rect.y - 3.0).abs() <= 1e-9);
        assert!((rect.fill.alpha - style.fill_opacity).abs() <= 1e-9);
        assert!((rect.stroke.dash_length - 3.0).abs() <= 1e-9);
    }

    #[test]
    fn handle_rect_is_solid() {
        let stroke = StrokeStyle {
            color: Color::rgb(0.0, 0.0, 0.0),
            width: 1.0,
            dash_length: 4.0,
        };
        let rect = handle_rect(
            ScreenRect::new(0.0, 0.0, 8.0, 8.0),
            stroke,
            RectRole::SelectionHandle,
        );
        assert!(rect.stroke.dash_length.abs() <= 1e-9);
        assert_eq!(rect.fill, HANDLE_FILL);
    }
}
