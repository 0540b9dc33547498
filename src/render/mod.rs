mod frame;
mod null_renderer;
mod primitives;

pub use frame::OverlayFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, RectRole, StrokeStyle, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any backend that draws the interaction overlay.
///
/// Backends receive a fully materialized `OverlayFrame` so drawing code stays
/// isolated from gesture and annotation logic.
pub trait OverlayRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> ChartResult<()>;
}
