use crate::error::ChartResult;
use crate::render::{OverlayFrame, OverlayRenderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid overlay geometry
/// before a real backend draws it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl OverlayRenderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
