use crate::interaction::{ActiveTools, ToolbarTool};

/// Narrow capability the gesture engine needs from the toolbar.
///
/// The toolbar keeps its own button state; the engine only asks it to arm a
/// tool, and the toolbar reflects that in the shared tool flags.
pub trait ToolbarControl {
    fn enable_zoom_pan_from_toolbar(&mut self, tool: ToolbarTool, tools: &mut ActiveTools);
}

/// Toolbar without UI: arms exactly the requested tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolbarControl;

impl ToolbarControl for DefaultToolbarControl {
    fn enable_zoom_pan_from_toolbar(&mut self, tool: ToolbarTool, tools: &mut ActiveTools) {
        *tools = ActiveTools::default();
        match tool {
            ToolbarTool::Zoom => tools.zoom = true,
            ToolbarTool::Pan => tools.pan = true,
            ToolbarTool::Selection => tools.selection = true,
        }
    }
}
