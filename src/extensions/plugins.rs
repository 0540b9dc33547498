use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::interaction::{ActiveTools, GestureMode, InteractionMode};

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerContext {
    pub interaction_mode: InteractionMode,
    pub tools: ActiveTools,
    /// Horizontal window at dispatch time; `None` while no layout is available.
    pub visible_x: Option<AxisRange>,
    pub zoomed: bool,
}

/// Named interaction events exposed to decoupled listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    GestureStarted { mode: GestureMode },
    GestureEnded,
    Scrolled { x: AxisRange },
    Zoomed { x: Option<AxisRange>, y: Option<AxisRange> },
    SelectionChanged { x: AxisRange, y: Option<AxisRange> },
    AnnotationRangeChanged { index: usize, range: AxisRange },
    AnnotationClicked { index: usize },
    TornDown,
}

impl InteractionEvent {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GestureStarted { .. } => "gestureStarted",
            Self::GestureEnded => "gestureEnded",
            Self::Scrolled { .. } => "scrolled",
            Self::Zoomed { .. } => "zoomed",
            Self::SelectionChanged { .. } => "selection",
            Self::AnnotationRangeChanged { .. } => "annotationRangeChanged",
            Self::AnnotationClicked { .. } => "annotationClick",
            Self::TornDown => "destroyed",
        }
    }
}

/// Observer of interaction events.
///
/// Listeners see events and a context snapshot; they cannot mutate the
/// interaction state.
pub trait InteractionListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: InteractionEvent, context: ListenerContext);
}
