use serde::{Deserialize, Serialize};

use crate::annotations::{AnnotationRangeController, XAxisAnnotation};
use crate::core::ScreenPoint;
use crate::extensions::InteractionListener;
use crate::interaction::{
    ChartInteractionState, DelayedTask, GestureSession, SubscriptionSet, WheelInput,
};
use crate::overlay::SelectionOverlay;

use super::callbacks::ResolvedCallbacks;
use super::{InteractionConfig, ToolbarControl, ViewportHost};

/// Wheel events closer than this to the last executed zoom are coalesced.
pub const WHEEL_DELAY_MS: u64 = 400;
/// Delay of the trailing wheel execution after the latest wheel event.
pub const WHEEL_DEBOUNCE_MS: u64 = 100;
/// Selection notification window while drawing or resizing the selection.
pub const SELECTION_RESIZE_DEBOUNCE_MS: u64 = 30;
/// Selection notification window while dragging the committed selection.
pub const SELECTION_DRAG_DEBOUNCE_MS: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Detached,
    Attached,
    Destroyed,
}

/// Counters of wheel-zoom executions, for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelZoomStats {
    pub immediate: u32,
    pub trailing_fired: u32,
    pub trailing_applied: u32,
}

/// Gesture engine of one chart instance.
///
/// `ChartInteraction` turns raw pointer, touch and wheel input into viewport
/// updates on its host, drives the selection overlay and the annotation
/// layer, and notifies callbacks and listeners.
pub struct ChartInteraction<H: ViewportHost> {
    pub(super) host: H,
    pub(super) config: InteractionConfig,
    pub(super) annotation_set: Vec<XAxisAnnotation>,
    pub(super) state: ChartInteractionState,
    pub(super) session: Option<GestureSession>,
    pub(super) client_position: Option<ScreenPoint>,
    pub(super) overlay: SelectionOverlay,
    pub(super) annotations: AnnotationRangeController,
    pub(super) callbacks: ResolvedCallbacks,
    pub(super) toolbar: Box<dyn ToolbarControl>,
    pub(super) listeners: Vec<Box<dyn InteractionListener>>,
    pub(super) subscriptions: SubscriptionSet,
    pub(super) wheel_task: DelayedTask<WheelInput>,
    pub(super) selection_task: DelayedTask<()>,
    pub(super) wheel_stats: WheelZoomStats,
    pub(super) lifecycle: Lifecycle,
}

impl<H: ViewportHost> ChartInteraction<H> {
    pub(super) fn is_live(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
