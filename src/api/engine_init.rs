use crate::annotations::{AnnotationRangeController, resolve_annotations};
use crate::error::ChartResult;
use crate::interaction::{ActiveTools, ChartInteractionState, DelayedTask, SubscriptionSet};
use crate::overlay::SelectionOverlay;

use super::callbacks::ResolvedCallbacks;
use super::{
    ChartInteraction, DefaultToolbarControl, InteractionCallbacks, InteractionConfig, Lifecycle,
    ToolbarControl, ViewportHost, WheelZoomStats,
};

impl<H: ViewportHost> ChartInteraction<H> {
    /// Creates a detached engine; call `attach` to start receiving input.
    pub fn new(host: H, config: InteractionConfig, callbacks: InteractionCallbacks) -> ChartResult<Self> {
        config.validate()?;

        let annotation_set = resolve_annotations(&config.annotations, &config.categories);
        let state = ChartInteractionState::new(ActiveTools::from_config(&config));
        let callbacks = ResolvedCallbacks::resolve(callbacks, config.brush_enabled);

        Ok(Self {
            host,
            config,
            annotation_set,
            state,
            session: None,
            client_position: None,
            overlay: SelectionOverlay::new(),
            annotations: AnnotationRangeController::new(),
            callbacks,
            toolbar: Box::new(DefaultToolbarControl),
            listeners: Vec::new(),
            subscriptions: SubscriptionSet::default(),
            wheel_task: DelayedTask::default(),
            selection_task: DelayedTask::default(),
            wheel_stats: WheelZoomStats::default(),
            lifecycle: Lifecycle::Detached,
        })
    }

    /// Replaces the toolbar capability used by the shift toggle.
    #[must_use]
    pub fn with_toolbar(mut self, toolbar: impl ToolbarControl + 'static) -> Self {
        self.toolbar = Box::new(toolbar);
        self
    }
}
