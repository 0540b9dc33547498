mod annotation_controller;
mod callbacks;
mod commit_bounds_resolver;
mod engine;
mod engine_accessors;
mod engine_init;
mod engine_lifecycle;
mod gesture_controller;
mod interaction_config;
mod listener_dispatch;
mod listener_registry;
mod overlay_frame_builder;
mod pan_controller;
mod pan_step_resolver;
mod selection_controller;
mod selection_rect_resolver;
mod timer_coordinator;
mod toolbar;
mod viewport_host;
mod wheel_controller;
mod wheel_zoom_resolver;

pub use callbacks::{
    BeforeZoomHook, InteractionCallbacks, ScrolledCallback, SelectionBounds, SelectionCallback,
    ZoomedCallback,
};
pub use commit_bounds_resolver::DRAG_COMMIT_THRESHOLD_PX;
pub use engine::{
    ChartInteraction, Lifecycle, SELECTION_DRAG_DEBOUNCE_MS, SELECTION_RESIZE_DEBOUNCE_MS,
    WHEEL_DEBOUNCE_MS, WHEEL_DELAY_MS, WheelZoomStats,
};
pub use interaction_config::{InteractionConfig, OverlayStyle, SelectionConfig, ZoomConfig};
pub use pan_step_resolver::PAN_STEP_DIVISOR;
pub use toolbar::{DefaultToolbarControl, ToolbarControl};
pub use viewport_host::{HeadlessViewportHost, RangeUpdate, ViewportHost};
pub use wheel_zoom_resolver::{WHEEL_MIN_SPAN_RATIO, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR};

pub use crate::overlay::SelectionAxis;
