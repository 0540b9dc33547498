//! chart-gesture: viewport interaction engine for cartesian charts.
//!
//! Turns pointer, touch and wheel input into zoom, pan and selection updates
//! of a host chart's viewport, and keeps the selection overlay and x-axis
//! range annotations in sync with the visible domain.

pub mod annotations;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartInteraction, HeadlessViewportHost, InteractionCallbacks, InteractionConfig, RangeUpdate,
    ViewportHost,
};
pub use error::{ChartError, ChartResult};
