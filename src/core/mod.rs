pub mod geometry;
pub mod mapper;
pub mod scale;
pub mod types;

pub use geometry::ChartGeometry;
pub use mapper::{AxisMapping, CoordinateMapper, data_to_screen, screen_to_data};
pub use scale::{AxisScales, NiceScale, RatioSet};
pub use types::{
    AxisOrientation, AxisRange, GridRect, ScreenPoint, ScreenRect, Viewport, YAxisRanges,
};
