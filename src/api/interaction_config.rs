use serde::{Deserialize, Serialize};

use crate::annotations::XAxisAnnotationConfig;
use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ActiveTools, ToolbarTool};
use crate::overlay::{HandlesConfig, SelectionAxis};
use crate::render::Color;

/// Fill and stroke of a zoom or selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub fill_color: Color,
    pub fill_opacity: f64,
    pub stroke_color: Color,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
    #[serde(default)]
    pub stroke_dash_length: f64,
}

impl OverlayStyle {
    pub fn validate(self, name: &str) -> ChartResult<()> {
        for (field, value) in [
            ("fill_opacity", self.fill_opacity),
            ("stroke_opacity", self.stroke_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name}.{field} must be finite and in [0, 1]"
                )));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name}.stroke_width must be finite and >= 0"
            )));
        }
        if !self.stroke_dash_length.is_finite() || self.stroke_dash_length < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name}.stroke_dash_length must be finite and >= 0"
            )));
        }
        self.fill_color
            .validate()
            .and_then(|()| self.stroke_color.validate())
            .map_err(|err| ChartError::InvalidConfig(format!("{name}: {err}")))
    }
}

fn default_zoom_style() -> OverlayStyle {
    OverlayStyle {
        fill_color: Color::from_rgb8(0x90, 0xca, 0xf9),
        fill_opacity: 0.4,
        stroke_color: Color::from_rgb8(0x0d, 0x47, 0xa1),
        stroke_opacity: 0.4,
        stroke_width: 1.0,
        stroke_dash_length: 0.0,
    }
}

fn default_selection_style() -> OverlayStyle {
    OverlayStyle {
        fill_color: Color::from_rgb8(0x26, 0x9f, 0xfb),
        fill_opacity: 0.1,
        stroke_color: Color::from_rgb8(0x24, 0x29, 0x2e),
        stroke_opacity: 0.4,
        stroke_width: 1.0,
        stroke_dash_length: 3.0,
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub axis: SelectionAxis,
    #[serde(default = "default_true")]
    pub wheel_enabled: bool,
    #[serde(default = "default_zoom_style")]
    pub style: OverlayStyle,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            axis: SelectionAxis::default(),
            wheel_enabled: true,
            style: default_zoom_style(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub axis: SelectionAxis,
    #[serde(default = "default_selection_style")]
    pub style: OverlayStyle,
    #[serde(default)]
    pub handles: HandlesConfig,
    /// Selection drawn at attach time, spanning the full grid height.
    #[serde(default)]
    pub preselected_xaxis: Option<AxisRange>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: SelectionAxis::default(),
            style: default_selection_style(),
            handles: HandlesConfig::default(),
            preselected_xaxis: None,
        }
    }
}

/// Read-only interaction configuration of one chart.
///
/// Serializable so hosts can load it alongside the rest of their chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default = "default_true")]
    pub pan_enabled: bool,
    /// Tool armed at construction and restored when shift is released.
    #[serde(default)]
    pub auto_selected: ToolbarTool,
    #[serde(default)]
    pub brush_enabled: bool,
    /// Linked chart group; grouped charts never push y ranges to the host.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default)]
    pub annotations: Vec<XAxisAnnotationConfig>,
    /// Category labels of a categorical x-axis, used to resolve annotation positions.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            selection: SelectionConfig::default(),
            pan_enabled: true,
            auto_selected: ToolbarTool::default(),
            brush_enabled: false,
            group: None,
            animate: true,
            annotations: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl InteractionConfig {
    #[must_use]
    pub fn with_auto_selected(mut self, tool: ToolbarTool) -> Self {
        self.auto_selected = tool;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, axis: SelectionAxis) -> Self {
        self.selection.enabled = true;
        self.selection.axis = axis;
        self
    }

    #[must_use]
    pub fn with_zoom_axis(mut self, axis: SelectionAxis) -> Self {
        self.zoom.axis = axis;
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: XAxisAnnotationConfig) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn in_group(&self) -> bool {
        self.group.is_some()
    }

    /// Axis constraint of the drag currently in effect.
    #[must_use]
    pub fn drag_axis(&self, tools: ActiveTools) -> SelectionAxis {
        if tools.zoom {
            self.zoom.axis
        } else {
            self.selection.axis
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.zoom.style.validate("zoom.style")?;
        self.selection.style.validate("selection.style")?;

        let point_size = self.selection.handles.point_size;
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "selection.handles.point_size must be finite and > 0".to_owned(),
            ));
        }
        if let Some(range) = self.selection.preselected_xaxis {
            if !range.is_valid() {
                return Err(ChartError::InvalidConfig(
                    "selection.preselected_xaxis must be finite with min < max".to_owned(),
                ));
            }
        }
        if self.group.as_deref().is_some_and(str::is_empty) {
            return Err(ChartError::InvalidConfig(
                "group name must not be empty".to_owned(),
            ));
        }

        let mut selectable_ids: Vec<&str> = Vec::new();
        for (index, annotation) in self.annotations.iter().enumerate() {
            if !annotation.selectable {
                continue;
            }
            let Some(id) = annotation.id.as_deref().filter(|id| !id.is_empty()) else {
                return Err(ChartError::InvalidConfig(format!(
                    "selectable annotation {index} requires a non-empty id"
                )));
            };
            if selectable_ids.contains(&id) {
                return Err(ChartError::InvalidConfig(format!(
                    "selectable annotation id `{id}` is used more than once"
                )));
            }
            selectable_ids.push(id);
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse interaction config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize interaction config json: {e}"))
        })
    }
}

impl ActiveTools {
    /// Tools armed by the configured default tool.
    #[must_use]
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self {
            zoom: config.auto_selected == ToolbarTool::Zoom && config.zoom.enabled,
            pan: config.auto_selected == ToolbarTool::Pan && config.pan_enabled,
            selection: config.auto_selected == ToolbarTool::Selection && config.selection.enabled,
        }
    }
}
