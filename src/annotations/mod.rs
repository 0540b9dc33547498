mod range_controller;

use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::render::{Color, TextHAlign};

pub use range_controller::{
    AnnotationCallback, AnnotationClickCallback, AnnotationRangeController, AnnotationRegion,
};

/// Annotation position as written in config: a domain number or a category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Number(f64),
    Label(String),
}

impl AnnotationValue {
    /// Domain value of this position; category labels resolve to their
    /// 1-based index. Unknown labels and non-finite numbers yield `None`.
    #[must_use]
    pub fn resolve(&self, categories: &[String]) -> Option<f64> {
        match self {
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Label(label) => categories
                .iter()
                .position(|category| category == label)
                .map(|index| (index + 1) as f64),
        }
    }
}

impl From<f64> for AnnotationValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Top,
    Center,
    Bottom,
}

fn default_label_font_size() -> f64 {
    11.0
}

fn default_label_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_border_color() -> Color {
    Color::from_rgb8(0xc2, 0xc2, 0xc2)
}

fn default_fill_color() -> Color {
    Color::from_rgb8(0xa3, 0xa3, 0xa3)
}

fn default_border_width() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    0.3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub position: LabelPosition,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default)]
    pub h_align: TextHAlign,
    #[serde(default = "default_label_font_size")]
    pub font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub color: Color,
}

impl Default for AnnotationLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: LabelPosition::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            h_align: TextHAlign::default(),
            font_size_px: default_label_font_size(),
            color: default_label_color(),
        }
    }
}

impl AnnotationLabel {
    /// Baseline y of the label on a grid of `grid_height` pixels.
    #[must_use]
    pub fn baseline_y(&self, grid_height: f64) -> f64 {
        let y = match self.position {
            LabelPosition::Top => 4.0,
            LabelPosition::Center => grid_height / 2.0,
            LabelPosition::Bottom => grid_height,
        };
        y + self.offset_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub dash_length: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            border_color: default_border_color(),
            border_width: default_border_width(),
            fill_color: default_fill_color(),
            opacity: default_opacity(),
            dash_length: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// One x-axis annotation entry as configured by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisAnnotationConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub x: AnnotationValue,
    #[serde(default)]
    pub x2: Option<AnnotationValue>,
    /// Range annotations only: draggable and edge-resizable, reporting their
    /// new bounds to the callback registered under `id`.
    #[serde(default)]
    pub selectable: bool,
    #[serde(default)]
    pub style: AnnotationStyle,
    #[serde(default)]
    pub label: AnnotationLabel,
}

impl XAxisAnnotationConfig {
    #[must_use]
    pub fn line(x: impl Into<AnnotationValue>) -> Self {
        Self {
            id: None,
            x: x.into(),
            x2: None,
            selectable: false,
            style: AnnotationStyle::default(),
            label: AnnotationLabel::default(),
        }
    }

    #[must_use]
    pub fn range(x: impl Into<AnnotationValue>, x2: impl Into<AnnotationValue>) -> Self {
        Self {
            x2: Some(x2.into()),
            ..Self::line(x)
        }
    }

    #[must_use]
    pub fn selectable(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self.selectable = true;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: AnnotationLabel) -> Self {
        self.label = label;
        self
    }

    /// Resolved annotation, or `None` when a position does not resolve.
    #[must_use]
    pub fn resolve(&self, index: usize, categories: &[String]) -> Option<XAxisAnnotation> {
        let x = self.x.resolve(categories)?;
        let kind = match &self.x2 {
            None => AnnotationKind::Line { x },
            Some(x2) => {
                let x2 = x2.resolve(categories)?;
                let (x1, x2) = if x2 < x { (x2, x) } else { (x, x2) };
                if self.selectable {
                    AnnotationKind::SelectableRange { x1, x2 }
                } else {
                    AnnotationKind::Range { x1, x2 }
                }
            }
        };
        Some(XAxisAnnotation {
            index,
            id: self.id.clone(),
            kind,
            style: self.style.clone(),
            label: self.label.clone(),
        })
    }
}

/// Shape of a resolved x-axis annotation; range bounds satisfy `x1 <= x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnotationKind {
    Line { x: f64 },
    Range { x1: f64, x2: f64 },
    SelectableRange { x1: f64, x2: f64 },
}

impl AnnotationKind {
    #[must_use]
    pub fn bounds(self) -> AxisRange {
        match self {
            Self::Line { x } => AxisRange::new(x, x),
            Self::Range { x1, x2 } | Self::SelectableRange { x1, x2 } => AxisRange::new(x1, x2),
        }
    }

    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::SelectableRange { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct XAxisAnnotation {
    /// Position in the configured annotation list.
    pub index: usize,
    pub id: Option<String>,
    pub kind: AnnotationKind,
    pub style: AnnotationStyle,
    pub label: AnnotationLabel,
}

/// Resolves every configured annotation, skipping the unresolvable ones.
#[must_use]
pub fn resolve_annotations(
    configs: &[XAxisAnnotationConfig],
    categories: &[String],
) -> Vec<XAxisAnnotation> {
    configs
        .iter()
        .enumerate()
        .filter_map(|(index, config)| config.resolve(index, categories))
        .collect()
}
