use dimsweep_core::{Dataset, Margin, Method, Metric};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxData {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, other: &BoxData, eps: f64) -> bool {
        other.x + eps >= self.x
            && other.y + eps >= self.y
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }
}

impl From<dimsweep_core::geom::Rect> for BoxData {
    fn from(r: dimsweep_core::geom::Rect) -> Self {
        Self {
            x: r.min_x(),
            y: r.min_y(),
            width: r.width(),
            height: r.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Middle,
    Hanging,
}

impl TextBaseline {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextBaseline::Middle => "middle",
            TextBaseline::Hanging => "hanging",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: Option<String>,
    pub fill: String,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// Degrees, clockwise, around `(x, y)`.
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLayout {
    pub method: Method,
    pub dimension: usize,
    pub score: f64,
    pub fill: String,
    pub highlighted: bool,
    #[serde(flatten)]
    pub rect: BoxData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubplotLayout {
    pub dataset: Dataset,
    pub metric: Metric,
    pub row: usize,
    pub column: usize,
    pub plot: BoxData,
    pub background: String,
    pub grid_color: String,
    pub y_max: f64,
    pub grid_lines: Vec<GridLine>,
    pub x_labels: Vec<TextData>,
    pub y_labels: Vec<TextData>,
    pub y_title: TextData,
    pub bars: Vec<BarLayout>,
    pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntryLayout {
    pub method: Method,
    pub swatch: BoxData,
    pub swatch_fill: String,
    pub label: TextData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayout {
    pub bounds: BoxData,
    pub entries: Vec<LegendEntryLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureLayout {
    pub width: f64,
    pub height: f64,
    pub page_background: String,
    pub font_family: String,
    /// Margins actually used, after growing them to fit labels.
    pub margin: Margin,
    pub plot_area: BoxData,
    pub subplots: Vec<SubplotLayout>,
    pub legend: LegendLayout,
    pub annotations: Vec<TextData>,
}

impl FigureLayout {
    pub fn subplot(&self, dataset: Dataset, metric: Metric) -> Option<&SubplotLayout> {
        self.subplots
            .iter()
            .find(|s| s.dataset == dataset && s.metric == metric)
    }

    pub fn bar_count(&self) -> usize {
        self.subplots.iter().map(|s| s.bars.len()).sum()
    }
}
