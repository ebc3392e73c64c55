use crate::error::{Error, Result};
use crate::geom::{Rect, rect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            left: 80.0,
            right: 80.0,
            top: 100.0,
            bottom: 80.0,
        }
    }
}

/// Free-floating text positioned in paper coordinates (see `geom::PaperFrame`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl Annotation {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Styling for the summary figure.
///
/// Missing keys in a JSON document fall back to the defaults, so callers can override a single
/// value (e.g. `{"width": 1600}`) without restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Grow the left and bottom margins when tick labels or axis titles would not fit.
    pub automargin: bool,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    /// Bar width in category units (one category band is 1.0 wide).
    pub bar_width: f64,
    pub plot_background: String,
    pub page_background: String,
    pub text_color: String,
    pub grid_color: String,
    /// CSS font-family list; the generic `sans-serif` maps to whatever the host has installed.
    pub font_family: String,
    pub annotation_font_size: f64,
    pub legend_font_size: f64,
    pub legend_font_weight: String,
    pub x_tick_font_size: f64,
    pub y_tick_font_size: f64,
    pub y_title_font_size: f64,
    pub y_headroom: f64,
    pub y_tick_count: usize,
    pub legend_x: f64,
    pub annotations: Vec<Annotation>,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin: Margin::default(),
            automargin: true,
            horizontal_spacing: 0.1,
            vertical_spacing: 0.3,
            bar_width: 0.2,
            plot_background: "whitesmoke".to_string(),
            page_background: "white".to_string(),
            text_color: "#444".to_string(),
            grid_color: "white".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            annotation_font_size: 28.0,
            legend_font_size: 20.0,
            legend_font_weight: "bold".to_string(),
            x_tick_font_size: 22.0,
            y_tick_font_size: 24.0,
            y_title_font_size: 28.0,
            y_headroom: 1.05,
            y_tick_count: 5,
            legend_x: 1.02,
            annotations: vec![
                Annotation::new("MNIST", 0.5, 1.1),
                Annotation::new("FMNIST", 0.5, 0.4),
            ],
        }
    }
}

impl FigureConfig {
    /// Overlays a JSON object onto the defaults and validates the result.
    pub fn from_value(value: &Value) -> Result<Self> {
        let cfg: FigureConfig = serde_json::from_value(value.clone())?;
        cfg.validate()?;
        tracing::debug!(
            width = cfg.width,
            height = cfg.height,
            automargin = cfg.automargin,
            "loaded figure config"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::invalid_config(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::invalid_config(format!(
                "height must be positive, got {}",
                self.height
            )));
        }

        let m = &self.margin;
        if [m.left, m.right, m.top, m.bottom]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(Error::invalid_config("margins must be non-negative"));
        }
        if m.left + m.right >= self.width || m.top + m.bottom >= self.height {
            return Err(Error::invalid_config(
                "margins leave no room for the plot area",
            ));
        }

        if !(self.bar_width > 0.0 && self.bar_width <= 1.0) {
            return Err(Error::invalid_config(format!(
                "barWidth must be in (0, 1], got {}",
                self.bar_width
            )));
        }
        for (name, spacing) in [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
        ] {
            if !(0.0..1.0).contains(&spacing) {
                return Err(Error::invalid_config(format!(
                    "{name} must be in [0, 1), got {spacing}"
                )));
            }
        }
        if !(self.y_headroom.is_finite() && self.y_headroom >= 1.0) {
            return Err(Error::invalid_config(format!(
                "yHeadroom must be at least 1, got {}",
                self.y_headroom
            )));
        }
        if self.y_tick_count == 0 {
            return Err(Error::invalid_config("yTickCount must be at least 1"));
        }
        Ok(())
    }

    /// Page region left for the subplot grid once `margin` is taken off each side.
    pub fn plot_area(&self, margin: &Margin) -> Rect {
        rect(
            margin.left,
            margin.top,
            self.width - margin.left - margin.right,
            self.height - margin.top - margin.bottom,
        )
    }
}
