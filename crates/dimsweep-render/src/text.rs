#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_weight: None,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self.font_weight.as_deref().map(str::trim),
            Some("bold" | "bolder" | "600" | "700" | "800" | "900")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Font-free width estimate: every character is `char_width_factor` em wide.
///
/// Layout must not depend on which fonts the host has installed, so the figure geometry is
/// computed from this estimate and only the final PDF conversion touches real fonts.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
    pub bold_width_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };
        let bold_width_factor = if self.bold_width_factor == 0.0 {
            1.1
        } else {
            self.bold_width_factor
        };

        let font_size = style.font_size.max(1.0);
        let chars = text.chars().count() as f64;
        let mut width = chars * font_size * char_width_factor;
        if style.is_bold() {
            width *= bold_width_factor;
        }
        TextMetrics {
            width,
            height: font_size * line_height_factor,
        }
    }
}
