use crate::model::Method;
use serde::Serialize;

/// The two CSS color names a method is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodPalette {
    pub bright: &'static str,
    pub light: &'static str,
}

impl MethodPalette {
    pub const fn new(bright: &'static str, light: &'static str) -> Self {
        Self { bright, light }
    }
}

/// Picks the fill for one bar.
///
/// A bar is bright when its score is exactly the maximum of its dimension group, so tied leaders
/// are all highlighted. Every other bar gets the method's light tint.
#[allow(clippy::float_cmp)]
pub fn bar_color(score: f64, max_score: f64, method: Method) -> &'static str {
    let palette = method.palette();
    if score == max_score {
        palette.bright
    } else {
        palette.light
    }
}
