#![forbid(unsafe_code)]

//! Headless layout and export for the dimension sweep summary figure.
//!
//! Pipeline: [`layout_figure`] computes absolute geometry, [`svg::render_figure_svg`] serializes
//! it, and [`pdf::svg_to_pdf`] converts the SVG into the final PDF page.

pub mod layout;
pub mod model;
pub mod pdf;
pub mod svg;
pub mod text;
pub mod ticks;

pub use layout::layout_figure;

use crate::svg::SvgRenderOptions;
use crate::text::TextMeasurer;
use dimsweep_core::{FigureConfig, MetricTable};

/// File the summary figure is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "mnist_fmnist_summary.pdf";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] dimsweep_core::Error),
    #[error("invalid score table: {message}")]
    InvalidModel { message: String },
    #[error("layout error: {message}")]
    Layout { message: String },
    #[error("{missing} of {expected} text elements have no usable font")]
    MissingFonts { missing: usize, expected: usize },
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out and serializes the figure to SVG.
pub fn render_figure_svg(
    table: &MetricTable,
    config: &FigureConfig,
    measurer: &dyn TextMeasurer,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    let layout = layout_figure(table, config, measurer)?;
    svg::render_figure_svg(&layout, svg_options)
}

/// Full pipeline: layout, SVG, PDF bytes.
pub fn render_figure_pdf(
    table: &MetricTable,
    config: &FigureConfig,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<u8>> {
    let svg = render_figure_svg(table, config, measurer, &SvgRenderOptions::default())?;
    let pdf = pdf::svg_to_pdf(&svg)?;
    tracing::info!(svg_bytes = svg.len(), pdf_bytes = pdf.len(), "rendered figure");
    Ok(pdf)
}
