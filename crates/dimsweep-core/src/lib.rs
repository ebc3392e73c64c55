#![forbid(unsafe_code)]

//! Score tables and bar highlighting rules for the dimension sweep figure.
//!
//! The crate holds everything about the figure that is data rather than drawing:
//! - the literal ARI/NMI table for MNIST and FMNIST (`table`)
//! - the dataset, metric, method and dimension identifiers (`model`)
//! - the bright/light highlight rule (`color`)
//! - styling knobs with defaults (`config`)
//!
//! Layout, SVG and PDF output live in `dimsweep-render`.

pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod table;

pub use color::{MethodPalette, bar_color};
pub use config::{Annotation, FigureConfig, Margin};
pub use error::{Error, Result};
pub use model::{DIMENSION_COUNT, DIMENSION_LABELS, Dataset, Method, Metric};
pub use table::{Bar, MetricTable, Scores};

#[cfg(test)]
mod tests;
