use crate::color::MethodPalette;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedding dimensions on the x axis, in plotting order.
pub const DIMENSION_LABELS: [&str; 5] = ["h=8", "h=16", "h=32", "h=64", "h=784 (full)"];

pub const DIMENSION_COUNT: usize = DIMENSION_LABELS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dataset {
    #[serde(rename = "MNIST")]
    Mnist,
    #[serde(rename = "FMNIST")]
    Fmnist,
}

impl Dataset {
    /// Row order of the figure (top to bottom).
    pub const ALL: [Dataset; 2] = [Dataset::Mnist, Dataset::Fmnist];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Mnist => "MNIST",
            Dataset::Fmnist => "FMNIST",
        }
    }

    pub fn row(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "ARI")]
    Ari,
    #[serde(rename = "NMI")]
    Nmi,
}

impl Metric {
    /// Column order of the figure (left to right).
    pub const ALL: [Metric; 2] = [Metric::Ari, Metric::Nmi];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Ari => "ARI",
            Metric::Nmi => "NMI",
        }
    }

    pub fn axis_title(self) -> &'static str {
        match self {
            Metric::Ari => "ARI Score",
            Metric::Nmi => "NMI Score",
        }
    }

    pub fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "KM")]
    Km,
    #[serde(rename = "EM")]
    Em,
    #[serde(rename = "WC")]
    Wc,
    #[serde(rename = "SB")]
    Sb,
}

impl Method {
    /// Trace order within a bar group; also the legend order.
    pub const ALL: [Method; 4] = [Method::Km, Method::Em, Method::Wc, Method::Sb];

    pub fn name(self) -> &'static str {
        match self {
            Method::Km => "KM",
            Method::Em => "EM",
            Method::Wc => "WC",
            Method::Sb => "SB",
        }
    }

    pub fn palette(self) -> MethodPalette {
        match self {
            Method::Km => MethodPalette::new("blue", "lightblue"),
            Method::Em => MethodPalette::new("green", "lightgreen"),
            Method::Wc => MethodPalette::new("red", "lightcoral"),
            Method::Sb => MethodPalette::new("purple", "plum"),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
