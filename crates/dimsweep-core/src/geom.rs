#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    euclid::rect(x, y, width, height)
}

/// Maps normalized "paper" coordinates onto the plot area of a figure.
///
/// Paper `(0, 0)` is the bottom-left corner of the plot area and `(1, 1)` its top-right corner.
/// Values outside `[0, 1]` land in the margins, which is how floating titles are placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperFrame {
    pub plot_area: Rect,
}

impl PaperFrame {
    pub fn new(plot_area: Rect) -> Self {
        Self { plot_area }
    }

    pub fn x(&self, paper_x: f64) -> f64 {
        self.plot_area.min_x() + paper_x * self.plot_area.width()
    }

    pub fn y(&self, paper_y: f64) -> f64 {
        self.plot_area.min_y() + (1.0 - paper_y) * self.plot_area.height()
    }

    pub fn point(&self, paper_x: f64, paper_y: f64) -> Point {
        point(self.x(paper_x), self.y(paper_y))
    }

    /// Converts a paper-space domain (`x0..x1`, `y0..y1`) into an absolute rectangle.
    pub fn domain_rect(&self, x: (f64, f64), y: (f64, f64)) -> Rect {
        let left = self.x(x.0);
        let right = self.x(x.1);
        let top = self.y(y.1);
        let bottom = self.y(y.0);
        rect(left, top, right - left, bottom - top)
    }
}
