use crate::Result;
use crate::model::{BoxData, FigureLayout, SubplotLayout, TextData};
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id>`; defaults to `dimsweep`.
    pub diagram_id: Option<String>,
}

#[derive(Debug, Clone)]
struct Node {
    tag: &'static str,
    attrs: BTreeMap<&'static str, String>,
    text: Option<String>,
    children: Vec<usize>,
}

/// Element tree built in document order, then serialized in one pass.
#[derive(Debug, Default)]
struct Doc {
    arena: Vec<Node>,
}

impl Doc {
    fn add(&mut self, parent: Option<usize>, tag: &'static str) -> usize {
        let id = self.arena.len();
        self.arena.push(Node {
            tag,
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.arena[p].children.push(id);
        }
        id
    }

    fn set(&mut self, id: usize, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.arena[id].attrs.insert(key, value.into());
        self
    }

    fn group(&mut self, parent: usize, class: &str) -> usize {
        let g = self.add(Some(parent), "g");
        self.set(g, "class", escape_xml(class));
        g
    }

    fn rect(&mut self, parent: usize, r: &BoxData, fill: &str) -> usize {
        let id = self.add(Some(parent), "rect");
        self.set(id, "x", fmt(r.x))
            .set(id, "y", fmt(r.y))
            .set(id, "width", fmt(r.width))
            .set(id, "height", fmt(r.height))
            .set(id, "fill", escape_xml(fill));
        id
    }

    fn text(&mut self, parent: usize, t: &TextData) -> usize {
        let id = self.add(Some(parent), "text");
        self.set(id, "x", fmt(t.x))
            .set(id, "y", fmt(t.y))
            .set(id, "font-size", fmt(t.font_size))
            .set(id, "fill", escape_xml(&t.fill))
            .set(id, "text-anchor", t.anchor.as_svg())
            .set(id, "dominant-baseline", t.baseline.as_svg());
        if let Some(weight) = t.font_weight.as_deref() {
            self.set(id, "font-weight", escape_xml(weight));
        }
        if t.rotation != 0.0 {
            self.set(
                id,
                "transform",
                format!("rotate({} {} {})", fmt(t.rotation), fmt(t.x), fmt(t.y)),
            );
        }
        self.arena[id].text = Some(escape_xml(&t.text));
        id
    }

    fn write(&self, out: &mut String, id: usize) {
        let n = &self.arena[id];
        out.push('<');
        out.push_str(n.tag);
        for (k, v) in &n.attrs {
            let _ = write!(out, r#" {k}="{v}""#);
        }
        if n.children.is_empty() && n.text.as_deref().unwrap_or("").is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = n.text.as_deref() {
            out.push_str(t);
        }
        for c in &n.children {
            self.write(out, *c);
        }
        let _ = write!(out, "</{}>", n.tag);
    }
}

fn render_subplot(doc: &mut Doc, parent: usize, subplot: &SubplotLayout) {
    let g = doc.group(parent, "subplot");
    doc.set(g, "data-dataset", subplot.dataset.name())
        .set(g, "data-metric", subplot.metric.name());

    let bg = doc.rect(g, &subplot.plot, &subplot.background);
    doc.set(bg, "class", "plot-background");

    let grid = doc.group(g, "grid");
    for line in &subplot.grid_lines {
        let l = doc.add(Some(grid), "line");
        doc.set(l, "x1", fmt(line.x1))
            .set(l, "x2", fmt(line.x2))
            .set(l, "y1", fmt(line.y))
            .set(l, "y2", fmt(line.y))
            .set(l, "stroke", escape_xml(&subplot.grid_color))
            .set(l, "stroke-width", "1");
    }

    let bars = doc.group(g, "bars");
    for bar in &subplot.bars {
        let r = doc.rect(bars, &bar.rect, &bar.fill);
        doc.set(r, "data-method", bar.method.name())
            .set(r, "data-dimension", bar.dimension.to_string());
    }

    let x_axis = doc.group(g, "x-axis");
    for label in &subplot.x_labels {
        doc.text(x_axis, label);
    }
    let y_axis = doc.group(g, "y-axis");
    for label in &subplot.y_labels {
        doc.text(y_axis, label);
    }
    let title = doc.text(y_axis, &subplot.y_title);
    doc.set(title, "class", "axis-title");
}

/// Serializes a laid-out figure to a standalone SVG document.
///
/// The root carries absolute `width`/`height` so PDF conversion picks up the page size.
pub fn render_figure_svg(layout: &FigureLayout, options: &SvgRenderOptions) -> Result<String> {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("dimsweep");
    let w = fmt(layout.width.max(1.0));
    let h = fmt(layout.height.max(1.0));

    let mut doc = Doc::default();
    let root = doc.add(None, "svg");
    doc.set(root, "id", escape_xml(diagram_id))
        .set(root, "xmlns", "http://www.w3.org/2000/svg")
        .set(root, "width", w.clone())
        .set(root, "height", h.clone())
        .set(root, "viewBox", format!("0 0 {w} {h}"))
        .set(root, "role", "graphics-document document")
        .set(root, "aria-roledescription", "bar-chart");

    let page = doc.add(Some(root), "rect");
    doc.set(page, "class", "background")
        .set(page, "width", w.clone())
        .set(page, "height", h.clone())
        .set(page, "fill", escape_xml(&layout.page_background));

    let main = doc.group(root, "main");
    doc.set(main, "font-family", escape_xml(&layout.font_family));

    for subplot in &layout.subplots {
        render_subplot(&mut doc, main, subplot);
    }

    let legend = doc.group(main, "legend");
    for entry in &layout.legend.entries {
        let item = doc.group(legend, "legend-item");
        doc.set(item, "data-method", entry.method.name());
        doc.rect(item, &entry.swatch, &entry.swatch_fill);
        doc.text(item, &entry.label);
    }

    let annotations = doc.group(main, "annotations");
    for annotation in &layout.annotations {
        doc.text(annotations, annotation);
    }

    let mut out = String::new();
    doc.write(&mut out, root);
    Ok(out)
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, without `-0` and tiny float noise from layout math.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
