use crate::model::{
    BarLayout, BoxData, FigureLayout, GridLine, LegendEntryLayout, LegendLayout, SubplotLayout,
    TextAnchor, TextBaseline, TextData,
};
use crate::text::{TextMeasurer, TextStyle};
use crate::ticks::{nice_ticks, tick_label};
use crate::{Error, Result};
use dimsweep_core::geom::{PaperFrame, rect};
use dimsweep_core::{
    DIMENSION_COUNT, DIMENSION_LABELS, Dataset, FigureConfig, Margin, Method, Metric, MetricTable,
};

const TICK_LABEL_GAP: f64 = 6.0;
const AXIS_TITLE_GAP: f64 = 10.0;
const LEGEND_SWATCH_GAP: f64 = 8.0;
const X_LABEL_ROTATION: f64 = -30.0;
const MARGIN_PAD: f64 = 4.0;

/// Splits `[0, 1]` into `n` equal cells separated by `spacing`, in ascending order.
fn grid_domains(n: usize, spacing: f64) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }
    let cell = (1.0 - spacing * (n as f64 - 1.0)) / n as f64;
    (0..n)
        .map(|i| {
            let start = i as f64 * (cell + spacing);
            (start, start + cell)
        })
        .collect()
}

fn max_width<'a>(
    texts: impl IntoIterator<Item = &'a str>,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> f64 {
    texts
        .into_iter()
        .map(|t| measurer.measure(t, style).width)
        .fold(0.0, f64::max)
}

/// y range and tick values of one subplot; the axis always starts at zero.
fn y_axis(
    table: &MetricTable,
    config: &FigureConfig,
    dataset: Dataset,
    metric: Metric,
) -> Result<(f64, Vec<f64>)> {
    let y_max = table.max_in(dataset, metric) * config.y_headroom;
    if !(y_max.is_finite() && y_max > 0.0) {
        return Err(Error::InvalidModel {
            message: format!("{dataset}/{metric} has no positive scores"),
        });
    }
    let ticks = nice_ticks(0.0, y_max, config.y_tick_count)
        .into_iter()
        .filter(|t| *t <= y_max)
        .collect();
    Ok((y_max, ticks))
}

/// Whether dimension labels must be slanted to fit `band`, and how far they reach below the axis.
fn x_label_extent(config: &FigureConfig, measurer: &dyn TextMeasurer, band: f64) -> (bool, f64) {
    let style = TextStyle::sized(config.x_tick_font_size);
    let width = max_width(DIMENSION_LABELS, &style, measurer);
    let height = measurer.measure(DIMENSION_LABELS[0], &style).height;
    if width > band {
        let angle = X_LABEL_ROTATION.abs().to_radians();
        (true, width * angle.sin() + height * angle.cos())
    } else {
        (false, height)
    }
}

fn band_width(plot_width: f64, config: &FigureConfig) -> f64 {
    let columns = grid_domains(Metric::ALL.len(), config.horizontal_spacing);
    let column = columns.first().map(|(a, b)| b - a).unwrap_or(1.0);
    plot_width * column / DIMENSION_COUNT as f64
}

/// Grows the left and bottom margins until axis titles and tick labels fit on the page.
fn effective_margin(
    table: &MetricTable,
    config: &FigureConfig,
    measurer: &dyn TextMeasurer,
) -> Result<Margin> {
    let mut margin = config.margin;
    if !config.automargin {
        return Ok(margin);
    }

    let tick_style = TextStyle::sized(config.y_tick_font_size);
    let mut label_width: f64 = 0.0;
    for dataset in Dataset::ALL {
        for metric in Metric::ALL {
            let (_, ticks) = y_axis(table, config, dataset, metric)?;
            let labels: Vec<String> = ticks.into_iter().map(tick_label).collect();
            label_width = label_width.max(max_width(
                labels.iter().map(String::as_str),
                &tick_style,
                measurer,
            ));
        }
    }
    let title_style = TextStyle::sized(config.y_title_font_size);
    let title_height = Metric::ALL
        .iter()
        .map(|m| measurer.measure(m.axis_title(), &title_style).height)
        .fold(0.0, f64::max);
    margin.left = margin.left.max(
        TICK_LABEL_GAP + label_width + AXIS_TITLE_GAP + title_height + MARGIN_PAD,
    );

    let band = band_width(config.plot_area(&margin).width(), config);
    let (_, overhang) = x_label_extent(config, measurer, band);
    margin.bottom = margin
        .bottom
        .max(TICK_LABEL_GAP + overhang + MARGIN_PAD);

    if margin.left + margin.right >= config.width || margin.top + margin.bottom >= config.height
    {
        return Err(Error::Layout {
            message: format!(
                "labels need {}x{} of margin on a {}x{} page",
                margin.left + margin.right,
                margin.top + margin.bottom,
                config.width,
                config.height
            ),
        });
    }

    tracing::debug!(left = margin.left, bottom = margin.bottom, "grew margins to fit labels");
    Ok(margin)
}

struct Ctx<'a> {
    table: &'a MetricTable,
    config: &'a FigureConfig,
    measurer: &'a dyn TextMeasurer,
    frame: PaperFrame,
    columns: Vec<(f64, f64)>,
    rows: Vec<(f64, f64)>,
}

impl Ctx<'_> {
    fn text(&self, text: &str, x: f64, y: f64, font_size: f64) -> TextData {
        TextData {
            text: text.to_string(),
            x,
            y,
            font_size,
            font_weight: None,
            fill: self.config.text_color.clone(),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            rotation: 0.0,
        }
    }

    fn subplot(&self, dataset: Dataset, metric: Metric) -> Result<SubplotLayout> {
        let cfg = self.config;
        let row = dataset.row();
        let column = metric.column();

        // Paper y grows upward, rows are numbered from the top.
        let y_domain = self.rows[self.rows.len() - 1 - row];
        let plot = BoxData::from(self.frame.domain_rect(self.columns[column], y_domain));

        let (y_max, ticks) = y_axis(self.table, cfg, dataset, metric)?;
        let scale_y = |v: f64| plot.bottom() - (v / y_max) * plot.height;

        let grid_lines = ticks
            .iter()
            .map(|&t| GridLine {
                y: scale_y(t),
                x1: plot.x,
                x2: plot.right(),
            })
            .collect();

        let y_labels: Vec<TextData> = ticks
            .iter()
            .map(|&t| {
                let mut label = self.text(
                    &tick_label(t),
                    plot.x - TICK_LABEL_GAP,
                    scale_y(t),
                    cfg.y_tick_font_size,
                );
                label.anchor = TextAnchor::End;
                label
            })
            .collect();
        let y_label_width = max_width(
            y_labels.iter().map(|l| l.text.as_str()),
            &TextStyle::sized(cfg.y_tick_font_size),
            self.measurer,
        );

        let title_style = TextStyle::sized(cfg.y_title_font_size);
        let title_height = self
            .measurer
            .measure(metric.axis_title(), &title_style)
            .height;
        let mut y_title = self.text(
            metric.axis_title(),
            plot.x - TICK_LABEL_GAP - y_label_width - AXIS_TITLE_GAP - title_height / 2.0,
            plot.y + plot.height / 2.0,
            cfg.y_title_font_size,
        );
        y_title.rotation = -90.0;

        let band = plot.width / DIMENSION_COUNT as f64;
        let (rotate_x_labels, _) = x_label_extent(cfg, self.measurer, band);
        let x_labels = DIMENSION_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut t = self.text(
                    label,
                    plot.x + (i as f64 + 0.5) * band,
                    plot.bottom() + TICK_LABEL_GAP,
                    cfg.x_tick_font_size,
                );
                t.baseline = TextBaseline::Hanging;
                if rotate_x_labels {
                    t.anchor = TextAnchor::End;
                    t.rotation = X_LABEL_ROTATION;
                }
                t
            })
            .collect();

        let group_center = (Method::ALL.len() as f64 - 1.0) / 2.0;
        let bar_width = cfg.bar_width * band;
        let bars: Vec<BarLayout> = self
            .table
            .bars(dataset, metric)
            .into_iter()
            .map(|bar| {
                let offset = (bar.method.index() as f64 - group_center) * cfg.bar_width;
                let center = plot.x + (bar.dimension as f64 + 0.5 + offset) * band;
                let top = scale_y(bar.score);
                BarLayout {
                    method: bar.method,
                    dimension: bar.dimension,
                    score: bar.score,
                    fill: bar.color.to_string(),
                    highlighted: bar.color == bar.method.palette().bright,
                    rect: BoxData::from(rect(
                        center - bar_width / 2.0,
                        top,
                        bar_width,
                        plot.bottom() - top,
                    )),
                }
            })
            .collect();

        tracing::debug!(
            dataset = %dataset,
            metric = %metric,
            y_max,
            ticks = ticks.len(),
            rotate_x_labels,
            "laid out subplot"
        );

        Ok(SubplotLayout {
            dataset,
            metric,
            row,
            column,
            plot,
            background: cfg.plot_background.clone(),
            grid_color: cfg.grid_color.clone(),
            y_max,
            grid_lines,
            x_labels,
            y_labels,
            y_title,
            bars,
            show_legend: row == 0 && column == 0,
        })
    }

    fn legend(&self) -> LegendLayout {
        let cfg = self.config;
        let style = TextStyle {
            font_size: cfg.legend_font_size,
            font_weight: Some(cfg.legend_font_weight.clone()),
        };
        let row_height = cfg.legend_font_size * 1.5;
        let swatch = cfg.legend_font_size;
        let x = self.frame.x(cfg.legend_x);
        let top = self.frame.y(1.0);
        // Swatches take the color of each method's first bar in the legend-owning subplot.
        let first_bars = self.table.bars(Dataset::ALL[0], Metric::ALL[0]);

        let entries: Vec<LegendEntryLayout> = Method::ALL
            .iter()
            .enumerate()
            .map(|(i, &method)| {
                let row_top = top + i as f64 * row_height;
                let mut label = self.text(
                    method.name(),
                    x + swatch + LEGEND_SWATCH_GAP,
                    row_top + row_height / 2.0,
                    cfg.legend_font_size,
                );
                label.anchor = TextAnchor::Start;
                label.font_weight = Some(cfg.legend_font_weight.clone());
                LegendEntryLayout {
                    method,
                    swatch: BoxData::from(rect(
                        x,
                        row_top + (row_height - swatch) / 2.0,
                        swatch,
                        swatch,
                    )),
                    swatch_fill: first_bars
                        .iter()
                        .find(|b| b.method == method)
                        .map_or(method.palette().bright, |b| b.color)
                        .to_string(),
                    label,
                }
            })
            .collect();

        let label_width = max_width(Method::ALL.iter().map(|m| m.name()), &style, self.measurer);
        LegendLayout {
            bounds: BoxData::from(rect(
                x,
                top,
                swatch + LEGEND_SWATCH_GAP + label_width,
                entries.len() as f64 * row_height,
            )),
            entries,
        }
    }
}

/// Lays out the 2x2 summary figure: one subplot per (dataset, metric), rows by dataset.
pub fn layout_figure(
    table: &MetricTable,
    config: &FigureConfig,
    measurer: &dyn TextMeasurer,
) -> Result<FigureLayout> {
    config.validate()?;

    let margin = effective_margin(table, config, measurer)?;
    let plot_area = config.plot_area(&margin);
    let ctx = Ctx {
        table,
        config,
        measurer,
        frame: PaperFrame::new(plot_area),
        columns: grid_domains(Metric::ALL.len(), config.horizontal_spacing),
        rows: grid_domains(Dataset::ALL.len(), config.vertical_spacing),
    };

    let mut subplots = Vec::with_capacity(Dataset::ALL.len() * Metric::ALL.len());
    for dataset in Dataset::ALL {
        for metric in Metric::ALL {
            subplots.push(ctx.subplot(dataset, metric)?);
        }
    }

    let annotations = config
        .annotations
        .iter()
        .map(|a| {
            let p = ctx.frame.point(a.x, a.y);
            ctx.text(&a.text, p.x, p.y, config.annotation_font_size)
        })
        .collect();

    Ok(FigureLayout {
        width: config.width,
        height: config.height,
        page_background: config.page_background.clone(),
        font_family: config.font_family.clone(),
        margin,
        plot_area: BoxData::from(plot_area),
        subplots,
        legend: ctx.legend(),
        annotations,
    })
}
