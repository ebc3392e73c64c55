use dimsweep_core::{FigureConfig, MetricTable};
use dimsweep_render::svg::SvgRenderOptions;
use dimsweep_render::text::DeterministicTextMeasurer;
use dimsweep_render::pdf::{parse_svg, text_node_count};
use dimsweep_render::{render_figure_pdf, render_figure_svg};

fn default_svg() -> String {
    render_figure_svg(
        MetricTable::builtin(),
        &FigureConfig::default(),
        &DeterministicTextMeasurer::default(),
        &SvgRenderOptions::default(),
    )
    .expect("svg ok")
}

#[test]
fn svg_is_well_formed_with_page_size() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).expect("valid xml");
    let root = doc.root_element();
    assert!(root.has_tag_name("svg"));
    assert_eq!(root.attribute("width"), Some("1200"));
    assert_eq!(root.attribute("height"), Some("800"));
    assert_eq!(root.attribute("id"), Some("dimsweep"));
}

#[test]
fn svg_has_twenty_bars_per_subplot() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let subplots: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("g") && n.attribute("class") == Some("subplot"))
        .collect();
    assert_eq!(subplots.len(), 4);
    for subplot in subplots {
        let bars = subplot
            .descendants()
            .filter(|n| n.has_tag_name("rect") && n.attribute("data-method").is_some())
            .count();
        assert_eq!(bars, 20);
    }
}

#[test]
fn svg_legend_has_one_item_per_method() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let items: Vec<&str> = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("legend-item"))
        .filter_map(|n| n.attribute("data-method"))
        .collect();
    assert_eq!(items, vec!["KM", "EM", "WC", "SB"]);
}

#[test]
fn svg_contains_titles_and_highlight_colors() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert!(texts.contains(&"MNIST"));
    assert!(texts.contains(&"FMNIST"));
    assert!(texts.contains(&"h=784 (full)"));
    assert!(texts.contains(&"NMI Score"));

    let sb_h32 = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("subplot"))
        .find(|n| {
            n.attribute("data-dataset") == Some("MNIST") && n.attribute("data-metric") == Some("ARI")
        })
        .unwrap()
        .descendants()
        .find(|n| n.attribute("data-method") == Some("SB") && n.attribute("data-dimension") == Some("2"))
        .unwrap();
    assert_eq!(sb_h32.attribute("fill"), Some("purple"));
}

#[test]
fn custom_diagram_id_is_escaped() {
    let svg = render_figure_svg(
        MetricTable::builtin(),
        &FigureConfig::default(),
        &DeterministicTextMeasurer::default(),
        &SvgRenderOptions {
            diagram_id: Some("a\"b".to_string()),
        },
    )
    .unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("id"), Some("a\"b"));
}

#[test]
fn pdf_pipeline_produces_a_pdf() {
    let bytes = render_figure_pdf(
        MetricTable::builtin(),
        &FigureConfig::default(),
        &DeterministicTextMeasurer::default(),
    )
    .expect("pdf ok");
    assert!(bytes.len() > 100);
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(
        bytes.windows(5).any(|w| w == b"/Font"),
        "PDF embeds no font, labels were dropped"
    );
}

#[test]
fn every_label_survives_font_resolution() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let labels = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .count();
    // 4 x (5 dimension + y tick + title) labels, 4 legend labels, 2 dataset titles.
    assert!(labels >= 51, "only {labels} text elements");

    let tree = parse_svg(&svg).unwrap();
    assert_eq!(text_node_count(tree.root()), labels);
}

#[test]
fn font_family_falls_back_to_generic_sans_serif() {
    let svg = default_svg();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let main = doc
        .descendants()
        .find(|n| n.attribute("class") == Some("main"))
        .unwrap();
    let family = main.attribute("font-family").unwrap();
    assert!(family.starts_with("Arial"));
    assert!(family.ends_with("sans-serif"));
}
