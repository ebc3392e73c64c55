use crate::{Error, Result};
use svg2pdf::usvg::{self, fontdb};

/// Installed families tried, in order, for the generic `sans-serif` keyword.
const SANS_SERIF_CANDIDATES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "Arimo",
    "DejaVu Sans",
    "Noto Sans",
    "FreeSans",
];

/// Picks a sans-serif family that is actually present in `db`.
///
/// Falls back to the first family of the first loaded face. Returns `None` only for an empty
/// database.
fn resolve_sans_serif(db: &fontdb::Database) -> Option<String> {
    let installed = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    SANS_SERIF_CANDIDATES
        .iter()
        .find(|&&name| installed(name))
        .map(|name| (*name).to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        })
}

/// usvg options with system fonts loaded and `sans-serif` bound to an installed family.
fn parse_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    let db = opt.fontdb_mut();
    db.load_system_fonts();

    match resolve_sans_serif(db) {
        Some(family) => {
            tracing::debug!(family = %family, faces = db.len(), "resolved sans-serif font");
            db.set_sans_serif_family(family.clone());
            opt.font_family = family;
        }
        None => tracing::warn!("no system fonts found; text cannot be rendered"),
    }
    opt
}

fn svg_text_count(svg: &str) -> Result<usize> {
    let doc = roxmltree::Document::parse(svg).map_err(|_| Error::SvgParse)?;
    Ok(doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter(|n| n.text().is_some_and(|t| !t.trim().is_empty()))
        .count())
}

/// Counts text nodes that survived parsing; usvg drops text it finds no font for.
pub fn text_node_count(group: &usvg::Group) -> usize {
    group
        .children()
        .iter()
        .map(|node| match node {
            usvg::Node::Text(_) => 1,
            usvg::Node::Group(g) => text_node_count(g),
            _ => 0,
        })
        .sum()
}

fn ensure_text_kept(expected: usize, tree: &usvg::Tree) -> Result<()> {
    let kept = text_node_count(tree.root());
    if kept < expected {
        return Err(Error::MissingFonts {
            missing: expected - kept,
            expected,
        });
    }
    Ok(())
}

/// Parses figure SVG with the same font setup used for export.
pub fn parse_svg(svg: &str) -> Result<usvg::Tree> {
    usvg::Tree::from_str(svg, &parse_options()).map_err(|_| Error::SvgParse)
}

/// Converts a standalone SVG document into a single-page PDF.
///
/// Page size follows the root `width`/`height`, one SVG user unit per PDF point. Fails with
/// [`Error::MissingFonts`] instead of writing a page whose labels were dropped.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let expected = svg_text_count(svg)?;
    let tree = parse_svg(svg)?;
    ensure_text_kept(expected, &tree)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| Error::PdfConvert)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELLED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="40" viewBox="0 0 120 40" font-family="Arial, Helvetica, sans-serif"><rect width="120" height="40" fill="plum"/><text x="10" y="25" font-size="16">SB</text></svg>"#;

    #[test]
    fn labelled_svg_keeps_its_text_and_embeds_a_font() {
        let tree = parse_svg(LABELLED).unwrap();
        assert_eq!(text_node_count(tree.root()), 1);

        let bytes = svg_to_pdf(LABELLED).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|w| w == b"/Font"));
    }

    #[test]
    fn dropped_text_is_an_error() {
        let tree = parse_svg(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10"/></svg>"#,
        )
        .unwrap();
        let err = ensure_text_kept(3, &tree).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingFonts {
                missing: 3,
                expected: 3
            }
        ));
    }

    #[test]
    fn blank_text_elements_are_not_expected_to_render() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><text> </text><text>KM</text><g><text>EM</text></g></svg>"#;
        assert_eq!(svg_text_count(svg).unwrap(), 2);
    }

    #[test]
    fn sans_serif_resolves_to_an_installed_family() {
        let mut db = fontdb::Database::new();
        assert_eq!(resolve_sans_serif(&db), None);

        db.load_system_fonts();
        if let Some(family) = resolve_sans_serif(&db) {
            assert!(
                db.faces()
                    .any(|f| f.families.iter().any(|(name, _)| *name == family))
            );
        }
    }

    #[test]
    fn malformed_svg_is_a_parse_error() {
        assert!(matches!(svg_to_pdf("<svg").unwrap_err(), Error::SvgParse));
    }
}
