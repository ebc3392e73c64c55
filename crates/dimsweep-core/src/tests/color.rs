use crate::*;

#[test]
fn bar_color_uses_bright_tone_only_for_the_group_maximum() {
    assert_eq!(bar_color(0.7213, 0.7213, Method::Sb), "purple");
    assert_eq!(bar_color(0.5068, 0.7213, Method::Wc), "lightcoral");
    assert_eq!(bar_color(0.4799, 0.7213, Method::Em), "lightgreen");
    assert_eq!(bar_color(0.3726, 0.7213, Method::Km), "lightblue");
}

#[test]
fn bar_color_highlights_every_method_tied_at_the_maximum() {
    assert_eq!(bar_color(0.5, 0.5, Method::Km), "blue");
    assert_eq!(bar_color(0.5, 0.5, Method::Em), "green");
    assert_eq!(bar_color(0.5, 0.5, Method::Wc), "red");
}

#[test]
fn every_method_has_distinct_palette_entries() {
    let mut seen = Vec::new();
    for method in Method::ALL {
        let p = method.palette();
        assert_ne!(p.bright, p.light, "{method} bright and light must differ");
        seen.push(p.bright);
        seen.push(p.light);
    }
    let mut dedup = seen.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), seen.len());
}
