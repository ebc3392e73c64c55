use crate::*;

fn colors_at(dataset: Dataset, metric: Metric, dimension: usize) -> Vec<(Method, &'static str)> {
    MetricTable::builtin()
        .bars(dataset, metric)
        .into_iter()
        .filter(|b| b.dimension == dimension)
        .map(|b| (b.method, b.color))
        .collect()
}

#[test]
fn mnist_ari_h32_highlights_sb_only() {
    let table = MetricTable::builtin();
    assert_eq!(DIMENSION_LABELS[2], "h=32");
    assert_eq!(table.score(Dataset::Mnist, Metric::Ari, Method::Km, 2), 0.3726);
    assert_eq!(table.score(Dataset::Mnist, Metric::Ari, Method::Em, 2), 0.4799);
    assert_eq!(table.score(Dataset::Mnist, Metric::Ari, Method::Wc, 2), 0.5068);
    assert_eq!(table.score(Dataset::Mnist, Metric::Ari, Method::Sb, 2), 0.7213);

    assert_eq!(
        colors_at(Dataset::Mnist, Metric::Ari, 2),
        vec![
            (Method::Km, "lightblue"),
            (Method::Em, "lightgreen"),
            (Method::Wc, "lightcoral"),
            (Method::Sb, "purple"),
        ]
    );
}

#[test]
fn fmnist_nmi_h16_highlights_sb_only() {
    let table = MetricTable::builtin();
    assert_eq!(DIMENSION_LABELS[1], "h=16");
    assert_eq!(
        table.scores(Dataset::Fmnist, Metric::Nmi, Method::Sb)[1],
        0.6232
    );
    assert_eq!(table.max_at(Dataset::Fmnist, Metric::Nmi, 1), 0.6232);
    assert_eq!(
        colors_at(Dataset::Fmnist, Metric::Nmi, 1),
        vec![
            (Method::Km, "lightblue"),
            (Method::Em, "lightgreen"),
            (Method::Wc, "lightcoral"),
            (Method::Sb, "purple"),
        ]
    );
}

#[test]
fn em_leads_fmnist_at_h8() {
    let table = MetricTable::builtin();
    assert_eq!(table.winners(Dataset::Fmnist, Metric::Ari, 0), vec![Method::Em]);
    assert_eq!(table.winners(Dataset::Fmnist, Metric::Nmi, 0), vec![Method::Em]);
    assert_eq!(table.winners(Dataset::Mnist, Metric::Ari, 0), vec![Method::Sb]);
}

#[test]
fn exactly_the_group_maximum_is_bright_in_every_group() {
    let table = MetricTable::builtin();
    for dataset in Dataset::ALL {
        for metric in Metric::ALL {
            let bars = table.bars(dataset, metric);
            assert_eq!(bars.len(), Method::ALL.len() * DIMENSION_COUNT);
            for dimension in 0..DIMENSION_COUNT {
                let winners = table.winners(dataset, metric, dimension);
                assert!(!winners.is_empty());
                for bar in bars.iter().filter(|b| b.dimension == dimension) {
                    let palette = bar.method.palette();
                    let expected = if winners.contains(&bar.method) {
                        palette.bright
                    } else {
                        palette.light
                    };
                    assert_eq!(
                        bar.color, expected,
                        "{dataset}/{metric}/{} {}",
                        bar.label, bar.method
                    );
                }
            }
        }
    }
}

#[test]
fn bars_are_method_major_in_trace_order() {
    let bars = MetricTable::builtin().bars(Dataset::Mnist, Metric::Nmi);
    let order: Vec<(Method, usize)> = bars.iter().map(|b| (b.method, b.dimension)).collect();
    assert_eq!(order[0], (Method::Km, 0));
    assert_eq!(order[4], (Method::Km, 4));
    assert_eq!(order[5], (Method::Em, 0));
    assert_eq!(order[19], (Method::Sb, 4));
    assert_eq!(bars[19].label, "h=784 (full)");
}

#[test]
fn tied_leaders_are_all_highlighted() {
    let table = MetricTable::builtin().clone().with_scores(
        Dataset::Mnist,
        Metric::Ari,
        Method::Wc,
        [0.5985, 0.4716, 0.5068, 0.4904, 0.4297],
    );
    assert_eq!(
        table.winners(Dataset::Mnist, Metric::Ari, 0),
        vec![Method::Wc, Method::Sb]
    );
    let bright: Vec<Method> = table
        .bars(Dataset::Mnist, Metric::Ari)
        .into_iter()
        .filter(|b| b.dimension == 0 && b.color == b.method.palette().bright)
        .map(|b| b.method)
        .collect();
    assert_eq!(bright, vec![Method::Wc, Method::Sb]);
}

#[test]
fn max_in_covers_the_whole_subplot() {
    let table = MetricTable::builtin();
    assert_eq!(table.max_in(Dataset::Mnist, Metric::Nmi), 0.7960);
    assert_eq!(table.max_in(Dataset::Fmnist, Metric::Ari), 0.4489);
}
