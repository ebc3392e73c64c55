use crate::color::bar_color;
use crate::model::{DIMENSION_COUNT, DIMENSION_LABELS, Dataset, Method, Metric};
use serde::Serialize;

/// One score per dimension label, in `DIMENSION_LABELS` order.
pub type Scores = [f64; DIMENSION_COUNT];

type MethodScores = [Scores; Method::ALL.len()];

/// Clustering scores indexed by dataset, metric and method.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    // [dataset][metric][method]
    cells: [[MethodScores; Metric::ALL.len()]; Dataset::ALL.len()],
}

static BUILTIN: MetricTable = MetricTable {
    cells: [
        // MNIST
        [
            // ARI
            [
                [0.3625, 0.3661, 0.3726, 0.3821, 0.3665],
                [0.4587, 0.4974, 0.4799, 0.4440, 0.1850],
                [0.4240, 0.4716, 0.5068, 0.4904, 0.4297],
                [0.5985, 0.6876, 0.7213, 0.7069, 0.6619],
            ],
            // NMI
            [
                [0.4750, 0.4890, 0.4957, 0.5036, 0.4915],
                [0.5921, 0.6424, 0.6318, 0.5958, 0.3252],
                [0.5467, 0.6220, 0.6577, 0.6536, 0.6129],
                [0.6709, 0.7627, 0.7960, 0.7854, 0.7628],
            ],
        ],
        // FMNIST
        [
            // ARI
            [
                [0.3730, 0.3960, 0.3796, 0.3877, 0.3497],
                [0.3960, 0.3900, 0.4089, 0.4426, 0.3247],
                [0.3796, 0.4089, 0.3292, 0.3619, 0.3684],
                [0.3877, 0.4426, 0.4488, 0.4489, 0.4088],
            ],
            // NMI
            [
                [0.5191, 0.5739, 0.5233, 0.5715, 0.5055],
                [0.5739, 0.5843, 0.5945, 0.6232, 0.4889],
                [0.5233, 0.5945, 0.5231, 0.5511, 0.5715],
                [0.5715, 0.6232, 0.6321, 0.6268, 0.6122],
            ],
        ],
    ],
};

/// A single drawable bar: where it sits in the table, its height and its fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub dataset: Dataset,
    pub metric: Metric,
    pub method: Method,
    pub dimension: usize,
    pub label: &'static str,
    pub score: f64,
    pub color: &'static str,
}

impl MetricTable {
    /// The MNIST/FMNIST results the figure is drawn from.
    pub fn builtin() -> &'static MetricTable {
        &BUILTIN
    }

    /// Returns a copy with one series replaced.
    pub fn with_scores(
        mut self,
        dataset: Dataset,
        metric: Metric,
        method: Method,
        scores: Scores,
    ) -> Self {
        self.cells[dataset.row()][metric.column()][method.index()] = scores;
        self
    }

    pub fn scores(&self, dataset: Dataset, metric: Metric, method: Method) -> &Scores {
        &self.cells[dataset.row()][metric.column()][method.index()]
    }

    pub fn score(&self, dataset: Dataset, metric: Metric, method: Method, dimension: usize) -> f64 {
        self.scores(dataset, metric, method)[dimension]
    }

    /// Highest score among all methods at one dimension.
    pub fn max_at(&self, dataset: Dataset, metric: Metric, dimension: usize) -> f64 {
        Method::ALL
            .iter()
            .map(|&m| self.score(dataset, metric, m, dimension))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Highest score anywhere in one subplot.
    pub fn max_in(&self, dataset: Dataset, metric: Metric) -> f64 {
        (0..DIMENSION_COUNT)
            .map(|d| self.max_at(dataset, metric, d))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Every method whose score equals the group maximum; more than one on ties.
    #[allow(clippy::float_cmp)]
    pub fn winners(&self, dataset: Dataset, metric: Metric, dimension: usize) -> Vec<Method> {
        let max = self.max_at(dataset, metric, dimension);
        Method::ALL
            .into_iter()
            .filter(|&m| self.score(dataset, metric, m, dimension) == max)
            .collect()
    }

    /// All bars of one subplot in trace order: method-major, dimension-minor.
    pub fn bars(&self, dataset: Dataset, metric: Metric) -> Vec<Bar> {
        let maxima: Vec<f64> = (0..DIMENSION_COUNT)
            .map(|d| self.max_at(dataset, metric, d))
            .collect();

        let mut out = Vec::with_capacity(Method::ALL.len() * DIMENSION_COUNT);
        for method in Method::ALL {
            for (dimension, &score) in self.scores(dataset, metric, method).iter().enumerate() {
                out.push(Bar {
                    dataset,
                    metric,
                    method,
                    dimension,
                    label: DIMENSION_LABELS[dimension],
                    score,
                    color: bar_color(score, maxima[dimension], method),
                });
            }
        }
        out
    }
}
