//! Evaluation metrics over binary indicator matrices.

use serde::{Deserialize, Serialize};

/// Precision, recall and F1 for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true occurrences.
    pub support: usize,
}

/// Per-label scores plus the aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Fraction of rows whose predicted indicator vector matches exactly.
    pub accuracy: f64,
    /// Support-weighted mean of per-label F1.
    pub weighted_f1: f64,
    pub labels: Vec<LabelScore>,
}

impl ClassificationReport {
    /// Score `predicted` against `truth`. Both are row-major indicator matrices.
    pub fn compute(truth: &[Vec<u8>], predicted: &[Vec<u8>], classes: &[String]) -> Self {
        let labels: Vec<LabelScore> = classes
            .iter()
            .enumerate()
            .map(|(j, label)| label_score(truth, predicted, j, label))
            .collect();

        let total_support: usize = labels.iter().map(|s| s.support).sum();
        let weighted_f1 = if total_support == 0 {
            0.0
        } else {
            labels
                .iter()
                .map(|s| s.f1 * s.support as f64)
                .sum::<f64>()
                / total_support as f64
        };

        Self {
            accuracy: subset_accuracy(truth, predicted),
            weighted_f1,
            labels,
        }
    }

    /// Render the report as an aligned text table.
    pub fn to_table(&self) -> String {
        let width = self
            .labels
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);
        let mut out = format!(
            "{:<width$}  {:>9}  {:>6}  {:>8}  {:>7}\n",
            "label", "precision", "recall", "f1-score", "support"
        );
        for s in &self.labels {
            let pad = width - s.label.chars().count();
            out.push_str(&format!(
                "{}{}  {:>9.2}  {:>6.2}  {:>8.2}  {:>7}\n",
                s.label,
                " ".repeat(pad),
                s.precision,
                s.recall,
                s.f1,
                s.support
            ));
        }
        out.push_str(&format!(
            "accuracy {:.4}, weighted f1 {:.4}",
            self.accuracy, self.weighted_f1
        ));
        out
    }
}

/// Fraction of rows predicted exactly right. Zero rows give zero.
pub fn subset_accuracy(truth: &[Vec<u8>], predicted: &[Vec<u8>]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let exact = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    exact as f64 / truth.len() as f64
}

fn label_score(truth: &[Vec<u8>], predicted: &[Vec<u8>], j: usize, label: &str) -> LabelScore {
    let (mut tp, mut fp, mut fn_) = (0usize, 0usize, 0usize);
    for (t, p) in truth.iter().zip(predicted) {
        match (t[j] != 0, p[j] != 0) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }
    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    LabelScore {
        label: label.to_string(),
        precision,
        recall,
        f1,
        support: tp + fn_,
    }
}
