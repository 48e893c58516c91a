//! Per-model classification scores

use serde::Deserialize;

use super::table::{MetricTable, TableError};

/// Precision, recall and F1 for one model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelScores {
    pub model: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ModelScores {
    pub fn new(model: impl Into<String>, precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            model: model.into(),
            precision,
            recall,
            f1,
        }
    }

    /// Compute scores from confusion counts of the positive class.
    ///
    /// A ratio with a zero denominator is reported as 0.0.
    pub fn from_counts(
        model: impl Into<String>,
        true_positives: u64,
        false_positives: u64,
        false_negatives: u64,
    ) -> Self {
        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        Self::new(model, precision, recall, f1)
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl MetricTable {
    /// Build a `model | precision | recall | f1` table
    pub fn from_scores(title: impl Into<String>, scores: &[ModelScores]) -> Result<Self, TableError> {
        MetricTable::builder(title)
            .column("model", scores.iter().map(|s| s.model.clone()))
            .column("precision", scores.iter().map(|s| s.precision))
            .column("recall", scores.iter().map(|s| s.recall))
            .column("f1", scores.iter().map(|s| s.f1))
            .build()
    }
}
