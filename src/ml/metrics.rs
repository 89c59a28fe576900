//! Evaluation metrics for classification models.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Confusion matrix for a `K`-class classifier.
pub struct ConfusionMatrix {
    /// Number of classes.
    pub n_classes: usize,
    /// Row-major `KxK` counts (`truth * K + predicted`).
    pub counts: Vec<u32>,
}

impl ConfusionMatrix {
    /// Create an empty `KxK` confusion matrix.
    pub fn new(n_classes: usize) -> Self {
        Self {
            n_classes,
            counts: vec![0; n_classes * n_classes],
        }
    }

    /// Build a matrix from aligned truth/prediction pairs.
    pub fn from_pairs(n_classes: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut cm = Self::new(n_classes);
        for (truth, predicted) in pairs {
            cm.add(truth, predicted);
        }
        cm
    }

    pub fn add(&mut self, truth: usize, predicted: usize) {
        if truth >= self.n_classes || predicted >= self.n_classes {
            return;
        }
        let idx = truth * self.n_classes + predicted;
        self.counts[idx] = self.counts[idx].saturating_add(1);
    }

    pub fn get(&self, truth: usize, predicted: usize) -> u32 {
        self.counts[truth * self.n_classes + predicted]
    }

    /// Number of samples whose true class is `truth`.
    pub fn row_sum(&self, truth: usize) -> u32 {
        (0..self.n_classes).map(|pred| self.get(truth, pred)).sum()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Largest single cell, used to scale heatmap colours.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Matrix as nested rows (`rows[truth][predicted]`).
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.counts
            .chunks(self.n_classes.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Precision/recall statistics for a single class.
pub struct PerClassStats {
    /// `TP / (TP + FP)`.
    pub precision: f64,
    /// `TP / (TP + FN)`.
    pub recall: f64,
    /// Total number of true examples for the class.
    pub support: u32,
}

/// Compute per-class precision and recall from a confusion matrix.
pub fn precision_recall_by_class(cm: &ConfusionMatrix) -> Vec<PerClassStats> {
    let k = cm.n_classes;
    let mut stats = Vec::with_capacity(k);
    for class_idx in 0..k {
        let tp = cm.get(class_idx, class_idx) as f64;
        let support = cm.row_sum(class_idx);
        let fn_ = support as f64 - tp;
        let fp: f64 = (0..k)
            .filter(|&i| i != class_idx)
            .map(|i| cm.get(i, class_idx) as f64)
            .sum();
        let precision = if tp + fp == 0.0 { 0.0 } else { tp / (tp + fp) };
        let recall = if tp + fn_ == 0.0 { 0.0 } else { tp / (tp + fn_) };
        stats.push(PerClassStats {
            precision,
            recall,
            support,
        });
    }
    stats
}

/// Compute overall accuracy from a confusion matrix.
pub fn accuracy(cm: &ConfusionMatrix) -> f64 {
    let total = cm.total();
    if total == 0 {
        return 0.0;
    }
    let correct: u32 = (0..cm.n_classes).map(|idx| cm.get(idx, idx)).sum();
    correct as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> ConfusionMatrix {
        ConfusionMatrix::from_pairs(
            3,
            [(0, 0), (0, 0), (1, 1), (1, 2), (2, 2), (2, 2), (2, 1)],
        )
    }

    #[test]
    fn counts_and_row_sums() {
        let cm = sample_matrix();
        assert_eq!(cm.rows(), vec![vec![2, 0, 0], vec![0, 1, 1], vec![0, 1, 2]]);
        assert_eq!(cm.row_sum(2), 3);
        assert_eq!(cm.total(), 7);
        assert_eq!(cm.max_count(), 2);
    }

    #[test]
    fn out_of_range_pairs_are_ignored() {
        let mut cm = ConfusionMatrix::new(2);
        cm.add(2, 0);
        cm.add(0, 5);
        assert_eq!(cm.total(), 0);
    }

    #[test]
    fn precision_recall_and_accuracy() {
        let cm = sample_matrix();
        let stats = precision_recall_by_class(&cm);
        assert_eq!(stats[0].precision, 1.0);
        assert_eq!(stats[0].recall, 1.0);
        assert_eq!(stats[1].precision, 0.5);
        assert_eq!(stats[1].recall, 0.5);
        assert!((stats[2].precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats[2].support, 3);
        assert!((accuracy(&cm) - 5.0 / 7.0).abs() < 1e-12);
        assert_eq!(accuracy(&ConfusionMatrix::new(3)), 0.0);
    }
}
