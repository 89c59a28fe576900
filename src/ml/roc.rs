//! One-vs-rest ROC curves and trapezoidal AUC.

use serde::Serialize;
use thiserror::Error;

/// Reasons a ROC curve cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
pub enum RocError {
    #[error("no samples to score")]
    Empty,
    #[error("{scores} scores but {labels} labels")]
    LengthMismatch { scores: usize, labels: usize },
    #[error("no positive samples")]
    NoPositives,
    #[error("no negative samples")]
    NoNegatives,
}

/// Point on a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    /// Score threshold; samples scoring `>= threshold` are predicted positive.
    /// The (0, 0) and (1, 1) anchors use infinite thresholds and omit the field when
    /// serialized.
    #[serde(skip_serializing_if = "is_anchor_threshold")]
    pub threshold: f64,
    /// `FP / (FP + TN)`.
    pub fpr: f64,
    /// `TP / (TP + FN)`.
    pub tpr: f64,
}

/// ROC curve ordered by ascending false positive rate, from (0, 0) to (1, 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    pub auc: f64,
}

/// Compute the ROC curve for binary `labels` given positive-class `scores`.
///
/// Samples are swept in descending score order with one threshold per distinct score,
/// so equal scores never split across points. The (0, 0) and (1, 1) anchors appear
/// exactly once.
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve, RocError> {
    if scores.len() != labels.len() {
        return Err(RocError::LengthMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }
    if scores.is_empty() {
        return Err(RocError::Empty);
    }
    let total_pos = labels.iter().filter(|&&label| label).count();
    let total_neg = labels.len() - total_pos;
    if total_pos == 0 {
        return Err(RocError::NoPositives);
    }
    if total_neg == 0 {
        return Err(RocError::NoNegatives);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let p = total_pos as f64;
    let n = total_neg as f64;
    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0usize;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        let point = RocPoint {
            threshold,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        };
        if !same_rates(points.last(), &point) {
            points.push(point);
        }
    }

    let end = RocPoint {
        threshold: f64::NEG_INFINITY,
        fpr: 1.0,
        tpr: 1.0,
    };
    if !same_rates(points.last(), &end) {
        points.push(end);
    }

    // Stable: points sharing an FPR keep sweep order.
    points.sort_by(|a, b| a.fpr.total_cmp(&b.fpr));
    let auc = trapezoidal_auc(&points);
    Ok(RocCurve { points, auc })
}

fn is_anchor_threshold(threshold: &f64) -> bool {
    threshold.is_infinite()
}

fn same_rates(last: Option<&RocPoint>, point: &RocPoint) -> bool {
    last.is_some_and(|last| last.fpr == point.fpr && last.tpr == point.tpr)
}

/// Trapezoidal area under a curve already ordered by ascending FPR, clamped to `[0, 1]`.
pub fn trapezoidal_auc(points: &[RocPoint]) -> f64 {
    let area: f64 = points
        .windows(2)
        .map(|pair| (pair[1].fpr - pair[0].fpr) * (pair[1].tpr + pair[0].tpr) / 2.0)
        .sum();
    area.clamp(0.0, 1.0)
}
