//! Held-out evaluation: seeded split, confusion matrix, and one-vs-rest ROC curves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, train_test_split};
use crate::ml::Classifier;
use crate::ml::metrics::{ConfusionMatrix, PerClassStats, accuracy, precision_recall_by_class};
use crate::ml::roc::{RocCurve, RocError, RocPoint, roc_curve};

/// Seed used for the reference split.
pub const DEFAULT_SPLIT_SEED: u64 = 42;
/// Share of samples held out for testing.
pub const DEFAULT_TEST_FRACTION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    pub seed: u64,
    pub test_fraction: f64,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SPLIT_SEED,
            test_fraction: DEFAULT_TEST_FRACTION,
        }
    }
}

impl EvaluationOptions {
    /// Replace an unusable test fraction with the default.
    pub fn normalized(mut self) -> Self {
        if !self.test_fraction.is_finite() || self.test_fraction <= 0.0 || self.test_fraction >= 1.0
        {
            self.test_fraction = DEFAULT_TEST_FRACTION;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSummary {
    pub seed: u64,
    pub train_len: usize,
    pub test_len: usize,
    /// Test rows per class, canonical class order.
    pub test_class_counts: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// ROC outcome for one class against the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClassRoc {
    Defined {
        class_index: usize,
        class_name: String,
        curve: RocCurve,
    },
    /// The test split lacks positives or negatives for this class.
    Undefined {
        class_index: usize,
        class_name: String,
        reason: RocError,
    },
}

impl ClassRoc {
    pub fn class_index(&self) -> usize {
        match self {
            ClassRoc::Defined { class_index, .. } | ClassRoc::Undefined { class_index, .. } => {
                *class_index
            }
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            ClassRoc::Defined { class_name, .. } | ClassRoc::Undefined { class_name, .. } => {
                class_name
            }
        }
    }

    /// Area under the curve, or `None` when undefined.
    pub fn auc(&self) -> Option<f64> {
        match self {
            ClassRoc::Defined { curve, .. } => Some(curve.auc),
            ClassRoc::Undefined { .. } => None,
        }
    }

    pub fn points(&self) -> &[RocPoint] {
        match self {
            ClassRoc::Defined { curve, .. } => &curve.points,
            ClassRoc::Undefined { .. } => &[],
        }
    }
}

/// Non-fatal issues found while evaluating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EvaluationWarning {
    RocUndefined { class_name: String, reason: RocError },
}

impl fmt::Display for EvaluationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationWarning::RocUndefined { class_name, reason } => {
                write!(f, "ROC/AUC for {class_name} is undefined: {reason} in the test split")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub split: SplitSummary,
    /// Rows are true classes, columns predicted classes.
    pub confusion: ConfusionMatrix,
    pub accuracy: f64,
    pub per_class: Vec<PerClassStats>,
    pub roc: Vec<ClassRoc>,
    pub warnings: Vec<EvaluationWarning>,
}

/// Score the model on the seeded held-out split of `dataset`.
///
/// Deterministic: the same options and artifact always yield an identical result.
pub fn evaluate<M: Classifier + ?Sized>(
    model: &M,
    dataset: &Dataset,
    options: &EvaluationOptions,
) -> EvaluationResult {
    let options = options.normalized();
    let n_classes = dataset.class_names().len();
    let split = train_test_split(dataset.len(), options.test_fraction, options.seed);

    let test: Vec<_> = split
        .test
        .iter()
        .map(|&idx| dataset.samples()[idx])
        .collect();
    let truths: Vec<usize> = test.iter().map(|sample| sample.label.index()).collect();
    let predictions: Vec<usize> = test
        .iter()
        .map(|sample| model.predict(&sample.features))
        .collect();
    let scores: Vec<Vec<f64>> = test
        .iter()
        .map(|sample| model.predict_proba(&sample.features))
        .collect();

    let confusion =
        ConfusionMatrix::from_pairs(n_classes, truths.iter().copied().zip(predictions));

    let mut warnings = Vec::new();
    let roc: Vec<ClassRoc> = dataset
        .class_names()
        .iter()
        .enumerate()
        .map(|(class_index, class_name)| {
            let labels: Vec<bool> = truths.iter().map(|&truth| truth == class_index).collect();
            let class_scores: Vec<f64> = scores
                .iter()
                .map(|row| row.get(class_index).copied().unwrap_or(0.0))
                .collect();
            match roc_curve(&class_scores, &labels) {
                Ok(curve) => ClassRoc::Defined {
                    class_index,
                    class_name: class_name.clone(),
                    curve,
                },
                Err(reason) => {
                    tracing::warn!("ROC undefined for class {class_name}: {reason}");
                    warnings.push(EvaluationWarning::RocUndefined {
                        class_name: class_name.clone(),
                        reason,
                    });
                    ClassRoc::Undefined {
                        class_index,
                        class_name: class_name.clone(),
                        reason,
                    }
                }
            }
        })
        .collect();

    let accuracy = accuracy(&confusion);
    tracing::info!(
        "Evaluated {} test samples (seed {}): accuracy {:.4}",
        test.len(),
        options.seed,
        accuracy
    );
    EvaluationResult {
        split: SplitSummary {
            seed: options.seed,
            train_len: split.train.len(),
            test_len: split.test.len(),
            test_class_counts: dataset.class_counts(split.test.iter().copied()),
            test_indices: split.test,
        },
        per_class: precision_recall_by_class(&confusion),
        confusion,
        accuracy,
        roc,
        warnings,
    }
}
