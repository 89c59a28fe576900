use std::path::Path;

use serde::{Deserialize, Serialize};

use super::tree::DecisionTree;
use crate::dataset::FeatureVector;
use crate::ml::classifier::Classifier;
use crate::ml::errors::ModelLoadError;

/// Location of the bundled artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/iris_rf.json";

const IMPORTANCE_SUM_TOLERANCE: f64 = 1e-3;

/// Random forest classifier loaded from a JSON artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    /// Artifact format version.
    pub model_version: i64,
    #[serde(default)]
    pub model_id: Option<String>,
    /// Ordered feature names the trees index into.
    pub feature_names: Vec<String>,
    /// Ordered class names; leaf distributions follow this order.
    pub classes: Vec<String>,
    /// Mean impurity decrease per feature, normalized at training time.
    pub feature_importances: Vec<f64>,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Validate structural invariants of the forest.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_version != 1 {
            return Err(format!(
                "Unsupported model_version {} (expected 1)",
                self.model_version
            ));
        }
        if self.classes.len() < 2 {
            return Err("Model must contain at least 2 classes".to_string());
        }
        if self.feature_names.is_empty() {
            return Err("Model must name at least one feature".to_string());
        }
        if self.feature_importances.len() != self.feature_names.len() {
            return Err(format!(
                "feature_importances has {} entries but expected {}",
                self.feature_importances.len(),
                self.feature_names.len()
            ));
        }
        if self
            .feature_importances
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err("feature_importances must be finite and non-negative".to_string());
        }
        let importance_sum: f64 = self.feature_importances.iter().sum();
        if (importance_sum - 1.0).abs() > IMPORTANCE_SUM_TOLERANCE {
            return Err(format!(
                "feature_importances sum to {importance_sum:.4} (expected 1.0)"
            ));
        }
        if self.trees.is_empty() {
            return Err("Model has no trees".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len(), self.classes.len())
                .map_err(|reason| format!("Tree {tree_idx}: {reason}"))?;
        }
        Ok(())
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelLoadError> {
        if !path.is_file() {
            return Err(ModelLoadError::Missing {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate().map_err(|reason| ModelLoadError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::info!(
            "Loaded model {} ({} trees, {} classes) from {}",
            model.model_id.as_deref().unwrap_or("unnamed"),
            model.trees.len(),
            model.classes.len(),
            path.display()
        );
        Ok(model)
    }

    /// Average the leaf distributions of every tree for raw feature values.
    pub fn predict_proba_raw(&self, features: &[f64]) -> Vec<f64> {
        let n_classes = self.classes.len();
        let mut sums = vec![0.0f64; n_classes];
        let mut voters = 0usize;
        for tree in &self.trees {
            let Some(proba) = tree.leaf_proba(features) else {
                continue;
            };
            for (sum, p) in sums.iter_mut().zip(proba) {
                *sum += p;
            }
            voters += 1;
        }
        normalize(sums, voters)
    }
}

fn normalize(mut sums: Vec<f64>, voters: usize) -> Vec<f64> {
    if sums.is_empty() {
        return sums;
    }
    let uniform = 1.0 / sums.len() as f64;
    if voters == 0 {
        return vec![uniform; sums.len()];
    }
    let total: f64 = sums.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![uniform; sums.len()];
    }
    for value in &mut sums {
        *value /= total;
    }
    sums
}

impl Classifier for ForestModel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        self.predict_proba_raw(&features.as_array())
    }

    fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }
}
