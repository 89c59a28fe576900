use serde::{Deserialize, Serialize};

/// Node of a binary decision tree. Node `0` is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node: samples with `feature <= threshold` go `left`.
    Split {
        feature_index: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding a class distribution.
    Leaf { proba: Vec<f64> },
}

/// Single tree of the forest, stored as a flat node list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf and return its class distribution.
    ///
    /// Returns `None` if the walk leaves the node list or does not terminate.
    pub fn leaf_proba(&self, features: &[f64]) -> Option<&[f64]> {
        let mut idx = 0usize;
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx)? {
                TreeNode::Leaf { proba } => return Some(proba),
                TreeNode::Split {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature_index).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
            }
        }
        None
    }

    /// Check child links point forward and leaves carry `n_classes` finite probabilities.
    pub fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature_index,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature_index >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature_index} (model has {n_features})"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { proba } => {
                    if proba.len() != n_classes {
                        return Err(format!(
                            "leaf {idx} has {} probabilities but expected {n_classes}",
                            proba.len()
                        ));
                    }
                    if proba.iter().any(|p| !p.is_finite() || *p < 0.0) {
                        return Err(format!("leaf {idx} has invalid probabilities"));
                    }
                }
            }
        }
        Ok(())
    }
}
