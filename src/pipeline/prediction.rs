//! Single-sample prediction: class, probabilities, and ranked feature importances.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::dataset::{ClassLabel, Dataset, FeatureVector, InvalidInputError};
use crate::ml::Classifier;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProbability {
    pub class_index: usize,
    pub class_name: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature_index: usize,
    pub feature_name: String,
    pub importance: f64,
}

/// Everything displayed after a prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub input: FeatureVector,
    pub predicted: ClassLabel,
    pub predicted_name: String,
    /// Canonical class order, not sorted by probability.
    pub probabilities: Vec<ClassProbability>,
    /// Sorted by descending importance; ties keep feature order.
    pub importances: Vec<FeatureImportance>,
}

impl PredictionResult {
    pub fn predicted_probability(&self) -> f64 {
        self.probabilities
            .get(self.predicted.index())
            .map(|entry| entry.probability)
            .unwrap_or(0.0)
    }
}

/// Run the model on one validated feature vector.
pub fn predict<M: Classifier + ?Sized>(
    model: &M,
    dataset: &Dataset,
    input: &FeatureVector,
) -> Result<PredictionResult, InvalidInputError> {
    input.validate()?;

    let predicted = ClassLabel::new(model.predict(input));
    let proba = model.predict_proba(input);
    let probabilities: Vec<ClassProbability> = dataset
        .class_names()
        .iter()
        .zip(proba)
        .enumerate()
        .map(|(class_index, (class_name, probability))| ClassProbability {
            class_index,
            class_name: class_name.clone(),
            probability,
        })
        .collect();
    let predicted_name = dataset.class_name(predicted).unwrap_or("unknown").to_string();
    let importances = rank_importances(dataset.feature_names(), model.feature_importances());

    tracing::debug!(
        "Predicted {predicted_name} for {:?} (p={:.3})",
        input.as_array(),
        probabilities
            .get(predicted.index())
            .map(|entry| entry.probability)
            .unwrap_or(0.0)
    );
    Ok(PredictionResult {
        input: *input,
        predicted,
        predicted_name,
        probabilities,
        importances,
    })
}

/// Same as [`predict`] for raw values, rejecting the wrong number of features.
pub fn predict_slice<M: Classifier + ?Sized>(
    model: &M,
    dataset: &Dataset,
    values: &[f64],
) -> Result<PredictionResult, InvalidInputError> {
    let input = FeatureVector::from_slice(values)?;
    predict(model, dataset, &input)
}

/// Pair importances with feature names and sort descending (stable for ties).
pub fn rank_importances(names: &[String], importances: &[f64]) -> Vec<FeatureImportance> {
    let mut ranked: Vec<FeatureImportance> = names
        .iter()
        .zip(importances)
        .enumerate()
        .map(|(feature_index, (name, &importance))| FeatureImportance {
            feature_index,
            feature_name: name.clone(),
            importance,
        })
        .collect();
    ranked.sort_by_key(|entry| Reverse(OrderedFloat(entry.importance)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_original_feature_order() {
        let names: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let ranked = rank_importances(&names, &[0.2, 0.4, 0.2, 0.2]);
        let order: Vec<&str> = ranked.iter().map(|e| e.feature_name.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn ranking_is_descending() {
        let names: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let ranked = rank_importances(&names, &[0.1, 0.05, 0.4, 0.45]);
        let indices: Vec<usize> = ranked.iter().map(|e| e.feature_index).collect();
        assert_eq!(indices, vec![3, 2, 0, 1]);
    }
}
