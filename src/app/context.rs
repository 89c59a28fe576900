use thiserror::Error;

use crate::config::AppSettings;
use crate::dataset::{
    DataUnavailableError, Dataset, FEATURE_COUNT, FeatureRange, FeatureVector, InvalidInputError,
};
use crate::ml::{Classifier, ForestModel, ModelLoadError};
use crate::pipeline::{self, EvaluationOptions, EvaluationResult, PredictionResult};

/// Fatal failures while assembling the shared context.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Data(#[from] DataUnavailableError),
    #[error(transparent)]
    Model(#[from] ModelLoadError),
}

/// Dataset, model, and derived statistics shared by every view.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct AppContext {
    settings: AppSettings,
    dataset: Dataset,
    model: ForestModel,
    ranges: [FeatureRange; FEATURE_COUNT],
}

impl AppContext {
    /// Load the dataset and model named by `settings` and check they agree.
    pub fn load(settings: &AppSettings) -> Result<Self, StartupError> {
        let dataset = match settings.dataset_path.as_deref() {
            Some(path) => Dataset::from_path(path)?,
            None => Dataset::load()?,
        };
        let model = ForestModel::load_json(&settings.model_path)?;
        Self::from_parts(settings.clone(), dataset, model)
    }

    /// Assemble a context from already-loaded parts.
    pub fn from_parts(
        settings: AppSettings,
        dataset: Dataset,
        model: ForestModel,
    ) -> Result<Self, StartupError> {
        check_compatible(&dataset, &model)?;
        let ranges = dataset.feature_ranges();
        tracing::info!(
            "Context ready: {} samples, {} classes, {} trees",
            dataset.len(),
            dataset.class_names().len(),
            model.trees.len()
        );
        Ok(Self {
            settings,
            dataset,
            model,
            ranges,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn model(&self) -> &ForestModel {
        &self.model
    }

    /// Observed min/max/mean per feature, in feature order.
    pub fn ranges(&self) -> &[FeatureRange; FEATURE_COUNT] {
        &self.ranges
    }

    /// Per-feature means, used as the initial slider positions.
    pub fn default_input(&self) -> FeatureVector {
        FeatureVector::from(self.ranges.map(|range| range.mean))
    }

    pub fn predict(&self, input: &FeatureVector) -> Result<PredictionResult, InvalidInputError> {
        pipeline::predict(&self.model, &self.dataset, input)
    }

    /// Evaluate with the configured split options.
    pub fn evaluate(&self) -> EvaluationResult {
        self.evaluate_with(&self.settings.evaluation)
    }

    pub fn evaluate_with(&self, options: &EvaluationOptions) -> EvaluationResult {
        pipeline::evaluate(&self.model, &self.dataset, options)
    }
}

fn check_compatible(dataset: &Dataset, model: &ForestModel) -> Result<(), ModelLoadError> {
    if model.classes() != dataset.class_names() {
        return Err(ModelLoadError::Incompatible {
            reason: format!(
                "model classes {:?} differ from dataset classes {:?}",
                model.classes(),
                dataset.class_names()
            ),
        });
    }
    if model.feature_names().len() != dataset.feature_names().len() {
        return Err(ModelLoadError::Incompatible {
            reason: format!(
                "model expects {} features, dataset has {}",
                model.feature_names().len(),
                dataset.feature_names().len()
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::forest::{DecisionTree, TreeNode};
    use std::path::PathBuf;

    fn stump_model(classes: &[&str]) -> ForestModel {
        let n = classes.len();
        let onehot = |hot: usize| (0..n).map(|i| if i == hot { 1.0 } else { 0.0 }).collect();
        ForestModel {
            model_version: 1,
            model_id: Some("test".to_string()),
            feature_names: Dataset::load().unwrap().feature_names().to_vec(),
            classes: classes.iter().map(|name| name.to_string()).collect(),
            feature_importances: vec![0.0, 0.0, 0.5, 0.5],
            trees: vec![DecisionTree {
                nodes: vec![
                    TreeNode::Split {
                        feature_index: 2,
                        threshold: 2.45,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Leaf { proba: onehot(0) },
                    TreeNode::Leaf {
                        proba: onehot(n - 1),
                    },
                ],
            }],
        }
    }

    #[test]
    fn default_input_is_feature_means() {
        let dataset = Dataset::load().unwrap();
        let ctx = AppContext::from_parts(
            AppSettings::default(),
            dataset,
            stump_model(&["setosa", "versicolor", "virginica"]),
        )
        .unwrap();
        let input = ctx.default_input();
        let means = ctx.ranges().map(|range| range.mean);
        assert_eq!(input.as_array(), means);
        assert!((input.sepal_length - 5.843).abs() < 1e-3);
    }

    #[test]
    fn mismatched_classes_are_incompatible() {
        let dataset = Dataset::load().unwrap();
        let err = AppContext::from_parts(
            AppSettings::default(),
            dataset,
            stump_model(&["cat", "dog", "bird"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StartupError::Model(ModelLoadError::Incompatible { .. })
        ));
    }

    #[test]
    fn missing_model_is_fatal() {
        let settings = AppSettings {
            model_path: PathBuf::from("does/not/exist.json"),
            ..AppSettings::default()
        };
        let err = AppContext::load(&settings).unwrap_err();
        assert!(matches!(err, StartupError::Model(ModelLoadError::Missing { .. })));
    }

    #[test]
    fn missing_dataset_override_is_fatal() {
        let settings = AppSettings {
            dataset_path: Some(PathBuf::from("does/not/exist.csv")),
            ..AppSettings::default()
        };
        let err = AppContext::load(&settings).unwrap_err();
        assert!(matches!(
            err,
            StartupError::Data(DataUnavailableError::Missing { .. })
        ));
    }

    #[test]
    fn predict_and_evaluate_delegate_to_pipelines() {
        let ctx = AppContext::from_parts(
            AppSettings::default(),
            Dataset::load().unwrap(),
            stump_model(&["setosa", "versicolor", "virginica"]),
        )
        .unwrap();
        let result = ctx
            .predict(&FeatureVector::new(5.1, 3.5, 1.4, 0.2))
            .unwrap();
        assert_eq!(result.predicted_name, "setosa");
        let eval = ctx.evaluate();
        assert_eq!(eval.confusion.total(), 45);
        assert_eq!(eval, ctx.evaluate());
    }
}
