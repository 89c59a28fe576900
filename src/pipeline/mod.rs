//! Pure pipelines over the shared dataset and model.

pub mod evaluation;
pub mod prediction;

pub use evaluation::{
    ClassRoc, EvaluationOptions, EvaluationResult, EvaluationWarning, SplitSummary, evaluate,
};
pub use prediction::{
    ClassProbability, FeatureImportance, PredictionResult, predict, predict_slice,
    rank_importances,
};
