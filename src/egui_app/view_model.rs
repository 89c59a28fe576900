//! Helpers to convert pipeline results into display strings and fractions.

use crate::dataset::{Dataset, Feature, FeatureVector};
use crate::pipeline::{ClassRoc, PredictionResult};

/// Uppercase the first character of a class name.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn prediction_headline(result: &PredictionResult) -> String {
    format!("Prediction: {}", capitalize(&result.predicted_name))
}

/// Legend entry for a ROC curve, e.g. `setosa (AUC=1.00)`.
pub fn roc_legend(roc: &ClassRoc) -> String {
    match roc.auc() {
        Some(auc) => format!("{} (AUC={auc:.2})", roc.class_name()),
        None => format!("{} (AUC=n/a)", roc.class_name()),
    }
}

/// Fill fraction for a heatmap cell, in `[0, 1]`.
pub fn heat_fraction(count: u32, max_count: u32) -> f32 {
    if max_count == 0 {
        return 0.0;
    }
    (count as f32 / max_count as f32).clamp(0.0, 1.0)
}

/// Importance bars labelled the same way as the sliders, in ranked order.
pub fn importance_rows(result: &PredictionResult) -> Vec<(String, f64)> {
    result
        .importances
        .iter()
        .map(|entry| {
            let label = Feature::from_index(entry.feature_index)
                .map(Feature::label)
                .unwrap_or(entry.feature_name.as_str());
            (label.to_string(), entry.importance)
        })
        .collect()
}

/// Label/value pairs for the input expander.
pub fn input_rows(input: &FeatureVector) -> Vec<(&'static str, String)> {
    Feature::ALL
        .iter()
        .map(|&feature| (feature.label(), format!("{:.2}", input.get(feature))))
        .collect()
}

/// One row of the dataset explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetRow {
    pub values: [String; 4],
    pub species: String,
}

pub fn dataset_rows(dataset: &Dataset) -> Vec<DatasetRow> {
    dataset
        .samples()
        .iter()
        .map(|sample| DatasetRow {
            values: sample.features.as_array().map(|value| format!("{value:.1}")),
            species: dataset
                .class_name(sample.label)
                .unwrap_or("unknown")
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ClassLabel;
    use crate::ml::roc::{RocCurve, RocError};
    use crate::pipeline::FeatureImportance;

    fn importance(feature_index: usize, feature_name: &str, importance: f64) -> FeatureImportance {
        FeatureImportance {
            feature_index,
            feature_name: feature_name.to_string(),
            importance,
        }
    }

    #[test]
    fn importance_rows_use_slider_labels() {
        let result = PredictionResult {
            input: FeatureVector::new(5.1, 3.5, 1.4, 0.2),
            predicted: ClassLabel::new(0),
            predicted_name: "setosa".to_string(),
            probabilities: Vec::new(),
            importances: vec![
                importance(3, "petal_width", 0.5),
                importance(0, "sepal_length", 0.3),
                importance(7, "extra", 0.2),
            ],
        };
        assert_eq!(
            importance_rows(&result),
            vec![
                ("Petal width (cm)".to_string(), 0.5),
                ("Sepal length (cm)".to_string(), 0.3),
                ("extra".to_string(), 0.2),
            ]
        );
    }

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize("versicolor"), "Versicolor");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn roc_legend_reports_undefined_auc() {
        let defined = ClassRoc::Defined {
            class_index: 0,
            class_name: "setosa".to_string(),
            curve: RocCurve {
                points: Vec::new(),
                auc: 0.987,
            },
        };
        let undefined = ClassRoc::Undefined {
            class_index: 1,
            class_name: "versicolor".to_string(),
            reason: RocError::NoPositives,
        };
        assert_eq!(roc_legend(&defined), "setosa (AUC=0.99)");
        assert_eq!(roc_legend(&undefined), "versicolor (AUC=n/a)");
    }

    #[test]
    fn heat_fraction_is_bounded() {
        assert_eq!(heat_fraction(0, 0), 0.0);
        assert_eq!(heat_fraction(5, 10), 0.5);
        assert_eq!(heat_fraction(12, 10), 1.0);
    }

    #[test]
    fn dataset_rows_cover_every_sample() {
        let dataset = Dataset::load().unwrap();
        let rows = dataset_rows(&dataset);
        assert_eq!(rows.len(), 150);
        assert_eq!(rows[0].values[0], "5.1");
        assert_eq!(rows[0].species, "setosa");
        assert_eq!(rows[149].species, "virginica");
    }

    #[test]
    fn input_rows_use_feature_labels() {
        let rows = input_rows(&FeatureVector::new(5.1, 3.5, 1.4, 0.2));
        assert_eq!(rows[0], ("Sepal length (cm)", "5.10".to_string()));
        assert_eq!(rows.len(), 4);
    }
}
