use std::path::{Path, PathBuf};

use irisview::dataset::{Dataset, FeatureVector, InvalidInputError};
use irisview::ml::{Classifier, ForestModel, argmax};
use irisview::pipeline::{self, EvaluationOptions};

fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models/iris_rf.json")
}

fn load() -> (Dataset, ForestModel) {
    let dataset = Dataset::load().expect("bundled dataset");
    let model = ForestModel::load_json(&bundled_model_path()).expect("bundled model");
    (dataset, model)
}

fn assert_distribution(proba: &[f64]) {
    assert_eq!(proba.len(), 3);
    assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)), "{proba:?}");
    let sum: f64 = proba.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6, "sum {sum}");
}

#[test]
fn probabilities_are_distributions_for_every_sample() {
    let (dataset, model) = load();
    for sample in dataset.samples() {
        assert_distribution(&model.predict_proba(&sample.features));
    }
    let minimum = FeatureVector::from(dataset.feature_ranges().map(|range| range.min));
    assert_distribution(&model.predict_proba(&minimum));
}

#[test]
fn predict_is_argmax_of_probabilities() {
    let (dataset, model) = load();
    for sample in dataset.samples() {
        let proba = model.predict_proba(&sample.features);
        assert_eq!(model.predict(&sample.features), argmax(&proba));
    }
}

#[test]
fn importances_are_ranked_and_normalized() {
    let (dataset, model) = load();
    let result = pipeline::predict(&model, &dataset, &FeatureVector::new(6.0, 3.0, 4.5, 1.5))
        .expect("valid input");
    assert_eq!(result.importances.len(), 4);
    assert!(result.importances.iter().all(|entry| entry.importance >= 0.0));
    let sum: f64 = result.importances.iter().map(|entry| entry.importance).sum();
    assert!((sum - 1.0).abs() < 1e-3);
    assert!(
        result
            .importances
            .windows(2)
            .all(|pair| pair[0].importance >= pair[1].importance)
    );
    assert_eq!(result.importances[0].feature_name, "petal_width");
}

#[test]
fn classic_setosa_flower_is_setosa() {
    let (dataset, model) = load();
    let result = pipeline::predict(&model, &dataset, &FeatureVector::new(5.1, 3.5, 1.4, 0.2))
        .expect("valid input");
    assert_eq!(result.predicted_name, "setosa");
    let names: Vec<&str> = result
        .probabilities
        .iter()
        .map(|entry| entry.class_name.as_str())
        .collect();
    assert_eq!(names, ["setosa", "versicolor", "virginica"]);
    let best = result.predicted_probability();
    assert!(result.probabilities.iter().all(|entry| entry.probability <= best));
}

#[test]
fn evaluation_matches_split_and_is_deterministic() {
    let (dataset, model) = load();
    let options = EvaluationOptions::default();
    let first = pipeline::evaluate(&model, &dataset, &options);
    let second = pipeline::evaluate(&model, &dataset, &options);
    assert_eq!(first, second);

    assert_eq!(first.split.test_len, 45);
    assert_eq!(first.split.train_len, 105);
    assert_eq!(first.confusion.total(), 45);
    for (class_idx, &count) in first.split.test_class_counts.iter().enumerate() {
        assert_eq!(first.confusion.row_sum(class_idx) as usize, count);
    }
    assert!(first.accuracy >= 0.9, "accuracy {}", first.accuracy);
    for roc in &first.roc {
        if let Some(auc) = roc.auc() {
            assert!((0.0..=1.0).contains(&auc));
        }
    }
}

#[test]
fn different_seed_changes_the_split() {
    let (dataset, model) = load();
    let base = pipeline::evaluate(&model, &dataset, &EvaluationOptions::default());
    let other = pipeline::evaluate(
        &model,
        &dataset,
        &EvaluationOptions {
            seed: 7,
            ..EvaluationOptions::default()
        },
    );
    assert_eq!(other.split.test_len, 45);
    assert_ne!(base.split.test_indices, other.split.test_indices);
}

#[test]
fn degenerate_split_reports_undefined_auc() {
    let (dataset, model) = load();
    let result = pipeline::evaluate(
        &model,
        &dataset,
        &EvaluationOptions {
            seed: 42,
            test_fraction: 0.005,
        },
    );
    assert_eq!(result.split.test_len, 1);
    assert_eq!(result.split.train_len, 149);
    assert_eq!(result.warnings.len(), 3);
    assert!(result.roc.iter().all(|roc| roc.auc().is_none()));
    assert_eq!(result.accuracy, 1.0);
}

#[test]
fn malformed_inputs_are_rejected() {
    let (dataset, model) = load();
    assert!(matches!(
        pipeline::predict_slice(&model, &dataset, &[5.1, 3.5, 1.4]),
        Err(InvalidInputError::Arity {
            expected: 4,
            actual: 3
        })
    ));
    assert!(matches!(
        pipeline::predict(
            &model,
            &dataset,
            &FeatureVector::new(5.1, f64::NAN, 1.4, 0.2)
        ),
        Err(InvalidInputError::NonFinite { .. })
    ));
}
