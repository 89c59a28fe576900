use std::hint::black_box;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use irisview::dataset::{Dataset, FeatureVector};
use irisview::ml::ForestModel;
use irisview::pipeline::{self, EvaluationOptions};

fn load() -> (Dataset, ForestModel) {
    let dataset = Dataset::load().expect("bundled dataset");
    let model = ForestModel::load_json(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("models/iris_rf.json"),
    )
    .expect("bundled model");
    (dataset, model)
}

fn bench_predict(c: &mut Criterion) {
    let (dataset, model) = load();
    let input = FeatureVector::new(5.9, 3.0, 4.2, 1.3);
    c.bench_function("predict_single", |b| {
        b.iter(|| pipeline::predict(&model, &dataset, black_box(&input)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let (dataset, model) = load();
    for fraction in [0.2, 0.3, 0.5] {
        let options = EvaluationOptions {
            test_fraction: fraction,
            ..EvaluationOptions::default()
        };
        c.bench_with_input(
            BenchmarkId::new("evaluate", fraction),
            &options,
            |b, options| b.iter(|| pipeline::evaluate(&model, &dataset, black_box(options))),
        );
    }
}

criterion_group!(benches, bench_predict, bench_evaluate);
criterion_main!(benches);
