//! Developer utility to score the classifier on the held-out split.

use std::path::PathBuf;

use irisview::app::AppContext;
use irisview::config::{self, AppSettings};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    model_path: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
    seed: Option<u64>,
    test_fraction: Option<f64>,
    json: bool,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let settings = apply_options(base_settings(), &options);
    let context = AppContext::load(&settings).map_err(|err| err.to_string())?;
    let result = context.evaluate();

    if options.json {
        let text = serde_json::to_string_pretty(&result).map_err(|err| err.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let classes = context.dataset().class_names();
    println!(
        "split: seed={} train={} test={}",
        result.split.seed, result.split.train_len, result.split.test_len
    );
    println!("accuracy: {:.4}", result.accuracy);
    for (idx, stats) in result.per_class.iter().enumerate() {
        println!(
            "class {:>2} {:<12}  precision={:.3}  recall={:.3}  support={}",
            idx, classes[idx], stats.precision, stats.recall, stats.support
        );
    }
    println!("confusion matrix (rows=true, cols=pred):");
    for row in result.confusion.rows() {
        let line: String = row.iter().map(|count| format!("{count:6}")).collect();
        println!("{line}");
    }
    println!("one-vs-rest AUC:");
    for roc in &result.roc {
        match roc.auc() {
            Some(auc) => println!("- {:<12} {auc:.4}", roc.class_name()),
            None => println!("- {:<12} n/a", roc.class_name()),
        }
    }
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}

fn base_settings() -> AppSettings {
    config::load_or_default().unwrap_or_else(|err| {
        eprintln!("Using default settings: {err}");
        AppSettings::default()
    })
}

fn apply_options(mut settings: AppSettings, options: &CliOptions) -> AppSettings {
    if let Some(path) = &options.model_path {
        settings.model_path = path.clone();
    }
    if let Some(path) = &options.dataset_path {
        settings.dataset_path = Some(path.clone());
    }
    if let Some(seed) = options.seed {
        settings.evaluation.seed = seed;
    }
    if let Some(fraction) = options.test_fraction {
        settings.evaluation.test_fraction = fraction;
    }
    settings
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                options.model_path = Some(PathBuf::from(value));
            }
            "--dataset" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--dataset requires a value".to_string())?;
                options.dataset_path = Some(PathBuf::from(value));
            }
            "--seed" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--seed requires a value".to_string())?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            "--test-fraction" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--test-fraction requires a value".to_string())?;
                let fraction = value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid --test-fraction value: {value}"))?;
                if !(fraction > 0.0 && fraction < 1.0) {
                    return Err(format!("--test-fraction must be in (0, 1), got {value}"));
                }
                options.test_fraction = Some(fraction);
            }
            "--json" => options.json = true,
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "irisview-eval",
        "",
        "Usage:",
        "  irisview-eval [options]",
        "",
        "Options:",
        "  --model <model.json>     Classifier artifact (default: from config).",
        "  --dataset <iris.csv>     Reference CSV (default: bundled set).",
        "  --seed <n>               Split seed (default: 42).",
        "  --test-fraction <f>      Held-out share in (0, 1) (default: 0.3).",
        "  --json                   Print the full result as JSON.",
    ]
    .join("\n")
}
