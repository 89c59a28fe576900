//! Deployment smoke check: dataset, model artifact, and one prediction.

use std::path::PathBuf;

use irisview::config::{self, AppSettings};
use irisview::dataset::Dataset;
use irisview::ml::ForestModel;
use irisview::pipeline;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool, String> {
    let settings = parse_args(std::env::args().skip(1).collect())?;
    println!("Testing Iris Species Predictor");
    println!("{}", "=".repeat(50));

    let mut dataset = None;
    let mut model = None;
    let mut checks: Vec<(&str, bool)> = Vec::new();

    println!("\nRunning Data Loading...");
    let loaded = match settings.dataset_path.as_deref() {
        Some(path) => Dataset::from_path(path),
        None => Dataset::load(),
    };
    checks.push(("Data Loading", report(loaded.map(|data| {
        println!(
            "  ok: {} samples, {} features",
            data.len(),
            data.feature_names().len()
        );
        println!("  ok: classes {:?}", data.class_names());
        dataset = Some(data);
    }))));

    println!("\nRunning Model Loading...");
    checks.push((
        "Model Loading",
        report(ForestModel::load_json(&settings.model_path).map(|loaded| {
            println!(
                "  ok: {} trees from {}",
                loaded.trees.len(),
                settings.model_path.display()
            );
            model = Some(loaded);
        })),
    ));

    println!("\nRunning Prediction...");
    let prediction = match (&dataset, &model) {
        (Some(dataset), Some(model)) => match dataset.samples().first() {
            Some(sample) => pipeline::predict(model, dataset, &sample.features)
                .map(|result| println!("  ok: first sample predicted as {}", result.predicted_name))
                .map_err(|err| err.to_string()),
            None => Err("dataset has no samples".to_string()),
        },
        _ => Err("skipped: data or model unavailable".to_string()),
    };
    checks.push(("Prediction", report(prediction)));

    let total = checks.len();
    let passed = checks.iter().filter(|(_, ok)| *ok).count();
    for (name, ok) in &checks {
        if !ok {
            println!("{name} failed!");
        }
    }
    println!("\n{}", "=".repeat(50));
    println!("Results: {passed}/{total} checks passed");
    Ok(passed == total)
}

fn report<E: std::fmt::Display>(outcome: Result<(), E>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(err) => {
            println!("  error: {err}");
            false
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<AppSettings, String> {
    let mut settings = config::load_or_default().unwrap_or_else(|err| {
        eprintln!("Using default settings: {err}");
        AppSettings::default()
    });
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                settings.model_path = PathBuf::from(value);
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(settings)
}

fn help_text() -> String {
    [
        "irisview-smoke",
        "",
        "Usage:",
        "  irisview-smoke [--model <model.json>]",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use irisview::app_dirs::{APP_DIR_NAME, CONFIG_HOME_ENV};
    use irisview::config::CONFIG_FILE_NAME;
    use tempfile::tempdir;

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let home = tempdir().unwrap();
        let app_dir = home.path().join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join(CONFIG_FILE_NAME), "model_path = [").unwrap();
        // SAFETY: the only test in this binary touching the environment.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, home.path());
        }
        let settings = parse_args(vec!["--model".to_string(), "alt.json".to_string()]).unwrap();
        // SAFETY: as above.
        unsafe {
            std::env::remove_var(CONFIG_HOME_ENV);
        }
        assert_eq!(settings.model_path, PathBuf::from("alt.json"));
        assert_eq!(settings.evaluation, AppSettings::default().evaluation);
    }
}
