mod support;

use std::path::Path;

use irisview::app::{AppContext, StartupError};
use irisview::app_dirs::APP_DIR_NAME;
use irisview::config::{self, AppSettings, CONFIG_FILE_NAME};
use irisview::ml::ModelLoadError;
use support::irisview_env::IrisviewEnvGuard;
use tempfile::tempdir;

fn bundled_model() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("models/iris_rf.json")
}

#[test]
fn context_loads_from_config_file() {
    let home = tempdir().unwrap();
    let _env = IrisviewEnvGuard::set_config_home(home.path().to_path_buf());
    let config_path = config::config_path().unwrap();
    assert_eq!(
        config_path,
        home.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
    );
    std::fs::write(
        &config_path,
        format!(
            "model_path = {:?}\n[evaluation]\nseed = 42\ntest_fraction = 0.3\n",
            bundled_model().display().to_string()
        ),
    )
    .unwrap();

    let settings = config::load_or_default().unwrap();
    assert_eq!(settings.model_path, bundled_model());
    let context = AppContext::load(&settings).unwrap();
    let defaults = context.default_input();
    assert!((defaults.petal_length - 3.758).abs() < 1e-3);
    assert_eq!(context.evaluate().confusion.total(), 45);
}

#[test]
fn corrupt_model_fails_startup() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("broken.json");
    std::fs::write(&model_path, "{ not json").unwrap();
    let settings = AppSettings {
        model_path,
        ..AppSettings::default()
    };
    let err = AppContext::load(&settings).unwrap_err();
    assert!(matches!(
        err,
        StartupError::Model(ModelLoadError::Parse { .. })
    ));
}

#[test]
fn external_dataset_copy_is_honored() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("iris.csv");
    std::fs::write(&csv_path, irisview::dataset::BUNDLED_CSV).unwrap();
    let settings = AppSettings {
        model_path: bundled_model(),
        dataset_path: Some(csv_path),
        ..AppSettings::default()
    };
    let context = AppContext::load(&settings).unwrap();
    assert_eq!(context.dataset().len(), 150);
}
