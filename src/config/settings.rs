use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ml::forest::DEFAULT_MODEL_PATH;
use crate::pipeline::EvaluationOptions;

const DEFAULT_SLIDER_STEP: f64 = 0.1;
const DEFAULT_LOG_FILTER: &str = "info";

/// Settings stored in `config.toml`.
///
/// Config keys (TOML): `model_path`, `dataset_path`, `log_filter`, `evaluation`, `ui`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Classifier artifact, relative to the working directory unless absolute.
    pub model_path: PathBuf,
    /// External copy of the reference CSV; the bundled set is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_filter: String,
    pub evaluation: EvaluationOptions,
    pub ui: UiSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            dataset_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            evaluation: EvaluationOptions::default(),
            ui: UiSettings::default(),
        }
    }
}

impl AppSettings {
    pub(crate) fn normalized(mut self) -> Self {
        self.evaluation = self.evaluation.normalized();
        self.ui = self.ui.normalized();
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
        if self.model_path.as_os_str().is_empty() {
            self.model_path = PathBuf::from(DEFAULT_MODEL_PATH);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Increment applied by the feature sliders.
    pub slider_step: f64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            slider_step: DEFAULT_SLIDER_STEP,
        }
    }
}

impl UiSettings {
    fn normalized(mut self) -> Self {
        if !self.slider_step.is_finite() || self.slider_step <= 0.0 {
            self.slider_step = DEFAULT_SLIDER_STEP;
        }
        self
    }
}
