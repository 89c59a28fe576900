//! Library exports for reuse in the binaries, benchmarks, and tests.
/// Shared dataset/model context built at startup.
pub mod app;
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// Iris reference dataset, feature vectors, and splits.
pub mod dataset;
/// egui dashboard.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Classifier artifact and evaluation metrics.
pub mod ml;
/// Prediction and evaluation pipelines.
pub mod pipeline;
