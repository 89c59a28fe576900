use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the classifier artifact. All are fatal at startup.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// No artifact exists at the configured location.
    #[error("Model file not found at {path}")]
    Missing { path: PathBuf },
    /// The artifact exists but could not be read.
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not a valid model document.
    #[error("Corrupt model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document parsed but violates structural invariants.
    #[error("Invalid model {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    /// The model does not match the reference dataset.
    #[error("Model is incompatible with the dataset: {reason}")]
    Incompatible { reason: String },
}
