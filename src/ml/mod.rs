//! Classifier artifact loading, inference, and evaluation metrics.
//!
//! Training happens outside this crate; these modules consume the exported artifact and
//! score it against the reference dataset.

pub mod classifier;
pub mod errors;
pub mod forest;
pub mod metrics;
pub mod roc;

pub use classifier::{Classifier, argmax};
pub use errors::ModelLoadError;
pub use forest::ForestModel;
