//! Iris reference dataset: 150 labeled flowers, four measurements, three species.
//!
//! The dataset is loaded once at startup and shared read-only by the prediction and
//! evaluation pipelines.

mod loader;
mod range;
pub mod split;
mod vector;

pub use loader::{
    BUNDLED_CSV, CLASS_COUNT, DataUnavailableError, Dataset, SAMPLE_COUNT, SAMPLES_PER_CLASS,
    Sample,
};
pub use range::FeatureRange;
pub use split::{TrainTestSplit, train_test_split};
pub use vector::{ClassLabel, FEATURE_COUNT, Feature, FeatureVector, InvalidInputError};
