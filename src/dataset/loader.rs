//! Loader for the Iris reference CSV.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::range::{FeatureRange, compute_range};
use super::vector::{ClassLabel, FEATURE_COUNT, Feature, FeatureVector, InvalidInputError};

/// Copy of the 150-sample reference set compiled into the binary.
pub const BUNDLED_CSV: &str = include_str!("../../assets/iris.csv");

/// Expected number of rows in the reference set.
pub const SAMPLE_COUNT: usize = 150;
/// Expected number of distinct species.
pub const CLASS_COUNT: usize = 3;
/// Expected number of rows per species.
pub const SAMPLES_PER_CLASS: usize = 50;

#[derive(Debug, Error)]
pub enum DataUnavailableError {
    #[error("Dataset file not found at {path}")]
    Missing { path: PathBuf },
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Dataset is empty")]
    Empty,
    #[error("Invalid dataset header: {0}")]
    Header(String),
    #[error("Invalid dataset row at line {line}: {reason}")]
    Row { line: usize, reason: String },
    #[error("Unexpected dataset shape: {0}")]
    Shape(String),
}

/// Labeled measurement row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    pub label: ClassLabel,
}

/// The fixed Iris reference dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    class_names: Vec<String>,
    samples: Vec<Sample>,
}

impl Dataset {
    /// Load the bundled reference set.
    pub fn load() -> Result<Self, DataUnavailableError> {
        Self::from_csv_str(BUNDLED_CSV)
    }

    /// Load a reference set with the same layout from disk.
    pub fn from_path(path: &Path) -> Result<Self, DataUnavailableError> {
        if !path.is_file() {
            return Err(DataUnavailableError::Missing {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| DataUnavailableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_csv_str(&text)?;
        tracing::info!("Loaded dataset from {}", path.display());
        Ok(dataset)
    }

    /// Parse CSV text with a header of four feature columns plus a species column.
    pub fn from_csv_str(text: &str) -> Result<Self, DataUnavailableError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());
        let (_, header) = lines.next().ok_or(DataUnavailableError::Empty)?;
        let feature_names = parse_header(header)?;

        let mut class_names: Vec<String> = Vec::new();
        let mut samples = Vec::with_capacity(SAMPLE_COUNT);
        for (line_no, line) in lines {
            let (features, species) = parse_row(line).map_err(|reason| DataUnavailableError::Row {
                line: line_no,
                reason,
            })?;
            let class_index = match class_names.iter().position(|name| name == species) {
                Some(idx) => idx,
                None => {
                    class_names.push(species.to_string());
                    class_names.len() - 1
                }
            };
            samples.push(Sample {
                features,
                label: ClassLabel::new(class_index),
            });
        }

        let dataset = Self {
            feature_names,
            class_names,
            samples,
        };
        dataset.validate_shape()?;
        Ok(dataset)
    }

    fn validate_shape(&self) -> Result<(), DataUnavailableError> {
        if self.samples.len() != SAMPLE_COUNT {
            return Err(DataUnavailableError::Shape(format!(
                "expected {SAMPLE_COUNT} samples, found {}",
                self.samples.len()
            )));
        }
        if self.class_names.len() != CLASS_COUNT {
            return Err(DataUnavailableError::Shape(format!(
                "expected {CLASS_COUNT} classes, found {}",
                self.class_names.len()
            )));
        }
        let counts = self.class_counts(0..self.samples.len());
        for (name, count) in self.class_names.iter().zip(counts) {
            if count != SAMPLES_PER_CLASS {
                return Err(DataUnavailableError::Shape(format!(
                    "class {name} has {count} samples (expected {SAMPLES_PER_CLASS})"
                )));
            }
        }
        Ok(())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Column names in canonical feature order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Species names in canonical class order.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn class_name(&self, label: ClassLabel) -> Option<&str> {
        self.class_names.get(label.index()).map(String::as_str)
    }

    /// Count samples per class among the given row indices.
    pub fn class_counts(&self, indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
        let mut counts = vec![0usize; self.class_names.len()];
        for idx in indices {
            if let Some(sample) = self.samples.get(idx)
                && let Some(count) = counts.get_mut(sample.label.index())
            {
                *count += 1;
            }
        }
        counts
    }

    /// Min, max, and mean of one feature column across every sample.
    pub fn feature_range(&self, feature_index: usize) -> Result<FeatureRange, InvalidInputError> {
        let feature =
            Feature::from_index(feature_index).ok_or(InvalidInputError::FeatureIndex {
                index: feature_index,
                len: FEATURE_COUNT,
            })?;
        Ok(compute_range(
            self.samples.iter().map(|sample| sample.features.get(feature)),
        ))
    }

    /// Ranges for all four features, in canonical order.
    pub fn feature_ranges(&self) -> [FeatureRange; FEATURE_COUNT] {
        Feature::ALL.map(|feature| {
            compute_range(
                self.samples
                    .iter()
                    .map(|sample| sample.features.get(feature)),
            )
        })
    }
}

fn parse_header(header: &str) -> Result<Vec<String>, DataUnavailableError> {
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    if columns.len() != FEATURE_COUNT + 1 {
        return Err(DataUnavailableError::Header(format!(
            "expected {} columns, found {}",
            FEATURE_COUNT + 1,
            columns.len()
        )));
    }
    if columns.iter().any(|column| column.is_empty()) {
        return Err(DataUnavailableError::Header("empty column name".to_string()));
    }
    Ok(columns[..FEATURE_COUNT]
        .iter()
        .map(|column| column.to_string())
        .collect())
}

fn parse_row(line: &str) -> Result<(FeatureVector, &str), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FEATURE_COUNT + 1 {
        return Err(format!(
            "expected {} fields, found {}",
            FEATURE_COUNT + 1,
            fields.len()
        ));
    }
    let mut values = [0.0f64; FEATURE_COUNT];
    for (slot, raw) in values.iter_mut().zip(&fields[..FEATURE_COUNT]) {
        let value = raw
            .parse::<f64>()
            .map_err(|_| format!("invalid number {raw:?}"))?;
        if !value.is_finite() {
            return Err(format!("non-finite value {raw:?}"));
        }
        *slot = value;
    }
    let species = fields[FEATURE_COUNT];
    if species.is_empty() {
        return Err("missing species".to_string());
    }
    Ok((FeatureVector::from(values), species))
}
