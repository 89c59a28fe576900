use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of measurements in every Iris sample.
pub const FEATURE_COUNT: usize = 4;

/// Errors that reject a single prediction or range request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// The input did not contain exactly one value per feature.
    #[error("Expected {expected} feature values, got {actual}")]
    Arity { expected: usize, actual: usize },
    /// A feature value was NaN or infinite.
    #[error("Feature {feature} must be a finite number (got {value})")]
    NonFinite { feature: &'static str, value: f64 },
    /// A feature index outside the dataset's columns was requested.
    #[error("Feature index {index} is out of range (dataset has {len} features)")]
    FeatureIndex { index: usize, len: usize },
}

/// The four Iris measurements in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    /// All features in canonical order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    pub fn index(self) -> usize {
        match self {
            Feature::SepalLength => 0,
            Feature::SepalWidth => 1,
            Feature::PetalLength => 2,
            Feature::PetalWidth => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column key used in the CSV header and model artifact.
    pub fn key(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal_length",
            Feature::SepalWidth => "sepal_width",
            Feature::PetalLength => "petal_length",
            Feature::PetalWidth => "petal_width",
        }
    }

    /// Human-readable label with units.
    pub fn label(self) -> &'static str {
        match self {
            Feature::SepalLength => "Sepal length (cm)",
            Feature::SepalWidth => "Sepal width (cm)",
            Feature::PetalLength => "Petal length (cm)",
            Feature::PetalWidth => "Petal width (cm)",
        }
    }
}

/// One flower's measurements, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl FeatureVector {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Build a vector from raw values, rejecting the wrong number of entries.
    pub fn from_slice(values: &[f64]) -> Result<Self, InvalidInputError> {
        match *values {
            [a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(InvalidInputError::Arity {
                expected: FEATURE_COUNT,
                actual: values.len(),
            }),
        }
    }

    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::SepalLength => self.sepal_length,
            Feature::SepalWidth => self.sepal_width,
            Feature::PetalLength => self.petal_length,
            Feature::PetalWidth => self.petal_width,
        }
    }

    pub fn get_mut(&mut self, feature: Feature) -> &mut f64 {
        match feature {
            Feature::SepalLength => &mut self.sepal_length,
            Feature::SepalWidth => &mut self.sepal_width,
            Feature::PetalLength => &mut self.petal_length,
            Feature::PetalWidth => &mut self.petal_width,
        }
    }

    /// Ensure every component is a finite number.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for feature in Feature::ALL {
            let value = self.get(feature);
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite {
                    feature: feature.key(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        let [a, b, c, d] = values;
        Self::new(a, b, c, d)
    }
}

/// Class index into the dataset's ordered class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassLabel(usize);

impl ClassLabel {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_rejects_wrong_arity() {
        let err = FeatureVector::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::Arity {
                expected: 4,
                actual: 3
            }
        );
        assert!(FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
    }

    #[test]
    fn array_order_matches_feature_indices() {
        let vector = FeatureVector::new(5.1, 3.5, 1.4, 0.2);
        let values = vector.as_array();
        for feature in Feature::ALL {
            assert_eq!(values[feature.index()], vector.get(feature));
        }
    }

    #[test]
    fn validate_flags_non_finite_values() {
        let mut vector = FeatureVector::new(5.1, 3.5, 1.4, 0.2);
        assert!(vector.validate().is_ok());
        *vector.get_mut(Feature::PetalWidth) = f64::NAN;
        match vector.validate() {
            Err(InvalidInputError::NonFinite { feature, .. }) => assert_eq!(feature, "petal_width"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
