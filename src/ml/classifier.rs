use crate::dataset::FeatureVector;

/// Read-only interface over a trained classifier artifact.
///
/// Implementations are immutable after load; every method is a pure function of its input.
pub trait Classifier {
    /// Ordered class names; probability vectors follow this order.
    fn classes(&self) -> &[String];

    /// Ordered feature names expected by the model.
    fn feature_names(&self) -> &[String];

    /// Class probability distribution for one sample. Sums to 1.
    fn predict_proba(&self, features: &FeatureVector) -> Vec<f64>;

    /// Per-feature contribution recorded at training time.
    fn feature_importances(&self) -> &[f64];

    /// Most likely class index: the argmax of [`Classifier::predict_proba`].
    fn predict(&self, features: &FeatureVector) -> usize {
        argmax(&self.predict_proba(features))
    }
}

/// Index of the largest value; the first index wins ties.
pub fn argmax(values: &[f64]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f64::NEG_INFINITY;
    for (idx, &value) in values.iter().enumerate() {
        if value > best_val {
            best_val = value;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first_of_equal_values() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), 1);
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[]), 0);
    }
}
