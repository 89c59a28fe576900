use serde::Serialize;

/// Observed bounds and mean of one feature column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl FeatureRange {
    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub(super) fn compute_range(values: impl Iterator<Item = f64>) -> FeatureRange {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for value in values {
        min = min.min(value);
        max = max.max(value);
        sum += value;
        count += 1;
    }
    if count == 0 {
        return FeatureRange {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
        };
    }
    FeatureRange {
        min,
        max,
        mean: sum / count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_min_max_mean() {
        let range = compute_range([2.0, 4.0, 9.0].into_iter());
        assert_eq!(range.min, 2.0);
        assert_eq!(range.max, 9.0);
        assert_eq!(range.mean, 5.0);
        assert!(range.contains(2.0));
        assert!(!range.contains(9.5));
        assert_eq!(range.clamp(12.0), 9.0);
    }

    #[test]
    fn empty_column_collapses_to_zero() {
        let range = compute_range(std::iter::empty());
        assert_eq!(range, FeatureRange { min: 0.0, max: 0.0, mean: 0.0 });
    }
}
