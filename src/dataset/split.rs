//! Seeded train/test partitioning of dataset row indices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Row indices assigned to each side of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Number of test rows for `n` samples: `ceil(test_fraction * n)`, leaving at least one
/// row on each side whenever `n >= 2`.
pub fn test_size(n: usize, test_fraction: f64) -> usize {
    if n < 2 {
        return n;
    }
    let raw = (test_fraction * n as f64).ceil();
    if !raw.is_finite() {
        return 1;
    }
    (raw as usize).clamp(1, n - 1)
}

/// Shuffle `0..n` with a seeded RNG; the first `test_size` indices become the test set.
///
/// The same seed always produces the same partition; `rand` is pinned to an exact
/// release in the manifest since `StdRng` output may change between releases.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> TrainTestSplit {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    let train = indices.split_off(test_size(n, test_fraction));
    TrainTestSplit {
        train,
        test: indices,
    }
}
