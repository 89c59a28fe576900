//! Random-forest classifier artifact.
//!
//! The forest is trained offline and shipped as a JSON document. This module only loads
//! and evaluates it:
//! - Class probabilities are the mean of the per-tree leaf distributions.
//! - Feature importances are stored in the artifact and reported verbatim.
//! - Structural validation happens once at load time.

mod model;
mod tree;

pub use model::{DEFAULT_MODEL_PATH, ForestModel};
pub use tree::{DecisionTree, TreeNode};
