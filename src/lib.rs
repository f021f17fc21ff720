pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod drills;
pub mod data;
pub mod tree;
pub mod metrics;

// Convenience re-exports
pub use error::{MlError, Result};
pub use math::matrix::{Mask, Matrix};
pub use activation::softmax::softmax;
pub use loss::cross_entropy::{cross_entropy, CrossEntropyLoss};
pub use data::csv::{load_csv, parse_csv, LabelColumn};
pub use tree::{DecisionTreeClassifier, DecisionTreeConfig, SplitCriterion};
pub use metrics::accuracy_score;
