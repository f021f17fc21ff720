pub mod classifier;
pub mod config;
pub mod node;

pub use classifier::DecisionTreeClassifier;
pub use config::{DecisionTreeConfig, SplitCriterion};
pub use node::Node;
