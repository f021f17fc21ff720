use serde::{Serialize, Deserialize};

use crate::error::{MlError, Result};

/// Impurity measure used to score candidate splits.
///
/// - `Gini`    — 1 - sum(p_k²)
/// - `Entropy` — -sum(p_k · log2(p_k))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitCriterion {
    #[default]
    Gini,
    Entropy,
}

impl SplitCriterion {
    /// Impurity of a node given its per-class sample counts.
    pub fn impurity(&self, counts: &[usize]) -> f64 {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let n = total as f64;
        let probs = counts.iter().filter(|&&c| c > 0).map(|&c| c as f64 / n);
        match self {
            SplitCriterion::Gini => 1.0 - probs.map(|p| p * p).sum::<f64>(),
            SplitCriterion::Entropy => -probs.map(|p| p * p.log2()).sum::<f64>(),
        }
    }
}

/// Hyperparameters for [`DecisionTreeClassifier`](crate::tree::DecisionTreeClassifier).
///
/// # Fields
/// - `criterion`         — split quality measure
/// - `max_depth`         — maximum depth of the tree; `None` grows until leaves are pure
/// - `min_samples_split` — a node with fewer samples becomes a leaf (≥ 2)
/// - `min_samples_leaf`  — every child of a split keeps at least this many samples (≥ 1)
/// - `random_state`      — seed for the order in which features are scanned;
///                         `None` scans features in index order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeConfig {
    #[serde(default)]
    pub criterion: SplitCriterion,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    #[serde(default = "default_min_samples_leaf")]
    pub min_samples_leaf: usize,
    #[serde(default)]
    pub random_state: Option<u64>,
}

fn default_min_samples_split() -> usize { 2 }
fn default_min_samples_leaf() -> usize { 1 }

impl Default for DecisionTreeConfig {
    fn default() -> Self {
        DecisionTreeConfig {
            criterion: SplitCriterion::Gini,
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            random_state: None,
        }
    }
}

impl DecisionTreeConfig {
    pub fn with_criterion(mut self, criterion: SplitCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_samples_split < 2 {
            return Err(MlError::domain(
                "decision_tree_config",
                format!("min_samples_split must be at least 2, got {}", self.min_samples_split),
            ));
        }
        if self.min_samples_leaf < 1 {
            return Err(MlError::domain(
                "decision_tree_config",
                "min_samples_leaf must be at least 1",
            ));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file; missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<DecisionTreeConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: DecisionTreeConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gini_and_entropy_of_pure_and_balanced_nodes() {
        assert_eq!(SplitCriterion::Gini.impurity(&[4, 0]), 0.0);
        assert!((SplitCriterion::Gini.impurity(&[2, 2]) - 0.5).abs() < 1e-12);
        assert_eq!(SplitCriterion::Entropy.impurity(&[0, 3]), 0.0);
        assert!((SplitCriterion::Entropy.impurity(&[3, 3]) - 1.0).abs() < 1e-12);
        assert_eq!(SplitCriterion::Gini.impurity(&[]), 0.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: DecisionTreeConfig =
            serde_json::from_str(r#"{ "criterion": "entropy", "max_depth": 3 }"#).unwrap();
        assert_eq!(config.criterion, SplitCriterion::Entropy);
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.min_samples_split, 2);
        assert_eq!(config.min_samples_leaf, 1);
        assert_eq!(config.random_state, None);
    }

    #[test]
    fn validate_rejects_degenerate_limits() {
        let mut config = DecisionTreeConfig::default();
        assert!(config.validate().is_ok());
        config.min_samples_split = 1;
        assert!(config.validate().is_err());
        config.min_samples_split = 2;
        config.min_samples_leaf = 0;
        assert!(config.validate().is_err());
    }
}
