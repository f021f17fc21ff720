use serde::{Serialize, Deserialize};

/// One node of a fitted tree. Children are indices into the tree's node arena.
///
/// A sample goes to `left` when `x[feature] <= threshold`, otherwise to `right`.
/// `class_counts[k]` is the number of training samples of class `k` that
/// reached the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        class_counts: Vec<usize>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        class_counts: Vec<usize>,
    },
}

impl Node {
    pub fn class_counts(&self) -> &[usize] {
        match self {
            Node::Leaf { class_counts } | Node::Split { class_counts, .. } => class_counts,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Class distribution at this node, normalized to sum to 1.
    pub fn probabilities(&self) -> Vec<f64> {
        let counts = self.class_counts();
        let total: usize = counts.iter().sum();
        if total == 0 {
            return vec![0.0; counts.len()];
        }
        counts.iter().map(|&c| c as f64 / total as f64).collect()
    }

    /// Index of the majority class; ties resolve to the lowest index.
    pub fn majority_class(&self) -> usize {
        let counts = self.class_counts();
        let mut best = 0;
        for (k, &c) in counts.iter().enumerate() {
            if c > counts[best] {
                best = k;
            }
        }
        best
    }
}
