use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::error::{MlError, Result};
use crate::math::matrix::Matrix;
use crate::tree::config::DecisionTreeConfig;
use crate::tree::node::Node;

/// CART classification tree with axis-aligned threshold splits.
///
/// Labels are arbitrary `f64` class values; they are mapped to class indices
/// in ascending order at fit time and mapped back by [`predict`](Self::predict).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    config: DecisionTreeConfig,
    /// Node arena; the root is at index 0. Empty until fitted.
    nodes: Vec<Node>,
    classes: Vec<f64>,
    n_features: usize,
}

/// Best split found for a node.
struct Candidate {
    feature: usize,
    threshold: f64,
    weighted_impurity: f64,
}

/// Read-only state shared by every recursive `grow` call.
struct Grower<'a> {
    x: &'a Matrix,
    y: &'a [usize],
    n_classes: usize,
    feature_order: Vec<usize>,
    config: &'a DecisionTreeConfig,
}

impl DecisionTreeClassifier {
    pub fn new(config: DecisionTreeConfig) -> DecisionTreeClassifier {
        DecisionTreeClassifier {
            config,
            nodes: Vec::new(),
            classes: Vec::new(),
            n_features: 0,
        }
    }

    pub fn config(&self) -> &DecisionTreeConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Distinct class labels seen during `fit`, ascending.
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Grows the tree on `x` (one sample per row) and `y` (one label per row).
    /// Any previously fitted tree is discarded.
    ///
    /// # Errors
    /// - [`MlError::EmptyDataset`] if `x` has no rows
    /// - [`MlError::Shape`] if `y.len() != x.rows`
    /// - [`MlError::Domain`] for a non-finite feature or label, or an invalid config
    pub fn fit(&mut self, x: &Matrix, y: &[f64]) -> Result<()> {
        self.config.validate()?;
        if x.rows == 0 {
            return Err(MlError::EmptyDataset);
        }
        if y.len() != x.rows {
            return Err(MlError::shape("fit", x.rows, y.len()));
        }
        if let Some(v) = y.iter().find(|v| !v.is_finite()) {
            return Err(MlError::domain("fit", format!("label {v} is not finite")));
        }
        if x.data.iter().flatten().any(|v| !v.is_finite()) {
            return Err(MlError::domain("fit", "feature matrix contains a non-finite value"));
        }

        let mut classes = y.to_vec();
        classes.sort_by(f64::total_cmp);
        classes.dedup();
        let encoded: Vec<usize> = y.iter()
            .map(|v| classes.partition_point(|c| c < v))
            .collect();

        let mut feature_order: Vec<usize> = (0..x.cols).collect();
        if let Some(seed) = self.config.random_state {
            let mut rng = StdRng::seed_from_u64(seed);
            feature_order.shuffle(&mut rng);
        }

        let grower = Grower {
            x,
            y: &encoded,
            n_classes: classes.len(),
            feature_order,
            config: &self.config,
        };
        let mut nodes = Vec::new();
        grower.grow(&mut nodes, (0..x.rows).collect(), 0);

        self.nodes = nodes;
        self.classes = classes;
        self.n_features = x.cols;

        info!(
            "fitted decision tree on {} samples: {} classes, {} nodes, depth {}, {} leaves",
            x.rows,
            self.classes.len(),
            self.nodes.len(),
            self.depth(),
            self.n_leaves()
        );
        Ok(())
    }

    /// Predicted class label for every row of `x`.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<f64>> {
        self.check_input(x)?;
        Ok(x.data.iter()
            .map(|row| self.classes[self.leaf_for(row).majority_class()])
            .collect())
    }

    /// Per-row class probabilities; column `k` corresponds to `classes()[k]`.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Matrix> {
        self.check_input(x)?;
        let rows = x.data.iter().map(|row| self.leaf_for(row).probabilities()).collect();
        Ok(Matrix { rows: x.rows, cols: self.classes.len(), data: rows })
    }

    /// Number of split levels on the longest root-to-leaf path; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        self.depth_from(0)
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Serializes the fitted tree (config, classes and nodes) to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a tree previously written by `save_json`.
    ///
    /// # Errors
    /// [`MlError::Domain`] or [`MlError::Shape`] if the node arena is not a
    /// well-formed tree for the stored classes and feature count.
    pub fn load_json(path: &str) -> Result<DecisionTreeClassifier> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let tree: DecisionTreeClassifier = serde_json::from_reader(reader)?;
        tree.config.validate()?;
        tree.check_structure()?;
        Ok(tree)
    }

    /// Children always sit after their parent in the arena, so requiring
    /// `idx < child < nodes.len()` also rules out cycles.
    fn check_structure(&self) -> Result<()> {
        if !self.nodes.is_empty() && self.classes.is_empty() {
            return Err(MlError::domain("load_json", "fitted tree has no classes"));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.class_counts().len() != self.classes.len() {
                return Err(MlError::shape(
                    "load_json",
                    format!("{} class counts at node {idx}", self.classes.len()),
                    node.class_counts().len(),
                ));
            }
            if let Node::Split { feature, left, right, .. } = node {
                if *feature >= self.n_features {
                    return Err(MlError::domain(
                        "load_json",
                        format!("node {idx} splits on feature {feature} of {}", self.n_features),
                    ));
                }
                for child in [*left, *right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(MlError::domain(
                            "load_json",
                            format!(
                                "node {idx} points at child {child}; expected {idx} < child < {}",
                                self.nodes.len()
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn check_input(&self, x: &Matrix) -> Result<()> {
        if !self.is_fitted() {
            return Err(MlError::NotFitted);
        }
        if x.cols != self.n_features {
            return Err(MlError::shape(
                "predict",
                format!("{} features", self.n_features),
                format!("{} features", x.cols),
            ));
        }
        if x.data.iter().flatten().any(|v| !v.is_finite()) {
            return Err(MlError::domain("predict", "feature matrix contains a non-finite value"));
        }
        Ok(())
    }

    fn leaf_for(&self, row: &[f64]) -> &Node {
        let mut node = &self.nodes[0];
        while let Node::Split { feature, threshold, left, right, .. } = node {
            node = if row[*feature] <= *threshold {
                &self.nodes[*left]
            } else {
                &self.nodes[*right]
            };
        }
        node
    }

    fn depth_from(&self, idx: usize) -> usize {
        match &self.nodes[idx] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self.depth_from(*left).max(self.depth_from(*right))
            }
        }
    }
}

impl Grower<'_> {
    /// Appends the subtree for `indices` to `nodes` and returns its root index.
    fn grow(&self, nodes: &mut Vec<Node>, indices: Vec<usize>, depth: usize) -> usize {
        let class_counts = self.count(&indices);
        let idx = nodes.len();
        nodes.push(Node::Leaf { class_counts: class_counts.clone() });

        let n = indices.len();
        let pure = class_counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = self.config.max_depth.is_some_and(|d| depth >= d);
        if pure
            || depth_reached
            || n < self.config.min_samples_split
            || n < 2 * self.config.min_samples_leaf
        {
            return idx;
        }

        let Some(best) = self.best_split(&indices, &class_counts) else {
            warn!("node at depth {depth} with {n} samples has no valid split; keeping it as a mixed leaf");
            return idx;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices.iter()
            .partition(|&&i| self.x.data[i][best.feature] <= best.threshold);
        debug!(
            "depth {depth}: split feature {} at {:.6} (impurity {:.6}) -> {} | {}",
            best.feature,
            best.threshold,
            best.weighted_impurity,
            left_idx.len(),
            right_idx.len()
        );

        let left = self.grow(nodes, left_idx, depth + 1);
        let right = self.grow(nodes, right_idx, depth + 1);
        nodes[idx] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
            class_counts,
        };
        idx
    }

    fn count(&self, indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &i in indices {
            counts[self.y[i]] += 1;
        }
        counts
    }

    /// Scans every feature for the threshold minimizing the sample-weighted
    /// impurity of the two children. Earlier features in `feature_order` win ties.
    fn best_split(&self, indices: &[usize], parent_counts: &[usize]) -> Option<Candidate> {
        let n = indices.len();
        let min_leaf = self.config.min_samples_leaf;
        let criterion = self.config.criterion;
        let mut best: Option<Candidate> = None;

        for &feature in &self.feature_order {
            let mut sorted = indices.to_vec();
            sorted.sort_by(|&a, &b| self.x.data[a][feature].total_cmp(&self.x.data[b][feature]));

            let mut left_counts = vec![0; self.n_classes];
            let mut right_counts = parent_counts.to_vec();

            for k in 0..n - 1 {
                let class = self.y[sorted[k]];
                left_counts[class] += 1;
                right_counts[class] -= 1;

                let here = self.x.data[sorted[k]][feature];
                let next = self.x.data[sorted[k + 1]][feature];
                if here == next {
                    continue;
                }
                let n_left = k + 1;
                let n_right = n - n_left;
                if n_left < min_leaf || n_right < min_leaf {
                    continue;
                }

                let weighted = (n_left as f64 * criterion.impurity(&left_counts)
                    + n_right as f64 * criterion.impurity(&right_counts))
                    / n as f64;
                if best.as_ref().map_or(true, |b| weighted < b.weighted_impurity) {
                    let mut threshold = here + (next - here) / 2.0;
                    // Adjacent floats can round the midpoint up onto `next`.
                    if threshold >= next {
                        threshold = here;
                    }
                    best = Some(Candidate { feature, threshold, weighted_impurity: weighted });
                }
            }
        }

        best
    }
}
