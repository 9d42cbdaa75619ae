//! Forest aggregate: all trees of a random forest plus forest-level statistics.

use crate::model::tree::DecisionTree;
use nalgebra::DMatrix;

// =#========================================================================#=
// FOREST
// =#========================================================================#=
/// A random forest as assembled from a forest summary and its tree dumps.
///
/// # Invariants
/// - `trees` is non-empty
/// - Every tree has its out-of-bag error set
/// - `total_samples` equals the root samples of the first tree
#[derive(Debug, Clone)]
pub struct Forest {
    /// Overall validation error of the forest
    error: f64,
    /// Number of samples at the root of the first tree
    total_samples: u64,
    /// Pairwise tree correlations (square, symmetry not enforced)
    correlation_matrix: DMatrix<f64>,
    /// Trees in file order
    trees: Vec<DecisionTree>,
}

impl Forest {
    /// Creates a new forest.
    ///
    /// Only called by the forest assembler, which checks the invariants.
    pub(crate) fn new(
        error: f64,
        total_samples: u64,
        correlation_matrix: DMatrix<f64>,
        trees: Vec<DecisionTree>,
    ) -> Self {
        Forest {
            error,
            total_samples,
            correlation_matrix,
            trees,
        }
    }

    /// Returns the overall validation error.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Returns the number of samples at the root of the first tree.
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Returns the correlation matrix.
    pub fn correlation_matrix(&self) -> &DMatrix<f64> {
        &self.correlation_matrix
    }

    /// Returns the correlation between trees `i` and `j`, or `None` if out of bounds.
    pub fn correlation(&self, i: usize, j: usize) -> Option<f64> {
        self.correlation_matrix.get((i, j)).copied()
    }

    /// Returns all trees.
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Returns the tree at `index`, or `None` if out of bounds.
    pub fn tree(&self, index: usize) -> Option<&DecisionTree> {
        self.trees.get(index)
    }

    /// Returns the tree at `index` mutably, e.g. to highlight paths.
    pub fn tree_mut(&mut self, index: usize) -> Option<&mut DecisionTree> {
        self.trees.get_mut(index)
    }

    /// Returns the number of trees.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Consumes the forest and returns its trees.
    pub fn into_trees(self) -> Vec<DecisionTree> {
        self.trees
    }
}
