//! Data model for random forest decision trees.
//!
//! # Tree representation
//! Trees are represented by [DecisionTree], which uses the arena pattern to
//! store [Node]s. Each node is either `Internal` or `Leaf`, referenced by
//! [NodeIndex]. Parents are referenced by index as well, so walking up
//! to the root needs no back pointers.
//!
//! # Forest
//! A [Forest] owns all trees of a random forest together with its
//! correlation matrix and overall error, see [crate::forest] for assembly.

pub mod forest;
pub mod node;
pub mod tree;

pub use forest::Forest;
pub use node::{Node, SplitFields};
pub use tree::{DecisionTree, NodeIndex};
