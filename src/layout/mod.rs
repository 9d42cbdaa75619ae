//! Layout engine computing 2D geometry for a parsed [DecisionTree](crate::model::DecisionTree).
//!
//! The tree is drawn bottom-up: the root branch (the trunk) starts at the
//! bottom center of the canvas and points straight up. Each child branch
//! starts where its parent's branch ends, is shorter the fewer samples
//! the child holds, and bends away from its parent's direction by the
//! same measure. Small subtrees thus end up short and spread out, large
//! ones long and straight.
//!
//! # API
//! * [`layout`] - computes a [Layout] for a tree and a [LayoutConfig]
//! * [`LayoutConfig`] - rendering parameters, loadable from JSON
//!
//! # Output
//! A [Layout] holds one [Branch] per drawn node in pre-order, the
//! [LeafRecord]s and [Bunch]es ordered by descending samples, and a
//! per-node [NodeGeometry] view.
//!
//! Nodes at depth `max_depth - 1` are not expanded further; they become a
//! [Bunch] standing in for their whole subtree.

mod config;
mod engine;
mod records;

pub use config::{
    BranchStrategy, DEFAULT_HEIGHT, DEFAULT_MAX_SHORTENING_FACTOR, DEFAULT_MIN_BRANCH_LENGTH,
    DEFAULT_TRUNK_LENGTH, DEFAULT_WIDTH, LayoutConfig,
};
pub use engine::layout;
pub use records::{Branch, Bunch, Layout, LeafRecord, NodeGeometry};
