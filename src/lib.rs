//! Arborist is a library to parse random forest dumps and lay out their
//! decision trees for drawing.
//!
//! Core functionality provided:
//! - Statistics: Parse the per-tree text dump (`tree_<n>.txt`) of a trained
//!   forest and reconstruct each binary decision tree from its depth-annotated
//!   pre-order records, with strict structural validation.
//! - Forest: Combine the forest summary (`forest.txt`: correlation matrix,
//!   out-of-bag errors, overall error) with all tree dumps. Trees are parsed
//!   in parallel.
//! - Layout: Compute a deterministic 2D layout of a tree, where branch lengths
//!   and angles follow the share of samples each node holds. Deep trees can be
//!   cut at a maximum depth, with the truncated subtrees drawn as "bunches".
//! - Highlight: Mark the root paths of selected leaves.
//! - SVG: Render a layout as an SVG document.
//! - Tree model:
//!   - [DecisionTree] uses the arena pattern: nodes are referenced by
//!     [NodeIndex] only and parents are stored as indices.
//!   - See [crate::model] for more details.
//!
//! Limitations:
//! - Only binary trees
//! - Split fields of internal nodes are kept as opaque strings
//! - Sample counts are not checked for consistency between parent and children
//!
//! # Usage patterns
//! 1. Parse a single tree dump or a whole data folder with the quick API
//!    functions below.
//! 2. Lay out a tree with a [LayoutConfig](crate::layout::LayoutConfig),
//!    optionally after highlighting some leaves, and render the result
//!    with [crate::svg].
//!
//! ## Example
//!
//! ```
//! use arborist::layout::LayoutConfig;
//! use arborist::{layout, mark_path, parse_statistics};
//! use std::collections::HashSet;
//!
//! let text = "tree 0\nheader\n\
//!             0;100;0.5;0.2;f;g;h;i;j;k;l\n\
//!             1;40;0.1;0;2;36,4\n\
//!             1;60;0.3;1;2;15,45\n";
//! let mut tree = parse_statistics(text)?;
//! mark_path(&mut tree, &HashSet::from([1]));
//!
//! let result = layout(&tree, 100, &LayoutConfig::default());
//! assert_eq!(result.branches.len(), 3);
//! assert!(result.leaves[0].selected);
//! # Ok::<(), arborist::parser::ParsingError>(())
//! ```
//!
//! ## Example Data Folder
//!
//! ```no_run
//! use arborist::layout::{BranchStrategy, LayoutConfig};
//! use arborist::svg::{SvgStyle, write_svg_file};
//! use arborist::{layout, parse_data_folder};
//! use std::fs::File;
//! use std::num::NonZeroUsize;
//!
//! let forest = parse_data_folder("iris_forest")?;
//! let config = LayoutConfig::default()
//!     .with_max_depth(NonZeroUsize::new(6).unwrap())
//!     .with_branch_strategy(BranchStrategy::Up);
//!
//! for (i, tree) in forest.trees().iter().enumerate() {
//!     let result = layout(tree, forest.total_samples(), &config);
//!     let file = File::create(format!("tree_{}.svg", i))?;
//!     write_svg_file(file, &result, &config, &SvgStyle::default())?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod forest;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod parser;
pub mod statistics;
pub mod svg;

use crate::layout::{Layout, LayoutConfig};
use crate::model::{DecisionTree, Forest};
use crate::parser::parsing_error::ParsingError;
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// Quick Parsing API
// ============================================================================
/// Parses a single tree dump using default settings.
///
/// See [`statistics::parse_statistics`] for full documentation.
pub fn parse_statistics<S: AsRef<str>>(text: S) -> Result<DecisionTree, ParsingError> {
    statistics::parse_statistics(text)
}

/// Assembles a [Forest] from the forest summary and the tree dumps.
///
/// See [`forest::assemble_forest`] for full documentation.
pub fn assemble_forest<S>(forest_text: &str, tree_texts: &[S]) -> Result<Forest, ParsingError>
where
    S: AsRef<str> + Sync,
{
    forest::assemble_forest(forest_text, tree_texts)
}

/// Reads a data folder (`forest.txt` + `tree_<n>.txt`) and assembles its [Forest].
///
/// See [`forest::parse_data_folder`] for full documentation.
pub fn parse_data_folder<P: AsRef<Path>>(path: P) -> Result<Forest, ParsingError> {
    forest::parse_data_folder(path)
}

// ============================================================================
// Quick Rendering API
// ============================================================================
/// Computes the layout of a tree.
///
/// See [`layout::layout`] for full documentation.
pub fn layout(tree: &DecisionTree, total_samples: u64, config: &LayoutConfig) -> Layout {
    layout::layout(tree, total_samples, config)
}

/// Highlights the root paths of the given leaves, returning the number found.
///
/// See [`highlight::mark_path`] for full documentation.
pub fn mark_path(tree: &mut DecisionTree, leaf_ids: &HashSet<u32>) -> usize {
    highlight::mark_path(tree, leaf_ids)
}
