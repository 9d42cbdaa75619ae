//! Statistics parser for single decision tree dumps.
//!
//! This module provides [StatisticsParser] to parse the text dump of one
//! decision tree into a [DecisionTree].
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_statistics`] - parses a tree dump given as string
//! * [`parse_statistics_file`] - parses a `tree_<id>.txt` file
//!
//! # Format
//! * The first two lines are headers and are discarded
//! * Every further non-blank line is a `;`-separated node record,
//!   listed in pre-order and starting with the node's depth
//! * Internal node, 11 fields:
//!   `depth;samples;impurity;impurity_drop;` + 7 split fields
//!   (feature, threshold, etc.) that are passed through verbatim
//! * Leaf, 6 fields:
//!   `depth;samples;impurity;leaf_id;num_classes;c_0,c_1,...`
//!
//! For example:
//! ```text
//! tree 0
//! depth;samples;impurity;...
//! 0;100;0.48;0.21;2;petal_length;<=;2.45;-;-;-
//! 1;40;0.0;0;3;40,0,0
//! 1;60;0.5;1;3;0,30,30
//! ```

mod assembler;
mod defs;
pub mod parser;

pub use parser::StatisticsParser;

use crate::model::DecisionTree;
use crate::parser::ParsingError;
use crate::parser::line_parser::LineParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single tree dump using default settings.
///
/// # Arguments
/// * `text` - The full text of a tree dump, including its two header lines
///
/// # Returns
/// * [DecisionTree] - Tree reconstructed from the dump
/// * [ParsingError] - If a record is malformed or the depths are inconsistent
///
/// # Example
/// ```
/// use arborist::statistics::parse_statistics;
///
/// let text = "H1\nH2\n0;100;0.5;0.2;f;g;h;i;j;k;l\n1;40;0.1;0;2;36,4\n1;60;0.3;1;2;15,45\n";
/// let tree = parse_statistics(text)?;
/// assert_eq!(tree.num_leaves(), 2);
/// assert_eq!(tree.root().samples(), 100);
///
/// # Ok::<(), arborist::parser::ParsingError>(())
/// ```
pub fn parse_statistics<S: AsRef<str>>(text: S) -> Result<DecisionTree, ParsingError> {
    let mut line_parser = LineParser::for_str(text.as_ref());
    StatisticsParser::new().parse(&mut line_parser)
}

/// Reads and parses a single tree dump file using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [DecisionTree] - Tree reconstructed from the file
/// * [ParsingError] - If reading fails or the dump is invalid
pub fn parse_statistics_file<P: AsRef<Path>>(path: P) -> Result<DecisionTree, ParsingError> {
    let source = path.as_ref().display().to_string();
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ParsingError::from(e).in_source(&source))?;
    parse_statistics(text).map_err(|e| e.in_source(&source))
}
