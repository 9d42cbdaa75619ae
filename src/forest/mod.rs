//! Forest assembler combining a forest summary with its tree dumps.
//!
//! # Quick API
//! * [`assemble_forest`] - builds a [Forest] from already loaded texts
//! * [`parse_data_folder`] - reads and assembles a data folder
//!
//! # Building blocks
//! * [`parse_forest_summary`] - parses `forest.txt` alone
//! * [`read_data_folder`] - reads `forest.txt` and all `tree_<n>.txt` files

mod data_folder;
mod defs;
mod summary;

pub use data_folder::{DataFolder, read_data_folder};
pub use summary::{ForestSummary, parse_forest_summary};

use crate::model::{DecisionTree, Forest};
use crate::parser::{ParsingError, ParsingErrorType};
use crate::statistics::parse_statistics;
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// Assembles a [Forest] from the forest summary and one dump per tree.
///
/// Trees are parsed in parallel. The summary must list exactly one
/// out-of-bag error per tree dump; each tree receives its error in order.
///
/// # Arguments
/// * `forest_text` - Content of `forest.txt`
/// * `tree_texts` - Contents of the tree dumps, in tree order
///
/// # Returns
/// * [Forest] - All trees with the forest-level statistics
/// * [ParsingError] -
///     - [EmptyForest](ParsingErrorType::EmptyForest) if `tree_texts` is empty
///     - [Format](ParsingErrorType::Format) if the summary is malformed or
///       the number of out-of-bag errors does not match the number of trees
///     - any error of the first tree (in order) that fails to parse
///
/// # Example
/// ```
/// use arborist::forest::assemble_forest;
///
/// let forest_text = "[1]\n\n0.1\n\n0.1\n";
/// let tree_text = "H1\nH2\n0;10;0.5;0.1;a;b;c;d;e;f;g\n1;4;0.0;0;1;4\n1;6;0.0;1;1;6\n";
/// let forest = assemble_forest(forest_text, &[tree_text])?;
/// assert_eq!(forest.total_samples(), 10);
/// assert_eq!(forest.trees()[0].oob_error(), Some(0.1));
///
/// # Ok::<(), arborist::parser::ParsingError>(())
/// ```
pub fn assemble_forest<S>(forest_text: &str, tree_texts: &[S]) -> Result<Forest, ParsingError>
where
    S: AsRef<str> + Sync,
{
    if tree_texts.is_empty() {
        return Err(ParsingError::without_context(ParsingErrorType::EmptyForest));
    }

    let summary = parse_forest_summary(forest_text)
        .map_err(|e| e.in_source("forest summary"))?;

    let num_trees = tree_texts.len();
    if summary.oob_errors.len() != num_trees {
        return Err(ParsingError::without_context(ParsingErrorType::Format(
            format!(
                "Forest summary lists {} out-of-bag errors but {} trees were given",
                summary.oob_errors.len(),
                num_trees
            ),
        )));
    }

    if summary.correlation_matrix.nrows() != num_trees {
        warn!(
            matrix_size = summary.correlation_matrix.nrows(),
            num_trees, "correlation matrix size differs from number of trees"
        );
    }

    let parsed: Vec<Result<DecisionTree, ParsingError>> = tree_texts
        .par_iter()
        .map(|text| parse_statistics(text.as_ref()))
        .collect();

    let mut trees = Vec::with_capacity(num_trees);
    for (i, (result, oob_error)) in parsed.into_iter().zip(&summary.oob_errors).enumerate() {
        let mut tree = result.map_err(|e| e.in_source(&format!("tree {}", i)))?;
        tree.set_oob_error(*oob_error);
        trees.push(tree);
    }

    let total_samples = trees[0].root().samples();
    info!(
        trees = trees.len(),
        total_samples,
        error = summary.error,
        "assembled forest"
    );

    Ok(Forest::new(
        summary.error,
        total_samples,
        summary.correlation_matrix,
        trees,
    ))
}

/// Reads a data folder and assembles its [Forest].
///
/// See [`read_data_folder`] for the expected folder layout and
/// [`assemble_forest`] for the possible errors.
///
/// # Example
/// ```no_run
/// use arborist::forest::parse_data_folder;
///
/// let forest = parse_data_folder("iris_forest")?;
/// println!("{} trees, error {}", forest.num_trees(), forest.error());
///
/// # Ok::<(), arborist::parser::ParsingError>(())
/// ```
pub fn parse_data_folder<P: AsRef<Path>>(path: P) -> Result<Forest, ParsingError> {
    let folder = read_data_folder(path)?;
    assemble_forest(&folder.forest, &folder.trees)
}
