//! Constants for the forest summary format and data folder layout.

/// Opening bracket of the correlation matrix
pub(crate) const MATRIX_OPEN: char = '[';

/// Closing bracket of the correlation matrix
pub(crate) const MATRIX_CLOSE: char = ']';

/// Separator between correlation matrix rows
pub(crate) const ROW_SEPARATOR: char = ';';

/// Separator between values within a correlation matrix row
pub(crate) const VALUE_SEPARATOR: char = ',';

/// File name of the forest summary within a data folder
pub(crate) const FOREST_FILE_NAME: &str = "forest.txt";

/// File name prefix of tree dumps within a data folder
pub(crate) const TREE_FILE_PREFIX: &str = "tree_";

/// File name suffix of tree dumps within a data folder
pub(crate) const TREE_FILE_SUFFIX: &str = ".txt";
