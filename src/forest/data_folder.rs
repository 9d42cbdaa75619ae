//! Reading of a data folder holding `forest.txt` and `tree_<n>.txt` files.

use crate::forest::defs::{FOREST_FILE_NAME, TREE_FILE_PREFIX, TREE_FILE_SUFFIX};
use crate::parser::ParsingError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw contents of a data folder.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFolder {
    /// Content of `forest.txt`
    pub forest: String,
    /// Contents of the `tree_<n>.txt` files, ordered by `n`
    pub trees: Vec<String>,
}

/// Reads the forest summary and all tree dumps of a data folder as UTF-8.
///
/// Tree dumps are the files named `tree_<n>.txt` with a non-negative
/// integer `n`; they are ordered by `n` numerically (so `tree_10.txt`
/// comes after `tree_9.txt`). Other files are ignored.
///
/// # Arguments
/// * `path` - Path of the folder
///
/// # Returns
/// * [DataFolder] - Raw file contents
/// * [ParsingError] - [IoError](crate::parser::ParsingErrorType::IoError) if
///   the folder or `forest.txt` cannot be read or a file is not UTF-8
pub fn read_data_folder<P: AsRef<Path>>(path: P) -> Result<DataFolder, ParsingError> {
    let path = path.as_ref();
    let forest_path = path.join(FOREST_FILE_NAME);
    let forest = fs::read_to_string(&forest_path)
        .map_err(|e| ParsingError::from(e).in_source(&forest_path.display().to_string()))?;

    let mut tree_files: Vec<(usize, PathBuf)> = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(index) = name.to_str().and_then(tree_file_index) else {
            continue;
        };
        tree_files.push((index, entry.path()));
    }
    tree_files.sort();

    let trees = tree_files
        .iter()
        .map(|(_, file)| {
            fs::read_to_string(file)
                .map_err(|e| ParsingError::from(e).in_source(&file.display().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(folder = %path.display(), trees = trees.len(), "read data folder");
    Ok(DataFolder { forest, trees })
}

/// Returns `n` if `file_name` is `tree_<n>.txt`.
fn tree_file_index(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix(TREE_FILE_PREFIX)?
        .strip_suffix(TREE_FILE_SUFFIX)?
        .parse()
        .ok()
}
