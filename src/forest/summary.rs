//! Parsing of the forest summary (`forest.txt`).
//!
//! The summary consists of three blocks separated by blank lines:
//! 1. Correlation matrix in brackets, rows separated by `;` and a newline,
//!    values by `,`
//! 2. Out-of-bag error of each tree, one per line
//! 3. Overall error of the forest
//!
//! ```text
//! [1.0,0.3;
//! 0.3,1.0]
//!
//! 0.12
//! 0.15
//!
//! 0.08
//! ```

use crate::forest::defs::{MATRIX_CLOSE, MATRIX_OPEN, ROW_SEPARATOR, VALUE_SEPARATOR};
use crate::parser::line_parser::LineParser;
use crate::parser::parsing_error::ParsingError;
use nalgebra::DMatrix;
use tracing::warn;

/// Contents of a forest summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestSummary {
    /// Pairwise tree correlations
    pub correlation_matrix: DMatrix<f64>,
    /// Out-of-bag error per tree, in file order
    pub oob_errors: Vec<f64>,
    /// Overall error of the forest
    pub error: f64,
}

/// Parses a forest summary.
///
/// # Returns
/// * [ForestSummary] - The three blocks of the summary
/// * [ParsingError] - [Format](crate::parser::ParsingErrorType::Format) if a
///   block is missing, a value is not a float, or the matrix is not square
///
/// # Example
/// ```
/// use arborist::forest::parse_forest_summary;
///
/// let summary = parse_forest_summary("[1,0.5;\n0.5,1]\n\n0.1\n0.2\n\n0.05\n")?;
/// assert_eq!(summary.correlation_matrix[(0, 1)], 0.5);
/// assert_eq!(summary.oob_errors, vec![0.1, 0.2]);
/// assert_eq!(summary.error, 0.05);
///
/// # Ok::<(), arborist::parser::ParsingError>(())
/// ```
pub fn parse_forest_summary<S: AsRef<str>>(text: S) -> Result<ForestSummary, ParsingError> {
    let mut parser = LineParser::for_str(text.as_ref());

    let matrix_block = next_block(&mut parser, "correlation matrix")?;
    let correlation_matrix = parse_matrix(&matrix_block, &parser)?;

    let oob_block = next_block(&mut parser, "out-of-bag errors")?;
    let oob_errors = oob_block
        .iter()
        .map(|line| parse_float(line, "out-of-bag error", &parser))
        .collect::<Result<Vec<_>, _>>()?;

    let error_block = next_block(&mut parser, "overall error")?;
    if error_block.len() != 1 {
        return Err(ParsingError::format(
            &parser,
            format!(
                "Expected a single overall error but found {} lines",
                error_block.len()
            ),
        ));
    }
    let error = parse_float(error_block[0], "overall error", &parser)?;

    parser.skip_blank_lines();
    if !parser.is_eof() {
        warn!(line = parser.position() + 1, "ignoring trailing content in forest summary");
    }

    Ok(ForestSummary {
        correlation_matrix,
        oob_errors,
        error,
    })
}

/// Returns the next non-empty block, or a format error naming the missing block.
fn next_block<'a>(parser: &mut LineParser<'a>, name: &str) -> Result<Vec<&'a str>, ParsingError> {
    let block = parser.next_block();
    if block.is_empty() {
        return Err(ParsingError::format(
            parser,
            format!("Missing block: {}", name),
        ));
    }
    Ok(block)
}

/// Parses the bracketed correlation matrix, which must be square.
fn parse_matrix(block: &[&str], parser: &LineParser) -> Result<DMatrix<f64>, ParsingError> {
    let joined = block.join("\n");
    let inner = joined
        .trim()
        .trim_start_matches(MATRIX_OPEN)
        .trim_end_matches(MATRIX_CLOSE);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for row in inner.split(ROW_SEPARATOR) {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let values = row
            .split(VALUE_SEPARATOR)
            .map(|v| parse_float(v.trim(), "correlation", parser))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(values);
    }

    let size = rows.len();
    if let Some(row) = rows.iter().find(|r| r.len() != size) {
        return Err(ParsingError::format(
            parser,
            format!(
                "Correlation matrix must be square: {} rows but a row with {} values",
                size,
                row.len()
            ),
        ));
    }

    let values: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(DMatrix::from_row_slice(size, size, &values))
}

fn parse_float(token: &str, name: &str, parser: &LineParser) -> Result<f64, ParsingError> {
    token
        .parse()
        .map_err(|_| ParsingError::format(parser, format!("Invalid {}: {:?}", name, token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(text: &str) -> Result<DMatrix<f64>, ParsingError> {
        let parser = LineParser::for_str(text);
        let block: Vec<&str> = text.lines().collect();
        parse_matrix(&block, &parser)
    }

    #[test]
    fn matrix_rows_in_order() {
        let m = matrix("[1,0.2,0.3;\n0.2,1,0.4;\n0.3,0.4,1]").unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m[(0, 2)], 0.3);
        assert_eq!(m[(2, 1)], 0.4);
    }

    #[test]
    fn matrix_single_tree() {
        let m = matrix("[1.0]").unwrap();
        assert_eq!(m.shape(), (1, 1));
    }

    #[test]
    fn matrix_trailing_separator_is_ignored() {
        let m = matrix("[1,0;\n0,1;]").unwrap();
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn matrix_ragged_rows() {
        assert!(matrix("[1,0.2;\n0.2]").is_err());
    }

    #[test]
    fn matrix_non_square() {
        assert!(matrix("[1,0.2,0.1;\n0.2,1,0.3]").is_err());
    }

    #[test]
    fn matrix_bad_token() {
        assert!(matrix("[1,x;\n0.2,1]").is_err());
    }
}
