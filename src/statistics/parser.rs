//! Structs and logic to parse tree statistics dumps.
//!
//! This module provides the [StatisticsParser] struct, which reads node
//! records line by line and hands them to a [TreeAssembler] that
//! reconstructs the tree from the pre-order depth sequence.

use crate::model::{DecisionTree, SplitFields};
use crate::parser::line_parser::LineParser;
use crate::parser::parsing_error::ParsingError;
use crate::statistics::assembler::TreeAssembler;
use crate::statistics::defs::{
    CLASS_SEPARATOR, FIELD_SEPARATOR, FIRST_SPLIT_FIELD, INTERNAL_NUM_FIELDS, LEAF_NUM_FIELDS,
    NUM_HEADER_LINES,
};
use std::str::FromStr;
use tracing::debug;

// =#========================================================================#=
// STATISTICS PARSER
// =#========================================================================#=
/// Parser (configuration) for a single decision tree dump.
///
/// # Configuration
/// * [`with_header_lines(n)`](Self::with_header_lines)
///     - Number of leading lines to discard, 2 by default.
///
/// # Parsing
/// * [`parse`](Self::parse) - Parse the tree from a [LineParser]
///
/// # Example
/// ```
/// use arborist::parser::LineParser;
/// use arborist::statistics::StatisticsParser;
///
/// let text = "0;100;0.5;0.2;f;g;h;i;j;k;l\n1;40;0.1;0;2;36,4\n1;60;0.3;1;2;15,45";
/// let mut line_parser = LineParser::for_str(text);
/// let tree = StatisticsParser::new()
///     .with_header_lines(0)
///     .parse(&mut line_parser)
///     .unwrap();
/// assert_eq!(tree.num_nodes(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsParser {
    num_header_lines: usize,
}

impl StatisticsParser {
    /// Creates a new [StatisticsParser] discarding two header lines.
    pub fn new() -> Self {
        Self {
            num_header_lines: NUM_HEADER_LINES,
        }
    }

    /// Sets the number of leading header lines to discard.
    pub fn with_header_lines(mut self, num_header_lines: usize) -> Self {
        self.num_header_lines = num_header_lines;
        self
    }

    /// Parses one tree from the given [LineParser].
    ///
    /// Header lines are skipped, blank lines are ignored, and every other
    /// line until EOF must be a node record in pre-order.
    ///
    /// # Returns
    /// * `Ok(DecisionTree)` - The reconstructed tree
    /// * `Err(ParsingError)` - [Format](crate::parser::ParsingErrorType::Format)
    ///   if a record is malformed or there are none,
    ///   [Structural](crate::parser::ParsingErrorType::Structural) if the
    ///   depth sequence is not a valid pre-order encoding
    pub fn parse(&self, parser: &mut LineParser) -> Result<DecisionTree, ParsingError> {
        parser.skip_lines(self.num_header_lines);

        let mut assembler = TreeAssembler::new();
        while let Some(line) = parser.next_record() {
            let record = parse_record(line, parser)?;
            assembler.add(record, parser)?;
        }

        let tree = assembler
            .finish()
            .ok_or_else(|| ParsingError::format(parser, "no node records found".to_string()))?;

        debug!(
            nodes = tree.num_nodes(),
            leaves = tree.num_leaves(),
            max_depth = tree.max_depth(),
            "parsed tree statistics"
        );
        Ok(tree)
    }
}

impl Default for StatisticsParser {
    fn default() -> Self {
        Self::new()
    }
}

// =#========================================================================#=
// NODE RECORD
// =#========================================================================#=
/// One parsed line of a tree dump.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeRecord {
    /// `depth;samples;impurity;impurity_drop;` followed by 7 pass-through fields
    Internal {
        depth: usize,
        samples: u64,
        impurity: f64,
        impurity_drop: f64,
        split: SplitFields,
    },
    /// `depth;samples;impurity;leaf_id;num_classes;c0,c1,...`
    Leaf {
        depth: usize,
        samples: u64,
        impurity: f64,
        leaf_id: u32,
        classes: Vec<u64>,
    },
}

impl NodeRecord {
    pub(crate) fn depth(&self) -> usize {
        match self {
            NodeRecord::Internal { depth, .. } | NodeRecord::Leaf { depth, .. } => *depth,
        }
    }
}

/// Parses a node record, dispatching on the number of fields.
fn parse_record(line: &str, parser: &LineParser) -> Result<NodeRecord, ParsingError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    match fields.len() {
        INTERNAL_NUM_FIELDS => {
            let split = fields[FIRST_SPLIT_FIELD..]
                .iter()
                .map(|f| f.to_string())
                .collect();
            Ok(NodeRecord::Internal {
                depth: parse_field(fields[0], "depth", parser)?,
                samples: parse_field(fields[1], "samples", parser)?,
                impurity: parse_field(fields[2], "impurity", parser)?,
                impurity_drop: parse_field(fields[3], "impurity drop", parser)?,
                split: SplitFields::new(split),
            })
        }
        LEAF_NUM_FIELDS => {
            let num_classes: usize = parse_field(fields[4], "number of classes", parser)?;
            if num_classes == 0 {
                return Err(ParsingError::format(
                    parser,
                    "Leaf must have at least one class".to_string(),
                ));
            }
            let classes = parse_classes(fields[5], parser)?;
            if classes.len() != num_classes {
                return Err(ParsingError::format(
                    parser,
                    format!(
                        "Leaf declares {} classes but lists {} counts",
                        num_classes,
                        classes.len()
                    ),
                ));
            }
            Ok(NodeRecord::Leaf {
                depth: parse_field(fields[0], "depth", parser)?,
                samples: parse_field(fields[1], "samples", parser)?,
                impurity: parse_field(fields[2], "impurity", parser)?,
                leaf_id: parse_field(fields[3], "leaf id", parser)?,
                classes,
            })
        }
        n => Err(ParsingError::format(
            parser,
            format!(
                "Expected {} fields (internal node) or {} fields (leaf) but found {}",
                INTERNAL_NUM_FIELDS, LEAF_NUM_FIELDS, n
            ),
        )),
    }
}

/// Parses the `,`-separated per-class counts of a leaf record.
fn parse_classes(field: &str, parser: &LineParser) -> Result<Vec<u64>, ParsingError> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field
        .split(CLASS_SEPARATOR)
        .map(|count| parse_field(count.trim(), "class count", parser))
        .collect()
}

/// Parses a single numeric field, naming it in the error.
fn parse_field<T: FromStr>(field: &str, name: &str, parser: &LineParser) -> Result<T, ParsingError> {
    field.parse().map_err(|_| {
        ParsingError::format(parser, format!("Invalid {}: {:?}", name, field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> Result<NodeRecord, ParsingError> {
        let parser = LineParser::for_str(line);
        parse_record(line, &parser)
    }

    #[test]
    fn internal_record_keeps_split_fields() {
        let rec = record("2;50;0.25;0.05;3;petal_width;<=;1.75;left;17;x").unwrap();
        match rec {
            NodeRecord::Internal {
                depth,
                samples,
                split,
                ..
            } => {
                assert_eq!(depth, 2);
                assert_eq!(samples, 50);
                assert_eq!(split.len(), 7);
                assert_eq!(split.get(1), Some("petal_width"));
                assert_eq!(split.get(6), Some("x"));
            }
            NodeRecord::Leaf { .. } => panic!("expected internal record"),
        }
    }

    #[test]
    fn leaf_record_with_spaces() {
        let rec = record(" 1 ; 40 ; 0.1 ; 7 ; 3 ; 30, 6, 4 ").unwrap();
        assert_eq!(
            rec,
            NodeRecord::Leaf {
                depth: 1,
                samples: 40,
                impurity: 0.1,
                leaf_id: 7,
                classes: vec![30, 6, 4],
            }
        );
    }

    #[test]
    fn leaf_class_count_mismatch() {
        assert!(record("1;40;0.1;7;2;30,6,4").is_err());
    }

    #[test]
    fn leaf_without_classes() {
        assert!(record("1;0;0.0;7;0;").is_err());
    }

    #[test]
    fn non_numeric_depth() {
        assert!(record("one;40;0.1;7;1;40").is_err());
    }
}
