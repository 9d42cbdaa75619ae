//! Error types for tree and forest parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while parsing random forest dumps.

use crate::parser::line_parser::LineParser;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 80;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================€=
/// Error types that can occur during tree and forest parsing.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// Reading input failed
    IoError(String),
    /// Unparseable numeric data or unexpected number of fields
    Format(String),
    /// Depth sequence is not a valid pre-order encoding of a binary tree
    Structural(String),
    /// No trees were provided for a forest
    EmptyForest,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and line content).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser(kind: ParsingErrorType, parser: &LineParser) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for Format
    pub fn format(parser: &LineParser, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::Format(msg), parser)
    }

    /// Convenience constructor for Structural
    pub fn structural(parser: &LineParser, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::Structural(msg), parser)
    }

    /// Create a ParsingError without parser context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Prefixes the message of this error, e.g. with the file it stems from.
    pub(crate) fn in_source(mut self, source: &str) -> Self {
        self.kind = match self.kind {
            ParsingErrorType::Format(msg) => ParsingErrorType::Format(format!("{source}: {msg}")),
            ParsingErrorType::Structural(msg) => {
                ParsingErrorType::Structural(format!("{source}: {msg}"))
            }
            ParsingErrorType::IoError(msg) => ParsingErrorType::IoError(format!("{source}: {msg}")),
            ParsingErrorType::EmptyForest => ParsingErrorType::EmptyForest,
        };
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the (1-based) line where the error occurred, 0 if unknown
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        match &self.kind {
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
            ParsingErrorType::Format(msg) => write!(f, "Invalid format - {msg}")?,
            ParsingErrorType::Structural(msg) => write!(f, "Invalid tree structure - {msg}")?,
            ParsingErrorType::EmptyForest => write!(f, "Forest contains no trees")?,
        }

        // Additional position information
        if self.position > 0 {
            write!(f, " at line {}", self.position)?;
        }

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context: {}", self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
