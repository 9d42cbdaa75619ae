//! Basic low-level line parser functionality and parsing errors.
pub mod line_parser;
pub mod parsing_error;

pub use line_parser::LineParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
