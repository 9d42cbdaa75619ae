//! Line-by-line cursor for text dumps.
//!
//! This module provides [LineParser], used as the foundation of both the
//! tree statistics parser and the forest summary parser. It tracks the
//! current line number, so errors can point at the offending line.

// =#========================================================================#=
// LINE PARSER
// =#========================================================================#=
/// A cursor over the lines of a text, with support for peeking, skipping
/// blank lines and reading blank-line separated blocks.
///
/// Line endings `\n` and `\r\n` are both accepted.
///
/// # Example
/// ```
/// use arborist::parser::LineParser;
///
/// let mut parser = LineParser::for_str("header\n\n0;1\n1;2\n\nlast");
/// parser.skip_lines(1);
/// assert_eq!(parser.next_block(), vec!["0;1", "1;2"]);
/// assert_eq!(parser.next_record(), Some("last"));
/// assert!(parser.is_eof());
/// ```
pub struct LineParser<'a> {
    lines: Vec<&'a str>,
    /// Number of consumed lines, i.e. index of the next line
    pos: usize,
}

impl<'a> LineParser<'a> {
    /// Creates a new `LineParser` over the given text.
    ///
    /// # Arguments
    /// * `input` - The text to parse
    pub fn for_str(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
        }
    }

    /// Peeks at the next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Gets the next line and advances (consumes it).
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Skips (consumes) up to `n` lines.
    ///
    /// # Returns
    /// The number of lines actually skipped.
    pub fn skip_lines(&mut self, n: usize) -> usize {
        let skipped = n.min(self.lines.len() - self.pos);
        self.pos += skipped;
        skipped
    }

    /// Skips (consumes) all consecutive blank lines.
    pub fn skip_blank_lines(&mut self) {
        while self.peek().is_some_and(|l| l.trim().is_empty()) {
            self.pos += 1;
        }
    }

    /// Returns the next non-blank line, trimmed, skipping blank lines before it.
    pub fn next_record(&mut self) -> Option<&'a str> {
        self.skip_blank_lines();
        self.next_line().map(str::trim)
    }

    /// Returns the next block of non-blank lines (trimmed), i.e. all lines
    /// up to the next blank line or EOF. Leading blank lines are skipped.
    ///
    /// # Returns
    /// An empty vector if only blank lines remain.
    pub fn next_block(&mut self) -> Vec<&'a str> {
        self.skip_blank_lines();
        let mut block = Vec::new();
        while let Some(line) = self.peek() {
            if line.trim().is_empty() {
                break;
            }
            block.push(line.trim());
            self.pos += 1;
        }
        block
    }

    /// Check if at end of input, i.e. no lines remain.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Returns the 1-based number of the most recently consumed line,
    /// or 0 if nothing has been consumed yet.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the most recently consumed line, cut to at most `k` chars,
    /// for error context.
    pub fn get_context(&self, k: usize) -> String {
        if self.pos == 0 {
            return String::new();
        }
        self.lines[self.pos - 1].chars().take(k).collect()
    }
}
