use std::fmt;

/// Why a `.cmap` source was rejected, and where.
///
/// Positions point at the first character of the offending token: the
/// stop value for channel-count errors, the number itself for bad
/// `resolution` or `domain` arguments. Both are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: message.into(), line, col }
    }

    /// `(line, col)` of the error.
    #[inline]
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}
