//! # Source Span
//!
//! Positions and ranges in Lua source, used to locate parse errors.
//!
//! ## Usage
//!
//! ```rust
//! use lua_parser::{Position, Span};
//!
//! let span = Span::new(Position::new(0, 0, 0), Position::new(4, 0, 4));
//! assert_eq!(span.len(), 4);
//! ```

/// A point in the source: byte offset plus 0-indexed line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

/// A half-open range `[start, end)` in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span covering byte offsets only, with line/column left at zero.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self::new(Position::new(start, 0, 0), Position::new(end, 0, 0))
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::from_bytes(3, 10);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_inverted_span_is_empty() {
        assert!(Span::from_bytes(5, 2).is_empty());
    }
}
