//! # Parse Errors
//!
//! Error types for the Lua lexer and parser. The first error aborts parsing.
//!
//! ## Example
//!
//! ```rust
//! use lua_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "expression");
//! assert!(error.to_string().contains("unexpected token ')'"));
//! ```

use crate::span::Span;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create unexpected EOF error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::default(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// 1-indexed line of the error.
    pub fn line(&self) -> usize {
        self.span.start.line + 1
    }

    /// 1-indexed column of the error.
    pub fn column(&self) -> usize {
        self.span.start.column + 1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind,
            self.line(),
            self.column()
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    /// Unexpected end of file.
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Character that cannot start any token.
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char },

    /// Malformed numeral.
    #[error("malformed number '{text}'")]
    InvalidNumber { text: String },

    /// String literal without its closing delimiter.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Long comment without its closing bracket.
    #[error("unterminated long comment")]
    UnterminatedComment,

    /// Left side of `=` is not a variable.
    #[error("cannot assign to this expression")]
    InvalidAssignmentTarget,

    /// Blocks or expressions nested beyond the configured limit.
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

// =============================================================================
// TESTS
// =============================================================================
