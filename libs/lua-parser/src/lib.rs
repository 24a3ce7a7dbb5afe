//! # Lua Parser (Pure Rust)
//!
//! A pure Rust parser for Lua 5.3 source code.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → lua_ast::Chunk
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lua_parser::parse;
//!
//! let chunk = parse("local x = 1 + 2").unwrap();
//! assert_eq!(chunk.body.body.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the front end of the vlua pipeline:
//!
//! ```text
//! lua-parser → lua-ast → vlua-render → vlua-cli
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use span::{Position, Span};

use lua_ast::Chunk;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse Lua source code into a syntax tree.
///
/// This is the main entry point for the parser. Nesting is limited to
/// [`config::constants::MAX_NESTING_DEPTH`].
///
/// ## Example
///
/// ```rust
/// use lua_parser::parse;
///
/// assert!(parse("for i = 1, 10 do end").is_ok());
/// assert!(parse("for i = 1 do end").is_err());
/// ```
pub fn parse(source: &str) -> Result<Chunk, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(tokens).parse()
}

/// Parse with a custom nesting limit.
///
/// ## Example
///
/// ```rust
/// use lua_parser::{parse_with_limit, ParseErrorKind};
///
/// let err = parse_with_limit("x = ((((1))))", 3).unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 3 });
/// ```
pub fn parse_with_limit(source: &str, max_depth: usize) -> Result<Chunk, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::with_max_depth(tokens, max_depth).parse()
}

// =============================================================================
// TESTS
// =============================================================================
