//! # Lua Parser
//!
//! Recursive descent parser for Lua 5.3.
//! Produces the typed syntax tree from `lua-ast`.
//!
//! ## Example
//!
//! ```rust
//! use lua_parser::lexer::Lexer;
//! use lua_parser::parser::Parser;
//!
//! let tokens = Lexer::new("print('hi')").tokenize().unwrap();
//! let chunk = Parser::new(tokens).parse().unwrap();
//! assert_eq!(chunk.body.body.len(), 1);
//! ```

mod collections;
mod control_flow;
mod declarations;
mod operators;
mod postfix;
mod primaries;
mod statements;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use config::constants::{MAX_NESTING_DEPTH, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use lua_ast::{Chunk, Name};
use stacker::maybe_grow;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for Lua.
///
/// Parsing stops at the first error; there is no recovery.
pub struct Parser {
    /// Token stream, always terminated by `Eof`.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Current nesting of blocks and expressions.
    depth: usize,
    /// Nesting limit.
    max_depth: usize,
}

impl Parser {
    /// Create a parser with the default nesting limit.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, MAX_NESTING_DEPTH)
    }

    /// Create a parser that rejects input nested deeper than `max_depth`.
    pub fn with_max_depth(mut tokens: Vec<Token>, max_depth: usize) -> Self {
        if !tokens.last().map_or(false, Token::is_eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end), String::new()));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole token stream as a chunk.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// chunk = block EOF
    /// ```
    pub fn parse(&mut self) -> Result<Chunk, ParseError> {
        let body = self.parse_block()?;
        if !self.is_at_end() {
            return Err(self.unexpected("end of file"));
        }
        Ok(Chunk::new(body))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Get the kind of the token after the current one.
    fn peek_next_kind(&self) -> TokenKind {
        let index = (self.current + 1).min(self.tokens.len() - 1);
        self.tokens[index].kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of file.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token, returning the consumed one.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Consume token if it matches expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("'{}'", kind.display())))
        }
    }

    /// Consume a `Name` token.
    fn expect_name(&mut self) -> Result<Name, ParseError> {
        if self.check(TokenKind::Name) {
            Ok(Name::new(self.advance().text))
        } else {
            Err(self.unexpected("name"))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Error for the current token, which was not `expected`.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        let error = if token.is_eof() {
            ParseError::unexpected_eof(expected)
        } else {
            ParseError::unexpected_token(&token.text, expected)
        };
        error.with_span(token.span)
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Fails once the nesting limit is reached; otherwise grows the stack as
    /// needed so deep but legal input cannot overflow it.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.peek().span,
            ));
        }

        self.depth += 1;
        let result = maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || f(self));
        self.depth -= 1;
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use lua_ast::{Expr, Stmt};

    fn parse(source: &str) -> Result<Chunk, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        let chunk = parse("").unwrap();
        assert!(chunk.body.is_empty());
    }

    #[test]
    fn test_parse_without_eof_token() {
        let mut tokens = Lexer::new("break").tokenize().unwrap();
        tokens.pop();
        let chunk = Parser::new(tokens).parse().unwrap();
        assert_eq!(chunk.body.body, vec![Stmt::Break]);
    }

    #[test]
    fn test_stray_end_is_error() {
        let err = parse("x = 1 end").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "end".to_string(),
                expected: "end of file".to_string(),
            }
        );
        assert_eq!(err.column(), 7);
    }

    #[test]
    fn test_missing_end_is_eof_error() {
        let err = parse("while x do").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_nesting_limit() {
        let source = format!("x = {}1{}", "(".repeat(20), ")".repeat(20));
        let tokens = Lexer::new(&source).tokenize().unwrap();
        let err = Parser::with_max_depth(tokens.clone(), 10).parse().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 10 });

        let chunk = Parser::with_max_depth(tokens, 100).parse().unwrap();
        assert_eq!(
            chunk.body.body,
            vec![Stmt::assign(vec![Expr::name("x")], vec![Expr::int(1)])]
        );
    }
}
