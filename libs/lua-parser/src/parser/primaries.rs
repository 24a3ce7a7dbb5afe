//! # Primary Expression Parsing
//!
//! Parses primary expressions: literals, names, parenthesized expressions.
//!
//! ## Responsibilities
//!
//! - Constants: `nil`, `true`, `false`, `...`
//! - Numerals: `42`, `3.14`, `0xff`
//! - Strings: `'a'`, `"b"`, `[[c]]`
//! - Function literals and table constructors
//! - Names and `( exp )`, which may be followed by suffixes

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{parse_number, TokenKind};
use lua_ast::Expr;

impl Parser {
    /// Parse a simple expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// simpleexp = "nil" | "true" | "false" | Numeral | LiteralString | "..."
    ///           | functiondef | tableconstructor | suffixedexp
    /// ```
    pub(super) fn parse_simple_expression(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::Nil)
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::True)
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::False)
            }
            TokenKind::Ellipsis => {
                self.advance();
                Ok(Expr::Varargs)
            }
            TokenKind::Number => {
                let token = self.advance();
                match parse_number(&token.text) {
                    Some(number) => Ok(Expr::Number(number)),
                    None => Err(ParseError::new(
                        ParseErrorKind::InvalidNumber { text: token.text },
                        token.span,
                    )),
                }
            }
            TokenKind::String(delimiter) => {
                let token = self.advance();
                Ok(Expr::string(token.text, delimiter))
            }
            TokenKind::Function => self.parse_anonymous_function(),
            TokenKind::LBrace => Ok(Expr::Table(self.parse_table()?)),
            _ => self.parse_suffixed_expression(),
        }
    }

    /// Parse the head of a suffixed expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// primaryexp = Name | "(" exp ")"
    /// ```
    pub(super) fn parse_primary_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            TokenKind::Name => Ok(Expr::Name(self.expect_name()?)),
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
