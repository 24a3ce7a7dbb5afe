//! # Postfix Expression Parsing
//!
//! Parses suffixed expressions: calls, method calls, field and index access.
//!
//! ## Responsibilities
//!
//! - Function calls: `f(x)`, `f{...}`, `f"str"`
//! - Method calls: `obj:m(x)`
//! - Field access: `v.x`
//! - Index access: `t[i]`

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use lua_ast::{Expr, Invoke};

impl Parser {
    /// Parse a prefix expression followed by any number of suffixes.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// suffixedexp = primaryexp { "." Name | "[" exp "]" | ":" Name args | args }
    /// ```
    ///
    /// ## Example
    ///
    /// ```text
    /// a.b[c]:d(e)("f"){g}
    /// ```
    pub(super) fn parse_suffixed_expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary_prefix()?;

        loop {
            match self.peek_kind() {
                // Field access
                TokenKind::Dot => {
                    self.advance();
                    expr = Expr::dot(expr, self.expect_name()?.id);
                }
                // Index access
                TokenKind::LBracket => {
                    self.advance();
                    let idx = self.parse_expression()?;
                    self.expect(TokenKind::RBracket)?;
                    expr = Expr::bracket(expr, idx);
                }
                // Method call
                TokenKind::Colon => {
                    self.advance();
                    let func = self.expect_name()?;
                    let args = self.parse_call_arguments()?;
                    expr = Expr::Invoke(Invoke {
                        source: Box::new(expr),
                        func,
                        args,
                    });
                }
                // Function call
                TokenKind::LParen | TokenKind::LBrace | TokenKind::String(_) => {
                    let args = self.parse_call_arguments()?;
                    expr = Expr::call(expr, args);
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Parse call arguments.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// args = "(" [ explist ] ")" | tableconstructor | LiteralString
    /// ```
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        match self.peek_kind() {
            TokenKind::LParen => {
                self.advance();
                let args = if self.check(TokenKind::RParen) {
                    Vec::new()
                } else {
                    self.parse_expression_list()?
                };
                self.expect(TokenKind::RParen)?;
                Ok(args)
            }
            TokenKind::LBrace => Ok(vec![Expr::Table(self.parse_table()?)]),
            TokenKind::String(delimiter) => {
                let token = self.advance();
                Ok(vec![Expr::string(token.text, delimiter)])
            }
            _ => Err(self.unexpected("function arguments")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use lua_ast::{Delimiter, Expr, Field, Stmt, Table};

    fn parse_call(source: &str) -> Expr {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let chunk = Parser::new(tokens).parse().unwrap();
        match chunk.body.body.into_iter().next() {
            Some(Stmt::Expr(expr)) => expr,
            other => panic!("expected call statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_chained_access() {
        assert_eq!(
            parse_call("a.b[1]()"),
            Expr::call(
                Expr::bracket(Expr::dot(Expr::name("a"), "b"), Expr::int(1)),
                vec![]
            )
        );
    }

    #[test]
    fn test_parse_method_call() {
        assert_eq!(
            parse_call("obj:move(1, 2)"),
            Expr::invoke(Expr::name("obj"), "move", vec![Expr::int(1), Expr::int(2)])
        );
    }

    #[test]
    fn test_parse_string_call() {
        assert_eq!(
            parse_call("require 'mod'"),
            Expr::call(
                Expr::name("require"),
                vec![Expr::string("mod", Delimiter::SingleQuote)]
            )
        );
    }

    #[test]
    fn test_parse_table_call() {
        assert_eq!(
            parse_call("f{1}"),
            Expr::call(
                Expr::name("f"),
                vec![Expr::Table(Table {
                    fields: vec![Field::positional(Expr::int(1))],
                })]
            )
        );
    }

    #[test]
    fn test_parse_parenthesized_prefix() {
        assert_eq!(
            parse_call("(f)(x)"),
            Expr::call(Expr::name("f"), vec![Expr::name("x")])
        );
    }
}
