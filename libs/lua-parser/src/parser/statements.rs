//! # Statement Parsing
//!
//! Parses blocks and simple statements: assignments, calls, labels, jumps.
//!
//! ## Grammar (Lua 5.3 manual §9)
//!
//! ```text
//! block     = { stat } [ retstat ]
//! stat      = ";" | varlist "=" explist | functioncall | label | "break"
//!           | "goto" Name | "do" block "end" | ...
//! retstat   = "return" [ explist ] [ ";" ]
//! label     = "::" Name "::"
//! ```

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use crate::span::Span;
use lua_ast::{Block, Expr, Stmt};

impl Parser {
    /// Parse a block up to (not including) the token that closes it.
    ///
    /// A `return` statement ends the block; anything after it other than a
    /// block terminator is reported by the caller.
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.nested(|parser| {
            let mut body = Vec::new();

            while !parser.peek_kind().is_block_follow() {
                if parser.check(TokenKind::Return) {
                    body.push(parser.parse_return()?);
                    break;
                }
                body.push(parser.parse_statement()?);
            }

            Ok(Block::new(body))
        })
    }

    /// Parse a single statement.
    ///
    /// ## Example
    ///
    /// ```text
    /// x, y = 1, 2
    /// print("hi")
    /// ::top::
    /// goto top
    /// ```
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            // Empty statement
            TokenKind::Semicolon => {
                self.advance();
                Ok(Stmt::SemiColon)
            }

            // Jumps and labels
            TokenKind::ColonColon => self.parse_label(),
            TokenKind::Break => {
                self.advance();
                Ok(Stmt::Break)
            }
            TokenKind::Goto => {
                self.advance();
                Ok(Stmt::Goto(self.expect_name()?))
            }

            // Control flow
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),

            // Declarations
            TokenKind::Function => self.parse_function_statement(),
            TokenKind::Local => {
                self.advance();
                if self.match_token(TokenKind::Function) {
                    self.parse_local_function()
                } else {
                    self.parse_local_assign()
                }
            }

            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `return [explist] [;]`.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return)?;

        let values = if self.peek_kind().is_block_follow() || self.check(TokenKind::Semicolon) {
            Vec::new()
        } else {
            self.parse_expression_list()?
        };
        self.match_token(TokenKind::Semicolon);

        Ok(Stmt::Return(values))
    }

    /// Parse `::name::`.
    fn parse_label(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::ColonColon)?;
        let name = self.expect_name()?;
        self.expect(TokenKind::ColonColon)?;
        Ok(Stmt::Label(name))
    }

    /// Parse `local namelist [= explist]` after the `local` keyword.
    fn parse_local_assign(&mut self) -> Result<Stmt, ParseError> {
        let mut targets = vec![Expr::Name(self.expect_name()?)];
        while self.match_token(TokenKind::Comma) {
            targets.push(Expr::Name(self.expect_name()?));
        }

        let values = if self.match_token(TokenKind::Eq) {
            self.parse_expression_list()?
        } else {
            Vec::new()
        };

        Ok(Stmt::local_assign(targets, values))
    }

    /// Parse an assignment or a call statement.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// exprstat = suffixedexp ( { "," suffixedexp } "=" explist )?
    /// ```
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.peek().span;
        let expr = self.parse_suffixed_expression()?;

        if !self.check(TokenKind::Eq) && !self.check(TokenKind::Comma) {
            return if expr.is_call() {
                Ok(Stmt::Expr(expr))
            } else {
                Err(self.unexpected("'='"))
            };
        }

        let mut targets = vec![Self::assignment_target(expr, start)?];
        while self.match_token(TokenKind::Comma) {
            let start = self.peek().span;
            let target = self.parse_suffixed_expression()?;
            targets.push(Self::assignment_target(target, start)?);
        }

        self.expect(TokenKind::Eq)?;
        let values = self.parse_expression_list()?;

        Ok(Stmt::assign(targets, values))
    }

    fn assignment_target(expr: Expr, span: Span) -> Result<Expr, ParseError> {
        if expr.is_assignable() {
            Ok(expr)
        } else {
            Err(ParseError::new(ParseErrorKind::InvalidAssignmentTarget, span))
        }
    }

    /// Parse a comma-separated, non-empty expression list.
    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression()?];
        while self.match_token(TokenKind::Comma) {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
