//! # Control Flow Parsing
//!
//! Parses loops, `do` blocks and if-chains.
//!
//! ## Grammar
//!
//! ```text
//! while  = "while" exp "do" block "end"
//! do     = "do" block "end"
//! repeat = "repeat" block "until" exp
//! if     = "if" exp "then" block { "elseif" exp "then" block } [ "else" block ] "end"
//! for    = "for" Name "=" exp "," exp [ "," exp ] "do" block "end"
//!        | "for" namelist "in" explist "do" block "end"
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use lua_ast::{Block, ElseBranch, ElseIf, Expr, Forin, Fornum, If, Repeat, Stmt, While};

impl Parser {
    pub(super) fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::While)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::End)?;

        Ok(Stmt::While(While { test, body }))
    }

    pub(super) fn parse_do(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::End)?;

        Ok(Stmt::Do(body))
    }

    pub(super) fn parse_repeat(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Repeat)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::Until)?;
        let test = self.parse_expression()?;

        Ok(Stmt::Repeat(Repeat { body, test }))
    }

    /// Parse an if-chain.
    ///
    /// `elseif` clauses become a right-nested [`ElseBranch`] chain, each link
    /// owning the rest of the chain; a final `else` ends it.
    pub(super) fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_block()?;

        let mut clauses: Vec<(Expr, Block)> = Vec::new();
        while self.match_token(TokenKind::ElseIf) {
            let test = self.parse_expression()?;
            self.expect(TokenKind::Then)?;
            clauses.push((test, self.parse_block()?));
        }

        let mut orelse = if self.match_token(TokenKind::Else) {
            Some(ElseBranch::Else(self.parse_block()?))
        } else {
            None
        };
        self.expect(TokenKind::End)?;

        for (test, body) in clauses.into_iter().rev() {
            orelse = Some(ElseBranch::ElseIf(Box::new(ElseIf { test, body, orelse })));
        }

        Ok(Stmt::If(If { test, body, orelse }))
    }

    /// Parse a numeric or generic `for`, told apart by the token after the
    /// first name.
    pub(super) fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::For)?;
        let first = self.expect_name()?;

        match self.peek_kind() {
            TokenKind::Eq => {
                self.advance();
                let start = self.parse_expression()?;
                self.expect(TokenKind::Comma)?;
                let stop = self.parse_expression()?;
                let step = if self.match_token(TokenKind::Comma) {
                    self.parse_expression()?
                } else {
                    Expr::int(1)
                };
                let body = self.parse_loop_body()?;

                Ok(Stmt::Fornum(Fornum {
                    target: first,
                    start,
                    stop,
                    step,
                    body,
                }))
            }
            TokenKind::Comma | TokenKind::In => {
                let mut targets = vec![first];
                while self.match_token(TokenKind::Comma) {
                    targets.push(self.expect_name()?);
                }
                self.expect(TokenKind::In)?;
                let iter = self.parse_expression_list()?;
                let body = self.parse_loop_body()?;

                Ok(Stmt::Forin(Forin {
                    targets,
                    iter,
                    body,
                }))
            }
            _ => Err(self.unexpected("'=' or 'in'")),
        }
    }

    /// Parse `do block end`.
    fn parse_loop_body(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::Do)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::End)?;
        Ok(body)
    }
}

// =============================================================================
// TESTS
// =============================================================================
