//! # Function Declarations
//!
//! ## Grammar
//!
//! ```text
//! funcstat  = "function" funcname funcbody
//! funcname  = Name { "." Name } [ ":" Name ]
//! localfunc = "local" "function" Name funcbody
//! funcbody  = "(" [ parlist ] ")" block "end"
//! parlist   = namelist [ "," "..." ] | "..."
//! ```

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use lua_ast::{AnonymousFunction, Block, Expr, Function, LocalFunction, Method, Stmt};

impl Parser {
    /// Parse `function a.b.c(...)` or `function a.b:c(...)`.
    pub(super) fn parse_function_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Function)?;

        let mut name = Expr::Name(self.expect_name()?);
        while self.match_token(TokenKind::Dot) {
            name = Expr::dot(name, self.expect_name()?.id);
        }

        if self.match_token(TokenKind::Colon) {
            let method = self.expect_name()?;
            let (args, body) = self.parse_function_body()?;
            return Ok(Stmt::Method(Method {
                source: name,
                name: method,
                args,
                body,
            }));
        }

        let (args, body) = self.parse_function_body()?;
        Ok(Stmt::Function(Function { name, args, body }))
    }

    /// Parse `Name funcbody` after `local function`.
    pub(super) fn parse_local_function(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_name()?;
        let (args, body) = self.parse_function_body()?;
        Ok(Stmt::LocalFunction(LocalFunction { name, args, body }))
    }

    /// Parse a function literal `function (...) ... end`.
    pub(super) fn parse_anonymous_function(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::Function)?;
        let (args, body) = self.parse_function_body()?;
        Ok(Expr::AnonymousFunction(AnonymousFunction { args, body }))
    }

    /// Parse parameters and body. Parameters are names, optionally followed
    /// by a trailing `...`.
    fn parse_function_body(&mut self) -> Result<(Vec<Expr>, Block), ParseError> {
        self.expect(TokenKind::LParen)?;

        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                match self.peek_kind() {
                    TokenKind::Ellipsis => {
                        self.advance();
                        args.push(Expr::Varargs);
                        break;
                    }
                    TokenKind::Name => args.push(Expr::Name(self.expect_name()?)),
                    _ => return Err(self.unexpected("name or '...'")),
                }
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        self.expect(TokenKind::End)?;

        Ok((args, body))
    }
}

// =============================================================================
// TESTS
// =============================================================================
