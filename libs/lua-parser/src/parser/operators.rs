//! # Operator Parsing
//!
//! Parses binary and unary operators using precedence climbing.
//!
//! ## Operator Precedence (Lua 5.3 manual §3.4.8)
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | or | Left |
//! | 2 | and | Left |
//! | 3 | < > <= >= ~= == | Left |
//! | 4 | \| | Left |
//! | 5 | ~ | Left |
//! | 6 | & | Left |
//! | 7 | << >> | Left |
//! | 8 | .. | Right |
//! | 9 | + - | Left |
//! | 10 | * / // % | Left |
//! | 11 | not # - ~ (unary) | Right |
//! | 12 | ^ | Right |
//!
//! `^` binds tighter than a unary operator on its left, so `-x^2` is
//! `-(x^2)`, while its right operand may itself start with one: `2^-3`.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use lua_ast::{BinaryOpKind, Expr, UnaryOpKind};

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Or = 1,
    And = 2,
    /// `< > <= >= ~= ==`
    Comparison = 3,
    BOr = 4,
    BXor = 5,
    BAnd = 6,
    /// `<< >>`
    Shift = 7,
    /// `..`
    Concat = 8,
    /// `+ -`
    Term = 9,
    /// `* / // %`
    Factor = 10,
    /// `not # - ~`
    Unary = 11,
    /// `^`
    Power = 12,
}

impl Precedence {
    /// Precedence and operator for a binary operator token.
    pub(super) fn of_binary(kind: TokenKind) -> Option<(Self, BinaryOpKind)> {
        let entry = match kind {
            TokenKind::Or => (Self::Or, BinaryOpKind::Or),
            TokenKind::And => (Self::And, BinaryOpKind::And),
            TokenKind::Lt => (Self::Comparison, BinaryOpKind::Lt),
            TokenKind::Gt => (Self::Comparison, BinaryOpKind::Gt),
            TokenKind::LtEq => (Self::Comparison, BinaryOpKind::Le),
            TokenKind::GtEq => (Self::Comparison, BinaryOpKind::Ge),
            TokenKind::TildeEq => (Self::Comparison, BinaryOpKind::Ne),
            TokenKind::EqEq => (Self::Comparison, BinaryOpKind::Eq),
            TokenKind::Pipe => (Self::BOr, BinaryOpKind::BOr),
            TokenKind::Tilde => (Self::BXor, BinaryOpKind::BXor),
            TokenKind::Amp => (Self::BAnd, BinaryOpKind::BAnd),
            TokenKind::LtLt => (Self::Shift, BinaryOpKind::Shl),
            TokenKind::GtGt => (Self::Shift, BinaryOpKind::Shr),
            TokenKind::DotDot => (Self::Concat, BinaryOpKind::Concat),
            TokenKind::Plus => (Self::Term, BinaryOpKind::Add),
            TokenKind::Minus => (Self::Term, BinaryOpKind::Sub),
            TokenKind::Star => (Self::Factor, BinaryOpKind::Mul),
            TokenKind::Slash => (Self::Factor, BinaryOpKind::Div),
            TokenKind::SlashSlash => (Self::Factor, BinaryOpKind::FloorDiv),
            TokenKind::Percent => (Self::Factor, BinaryOpKind::Mod),
            TokenKind::Caret => (Self::Power, BinaryOpKind::Pow),
            _ => return None,
        };
        Some(entry)
    }

    /// Get next higher precedence level.
    ///
    /// Used for the right operand of left-associative operators.
    pub(super) fn next(&self) -> Self {
        match self {
            Self::Or => Self::And,
            Self::And => Self::Comparison,
            Self::Comparison => Self::BOr,
            Self::BOr => Self::BXor,
            Self::BXor => Self::BAnd,
            Self::BAnd => Self::Shift,
            Self::Shift => Self::Concat,
            Self::Concat => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Unary,
            Self::Unary => Self::Power,
            Self::Power => Self::Power,
        }
    }
}

/// Unary operator for a prefix token.
fn unary_op(kind: TokenKind) -> Option<UnaryOpKind> {
    match kind {
        TokenKind::Minus => Some(UnaryOpKind::Neg),
        TokenKind::Not => Some(UnaryOpKind::Not),
        TokenKind::Hash => Some(UnaryOpKind::Len),
        TokenKind::Tilde => Some(UnaryOpKind::BNot),
        _ => None,
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl Parser {
    /// Parse a full expression.
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(Precedence::Or)
    }

    /// Parse expression with minimum precedence.
    ///
    /// Every call counts as one nesting level, so operator chains and
    /// parenthesized expressions are bounded by the parser's depth limit.
    pub(super) fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        self.nested(|parser| {
            let mut left = parser.parse_unary()?;

            while let Some((prec, op)) = Precedence::of_binary(parser.peek_kind()) {
                if prec < min_prec {
                    break;
                }
                parser.advance();

                let next_prec = if op.is_right_associative() {
                    prec
                } else {
                    prec.next()
                };
                let right = parser.parse_precedence(next_prec)?;
                left = Expr::binary(op, left, right);
            }

            Ok(left)
        })
    }

    /// Parse unary expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// unary = ("not" | "#" | "-" | "~") unary_operand | simpleexp
    /// ```
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = unary_op(self.peek_kind()) {
            self.advance();
            let operand = self.parse_precedence(Precedence::Unary)?;
            return Ok(Expr::unary(op, operand));
        }

        self.parse_simple_expression()
    }
}

// =============================================================================
// TESTS
// =============================================================================
