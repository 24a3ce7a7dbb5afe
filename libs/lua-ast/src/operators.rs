//! # Operators
//!
//! Binary and unary operator kinds of Lua 5.3.

use serde::{Deserialize, Serialize};

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOpKind {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    // Bitwise
    BAnd,
    BOr,
    BXor,
    Shr,
    Shl,
    // Comparison
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    // Logical
    And,
    Or,
    // String
    Concat,
}

impl BinaryOpKind {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOpKind; 21] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::FloorDiv,
        Self::Mod,
        Self::Pow,
        Self::BAnd,
        Self::BOr,
        Self::BXor,
        Self::Shr,
        Self::Shl,
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Ge,
        Self::Eq,
        Self::Ne,
        Self::And,
        Self::Or,
        Self::Concat,
    ];

    /// Right-associative operators (`..` and `^`).
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Concat | Self::Pow)
    }
}

/// Unary operator kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOpKind {
    /// `-x`
    Neg,
    /// `~x`
    BNot,
    /// `not x`
    Not,
    /// `#x`
    Len,
}

impl UnaryOpKind {
    /// Every unary operator, in declaration order.
    pub const ALL: [UnaryOpKind; 4] = [Self::Neg, Self::BNot, Self::Not, Self::Len];
}
