//! # Operator Translation
//!
//! Operator units and the fixed operator-to-symbol table.

use super::Translate;
use crate::element::{Element, Emphasis, Role};
use lua_ast::{BinaryOp, BinaryOpKind, UnaryOp, UnaryOpKind};

/// Source token of a binary operator.
///
/// ## Example
///
/// ```rust
/// use lua_ast::BinaryOpKind;
/// use vlua_render::translate::binary_symbol;
///
/// assert_eq!(binary_symbol(BinaryOpKind::FloorDiv), "//");
/// assert_eq!(binary_symbol(BinaryOpKind::Ne), "~=");
/// ```
pub const fn binary_symbol(op: BinaryOpKind) -> &'static str {
    match op {
        BinaryOpKind::Add => "+",
        BinaryOpKind::Sub => "-",
        BinaryOpKind::Mul => "*",
        BinaryOpKind::Div => "/",
        BinaryOpKind::FloorDiv => "//",
        BinaryOpKind::Mod => "%",
        BinaryOpKind::Pow => "^",
        BinaryOpKind::BAnd => "&",
        BinaryOpKind::BOr => "|",
        BinaryOpKind::BXor => "~",
        BinaryOpKind::Shr => ">>",
        BinaryOpKind::Shl => "<<",
        BinaryOpKind::Lt => "<",
        BinaryOpKind::Gt => ">",
        BinaryOpKind::Le => "<=",
        BinaryOpKind::Ge => ">=",
        BinaryOpKind::Eq => "==",
        BinaryOpKind::Ne => "~=",
        BinaryOpKind::And => "and",
        BinaryOpKind::Or => "or",
        BinaryOpKind::Concat => "..",
    }
}

/// Source token of a unary operator.
pub const fn unary_symbol(op: UnaryOpKind) -> &'static str {
    match op {
        UnaryOpKind::Neg => "-",
        UnaryOpKind::BNot => "~",
        UnaryOpKind::Not => "not",
        UnaryOpKind::Len => "#",
    }
}

/// `left symbol right`
pub(super) fn binary(op: &BinaryOp) -> Element {
    Element::inline(
        Role::BinaryOp,
        vec![
            op.left.translate(),
            Element::leaf(binary_symbol(op.op), Emphasis::Operator),
            op.right.translate(),
        ],
    )
}

/// `symbol operand`
pub(super) fn unary(op: &UnaryOp) -> Element {
    Element::inline(
        Role::UnaryOp,
        vec![
            Element::leaf(unary_symbol(op.op), Emphasis::Operator),
            op.operand.translate(),
        ],
    )
}
