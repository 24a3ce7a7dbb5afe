//! # Translator
//!
//! Total mapping from the Lua syntax tree onto visual elements.
//!
//! Every node type implements [`Translate`] with an exhaustive `match`, so a
//! grammar construct without a rendering rule does not compile.
//!
//! ## Example
//!
//! ```rust
//! use lua_ast::{BinaryOpKind, Block, Chunk, Expr, Stmt};
//! use vlua_render::element::Role;
//! use vlua_render::translate::translate;
//!
//! let chunk = Chunk::new(Block::new(vec![Stmt::local_assign(
//!     vec![Expr::name("x")],
//!     vec![Expr::binary(BinaryOpKind::Add, Expr::int(1), Expr::int(2))],
//! )]));
//! let element = translate(&chunk);
//! assert_eq!(element.tokens(), vec!["local", "x", "=", "1", "+", "2"]);
//! assert_eq!(element.find_all(Role::BinaryOp).len(), 1);
//! ```
//!
//! ## Recursion
//!
//! Recursive entry points run under `stacker::maybe_grow`, so the depth of
//! the input tree is bounded by the parser's nesting limit rather than by the
//! thread's stack size.

mod control_flow;
mod declarations;
mod expressions;
mod literals;
mod operators;
mod statements;

#[cfg(test)]
mod tests;

pub use control_flow::is_default_step;
pub use literals::quote_string;
pub use operators::{binary_symbol, unary_symbol};

use crate::element::{Element, Role};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use lua_ast::{Block, Chunk, Expr};
use stacker::maybe_grow;

// =============================================================================
// TRAIT
// =============================================================================

/// Conversion of a syntax node into its visual subtree.
pub trait Translate {
    fn translate(&self) -> Element;
}

/// Translate any syntax node.
pub fn translate(node: &impl Translate) -> Element {
    node.translate()
}

impl Translate for Chunk {
    fn translate(&self) -> Element {
        Element::block(Role::Chunk, vec![self.body.translate()])
    }
}

impl Translate for Block {
    /// Statement sequence; every statement gets its own wrapper so it can be
    /// styled in isolation.
    fn translate(&self) -> Element {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let statements = self
                .body
                .iter()
                .map(|stmt| Element::block(Role::Statement, vec![stmt.translate()]))
                .collect();
            Element::block(Role::Block, statements)
        })
    }
}

// =============================================================================
// SHARED SHAPES
// =============================================================================

/// Items separated by `,` text runs.
fn comma_separated<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Vec<Element>
where
    T: Translate + 'a,
{
    let mut children = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            children.push(Element::text(","));
        }
        children.push(item.translate());
    }
    children
}

/// Comma-separated expression list unit.
fn expr_list(role: Role, exprs: &[Expr]) -> Element {
    Element::inline(role, comma_separated(exprs))
}

/// Opening line of a compound statement.
fn header(children: Vec<Element>) -> Element {
    Element::inline(Role::Header, children)
}

/// Compound statement: header, indented body, then `end`.
fn with_body(role: Role, header_children: Vec<Element>, body: &Block) -> Element {
    Element::block(
        role,
        vec![header(header_children), body.translate(), Element::keyword("end")],
    )
}
