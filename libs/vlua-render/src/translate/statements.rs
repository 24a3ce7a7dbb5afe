//! # Statement Translation
//!
//! Dispatch over every statement variant, plus the simple statements:
//! assignments, jumps, labels, `return` and `;`.

use super::{expr_list, Translate};
use crate::element::{Element, Emphasis, Role};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use lua_ast::{Assign, Name, Stmt};
use stacker::maybe_grow;

impl Translate for Stmt {
    fn translate(&self) -> Element {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Self::Assign(assign) => assignment(Role::Assign, assign),
            Self::LocalAssign(assign) => assignment(Role::LocalAssign, assign),
            Self::While(stmt) => stmt.translate(),
            Self::Do(body) => super::control_flow::do_block(body),
            Self::Repeat(stmt) => stmt.translate(),
            Self::If(stmt) => stmt.translate(),
            Self::Label(name) => label(name),
            Self::Goto(name) => Element::inline(
                Role::Goto,
                vec![Element::keyword("goto"), Element::leaf(&name.id, Emphasis::Label)],
            ),
            Self::Break => Element::keyword("break"),
            Self::Return(values) => {
                let mut children = vec![Element::keyword("return")];
                if !values.is_empty() {
                    children.push(expr_list(Role::ExprList, values));
                }
                Element::inline(Role::Return, children)
            }
            Self::Fornum(stmt) => stmt.translate(),
            Self::Forin(stmt) => stmt.translate(),
            Self::Function(stmt) => stmt.translate(),
            Self::LocalFunction(stmt) => stmt.translate(),
            Self::Method(stmt) => stmt.translate(),
            Self::Expr(expr) => expr.translate(),
            Self::SemiColon => Element::text(";"),
        })
    }
}

/// `targets = values`, prefixed with `local` for local declarations.
///
/// A local declaration without values renders no `=` at all.
fn assignment(role: Role, assign: &Assign) -> Element {
    let mut children = Vec::new();
    if role == Role::LocalAssign {
        children.push(Element::keyword("local"));
    }
    children.push(expr_list(Role::ExprList, &assign.targets));
    if !assign.values.is_empty() {
        children.push(Element::text("="));
        children.push(expr_list(Role::ExprList, &assign.values));
    }
    Element::inline(role, children)
}

/// `::name::`
fn label(name: &Name) -> Element {
    Element::inline(
        Role::Label,
        vec![
            Element::text("::"),
            Element::leaf(&name.id, Emphasis::Label),
            Element::text("::"),
        ],
    )
}
