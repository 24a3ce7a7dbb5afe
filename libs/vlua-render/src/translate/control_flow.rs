//! # Control Flow Translation
//!
//! Loops, `do` blocks and if-chains. An if-chain renders as nested units
//! (`if` containing `elseif` containing `else`), never as a flat list.

use super::{expr_list, header, with_body, Translate};
use crate::element::{Element, Emphasis, Role};
use lua_ast::{Block, ElseBranch, ElseIf, Expr, Forin, Fornum, If, Repeat, While};

impl Translate for While {
    fn translate(&self) -> Element {
        with_body(
            Role::While,
            vec![
                Element::keyword("while"),
                self.test.translate(),
                Element::keyword("do"),
            ],
            &self.body,
        )
    }
}

pub(super) fn do_block(body: &Block) -> Element {
    with_body(Role::Do, vec![Element::keyword("do")], body)
}

impl Translate for Repeat {
    fn translate(&self) -> Element {
        Element::block(
            Role::Repeat,
            vec![
                header(vec![Element::keyword("repeat")]),
                self.body.translate(),
                Element::inline(
                    Role::Footer,
                    vec![Element::keyword("until"), self.test.translate()],
                ),
            ],
        )
    }
}

// =============================================================================
// IF-CHAINS
// =============================================================================

impl Translate for If {
    fn translate(&self) -> Element {
        let mut children = vec![
            header(vec![
                Element::keyword("if"),
                self.test.translate(),
                Element::keyword("then"),
            ]),
            self.body.translate(),
        ];
        if let Some(orelse) = &self.orelse {
            children.push(orelse.translate());
        }
        children.push(Element::keyword("end"));
        Element::block(Role::If, children)
    }
}

impl Translate for ElseIf {
    fn translate(&self) -> Element {
        let mut children = vec![
            header(vec![
                Element::keyword("elseif"),
                self.test.translate(),
                Element::keyword("then"),
            ]),
            self.body.translate(),
        ];
        if let Some(orelse) = &self.orelse {
            children.push(orelse.translate());
        }
        Element::block(Role::ElseIf, children)
    }
}

impl Translate for ElseBranch {
    fn translate(&self) -> Element {
        match self {
            Self::ElseIf(link) => link.translate(),
            Self::Else(body) => Element::block(
                Role::Else,
                vec![header(vec![Element::keyword("else")]), body.translate()],
            ),
        }
    }
}

// =============================================================================
// FOR LOOPS
// =============================================================================

/// True when a numeric `for` step is the literal `1` (integer or float), the
/// value the parser supplies when the source omits the step.
///
/// Only the literal counts: `1 + 0`, `-1` or a variable holding 1 keep their
/// step clause.
///
/// ## Example
///
/// ```rust
/// use lua_ast::Expr;
/// use vlua_render::translate::is_default_step;
///
/// assert!(is_default_step(&Expr::int(1)));
/// assert!(is_default_step(&Expr::float(1.0)));
/// assert!(!is_default_step(&Expr::int(2)));
/// assert!(!is_default_step(&Expr::name("one")));
/// ```
pub fn is_default_step(step: &Expr) -> bool {
    matches!(step, Expr::Number(number) if number.is_one())
}

impl Translate for Fornum {
    fn translate(&self) -> Element {
        let mut header_children = vec![
            Element::keyword("for"),
            Element::leaf(&self.target.id, Emphasis::Name),
            Element::text("="),
            self.start.translate(),
            Element::text(","),
            self.stop.translate(),
        ];
        if !is_default_step(&self.step) {
            header_children.push(Element::text(","));
            header_children.push(self.step.translate());
        }
        header_children.push(Element::keyword("do"));

        with_body(Role::ForNum, header_children, &self.body)
    }
}

impl Translate for Forin {
    fn translate(&self) -> Element {
        with_body(
            Role::ForIn,
            vec![
                Element::keyword("for"),
                Element::inline(Role::ExprList, super::comma_separated(&self.targets)),
                Element::keyword("in"),
                expr_list(Role::ExprList, &self.iter),
                Element::keyword("do"),
            ],
            &self.body,
        )
    }
}
