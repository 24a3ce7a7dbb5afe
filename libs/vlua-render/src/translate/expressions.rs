//! # Expression Translation
//!
//! Dispatch over every expression variant, plus names, indexing, calls and
//! table constructors.

use super::{comma_separated, literals, operators, Translate};
use crate::element::{Element, Emphasis, Layout, Role};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use lua_ast::{Call, Expr, Field, Index, IndexNotation, Invoke, Name, Table};
use stacker::maybe_grow;

impl Translate for Expr {
    fn translate(&self) -> Element {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Self::Nil => Element::leaf("nil", Emphasis::Nil),
            Self::True => Element::leaf("true", Emphasis::Boolean),
            Self::False => Element::leaf("false", Emphasis::Boolean),
            Self::Number(number) => literals::number(number),
            Self::String(string) => literals::string(string),
            Self::Table(table) => table.translate(),
            Self::Varargs => Element::leaf("...", Emphasis::Varargs),
            Self::AnonymousFunction(func) => func.translate(),
            Self::Name(name) => name.translate(),
            Self::Index(index) => index.translate(),
            Self::Call(call) => call.translate(),
            Self::Invoke(invoke) => invoke.translate(),
            Self::BinaryOp(op) => operators::binary(op),
            Self::UnaryOp(op) => operators::unary(op),
        })
    }
}

impl Translate for Name {
    fn translate(&self) -> Element {
        Element::leaf(&self.id, Emphasis::Name)
    }
}

impl Translate for Index {
    /// `value.key` or `value[key]`, as written.
    fn translate(&self) -> Element {
        let children = match self.notation {
            IndexNotation::Dot => vec![
                self.value.translate(),
                Element::text("."),
                self.idx.translate(),
            ],
            IndexNotation::Bracket => vec![
                self.value.translate(),
                Element::text("["),
                self.idx.translate(),
                Element::text("]"),
            ],
        };
        Element::inline(Role::Index, children)
    }
}

fn arguments(args: &[Expr]) -> Vec<Element> {
    vec![
        Element::text("("),
        Element::inline(Role::Arguments, comma_separated(args)),
        Element::text(")"),
    ]
}

impl Translate for Call {
    fn translate(&self) -> Element {
        let mut children = vec![self.func.translate()];
        children.extend(arguments(&self.args));
        Element::inline(Role::Call, children)
    }
}

impl Translate for Invoke {
    fn translate(&self) -> Element {
        let mut children = vec![
            self.source.translate(),
            Element::text(":"),
            Element::leaf(&self.func.id, Emphasis::Name),
        ];
        children.extend(arguments(&self.args));
        Element::inline(Role::Invoke, children)
    }
}

// =============================================================================
// TABLES
// =============================================================================

impl Translate for Table {
    /// One row per field, in constructor order.
    fn translate(&self) -> Element {
        let rows = self.fields.iter().map(Translate::translate).collect();
        Element::container(Role::Table, Layout::Table, rows)
    }
}

impl Translate for Field {
    /// Key cell and value cell. Positional fields have no key cell.
    fn translate(&self) -> Element {
        let mut cells = Vec::with_capacity(2);

        if let Some(key) = &self.key {
            let key_children = if self.bracketed {
                vec![
                    Element::text("["),
                    key.translate(),
                    Element::text("]"),
                    Element::text("="),
                ]
            } else {
                vec![key.translate(), Element::text("=")]
            };
            cells.push(Element::container(Role::FieldKey, Layout::Cell, key_children));
        }
        cells.push(Element::container(
            Role::FieldValue,
            Layout::Cell,
            vec![self.value.translate()],
        ));

        Element::container(Role::Field, Layout::Row, cells)
    }
}
