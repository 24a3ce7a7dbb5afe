//! # Function Translation
//!
//! Named, local, method and anonymous functions. Each kind is its own unit so
//! a backend can give definitions distinct emphasis.

use super::{comma_separated, with_body, Translate};
use crate::element::{Element, Emphasis, Role};
use lua_ast::{AnonymousFunction, Block, Expr, Function, LocalFunction, Method};

/// `( params )` followed by the body and `end`.
fn function_unit(role: Role, mut header_children: Vec<Element>, args: &[Expr], body: &Block) -> Element {
    header_children.push(Element::text("("));
    header_children.push(Element::inline(Role::Parameters, comma_separated(args)));
    header_children.push(Element::text(")"));
    with_body(role, header_children, body)
}

impl Translate for Function {
    fn translate(&self) -> Element {
        function_unit(
            Role::Function,
            vec![Element::keyword("function"), self.name.translate()],
            &self.args,
            &self.body,
        )
    }
}

impl Translate for LocalFunction {
    fn translate(&self) -> Element {
        function_unit(
            Role::LocalFunction,
            vec![
                Element::keyword("local"),
                Element::keyword("function"),
                Element::leaf(&self.name.id, Emphasis::Name),
            ],
            &self.args,
            &self.body,
        )
    }
}

impl Translate for Method {
    fn translate(&self) -> Element {
        let name = Element::inline(
            Role::MethodName,
            vec![
                self.source.translate(),
                Element::text(":"),
                Element::leaf(&self.name.id, Emphasis::Name),
            ],
        );
        function_unit(
            Role::Method,
            vec![Element::keyword("function"), name],
            &self.args,
            &self.body,
        )
    }
}

impl Translate for AnonymousFunction {
    fn translate(&self) -> Element {
        function_unit(
            Role::AnonymousFunction,
            vec![Element::keyword("function")],
            &self.args,
            &self.body,
        )
    }
}
