//! # Translator Tests
//!
//! One test per syntax variant, plus the operator table, step elision,
//! delimiter fidelity and if-chain nesting.

use super::*;
use crate::element::{Container, Element, Emphasis, Layout, Role};
use lua_ast::{
    AnonymousFunction, Assign, BinaryOpKind, Block, Chunk, Delimiter, ElseBranch, ElseIf, Expr,
    Field, Forin, Fornum, Function, If, LocalFunction, Method, Name, Repeat, Stmt, Table,
    UnaryOpKind, While,
};

// =============================================================================
// HELPERS
// =============================================================================

fn stmt(stmt: Stmt) -> Element {
    translate(&stmt)
}

fn expr(expr: Expr) -> Element {
    translate(&expr)
}

fn container(element: &Element) -> &Container {
    match element {
        Element::Container(container) => container,
        other => panic!("expected container, got {:?}", other),
    }
}

/// Non-empty and every container is either non-empty or a body block.
fn assert_well_formed(element: &Element) {
    assert!(!element.tokens().is_empty(), "no tokens in {:?}", element);
    check_containers(element);
}

fn check_containers(element: &Element) {
    if let Element::Container(c) = element {
        let may_be_empty = matches!(
            c.role,
            Role::Block | Role::Parameters | Role::Arguments | Role::Table
        );
        assert!(may_be_empty || !c.children.is_empty(), "empty {:?}", c.role);
        for child in &c.children {
            check_containers(child);
        }
    }
}

// =============================================================================
// STATEMENT VARIANTS
// =============================================================================

#[test]
fn test_assign() {
    let element = stmt(Stmt::assign(
        vec![Expr::name("a"), Expr::dot(Expr::name("t"), "k")],
        vec![Expr::int(1), Expr::int(2)],
    ));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::Assign));
    assert_eq!(element.tokens(), vec!["a", ",", "t", ".", "k", "=", "1", ",", "2"]);
}

#[test]
fn test_local_assign() {
    let element = stmt(Stmt::local_assign(vec![Expr::name("x")], vec![Expr::Nil]));
    assert_well_formed(&element);
    assert_eq!(element.tokens(), vec!["local", "x", "=", "nil"]);
}

#[test]
fn test_local_without_values_omits_equals() {
    let element = stmt(Stmt::local_assign(vec![Expr::name("x"), Expr::name("y")], vec![]));
    assert_eq!(element.tokens(), vec!["local", "x", ",", "y"]);
}

#[test]
fn test_while() {
    let element = stmt(Stmt::While(While {
        test: Expr::True,
        body: Block::new(vec![Stmt::Break]),
    }));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::While));
    let children = element.children();
    assert_eq!(children[0].role(), Some(Role::Header));
    assert_eq!(children[0].tokens(), vec!["while", "true", "do"]);
    assert_eq!(children[1].role(), Some(Role::Block));
    assert_eq!(children[2], Element::keyword("end"));
}

#[test]
fn test_do() {
    let element = stmt(Stmt::Do(Block::empty()));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::Do));
    assert_eq!(element.tokens(), vec!["do", "end"]);
}

#[test]
fn test_repeat() {
    let element = stmt(Stmt::Repeat(Repeat {
        body: Block::empty(),
        test: Expr::name("done"),
    }));
    assert_well_formed(&element);
    let children = element.children();
    assert_eq!(children[2].role(), Some(Role::Footer));
    assert_eq!(element.tokens(), vec!["repeat", "until", "done"]);
}

#[test]
fn test_label_goto_break() {
    let label = stmt(Stmt::Label(Name::new("top")));
    assert_well_formed(&label);
    assert_eq!(label.tokens(), vec!["::", "top", "::"]);

    let goto = stmt(Stmt::Goto(Name::new("top")));
    assert_well_formed(&goto);
    assert_eq!(goto.children()[1], Element::leaf("top", Emphasis::Label));

    assert_eq!(stmt(Stmt::Break), Element::keyword("break"));
}

#[test]
fn test_return() {
    let bare = stmt(Stmt::Return(vec![]));
    assert_well_formed(&bare);
    assert_eq!(bare.tokens(), vec!["return"]);

    let values = stmt(Stmt::Return(vec![Expr::int(1), Expr::Varargs]));
    assert_eq!(values.tokens(), vec!["return", "1", ",", "..."]);
}

#[test]
fn test_semicolon() {
    let element = stmt(Stmt::SemiColon);
    assert_well_formed(&element);
    assert_eq!(element, Element::text(";"));
}

#[test]
fn test_expression_statement() {
    let element = stmt(Stmt::Expr(Expr::call(Expr::name("print"), vec![Expr::int(1)])));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::Call));
}

#[test]
fn test_function() {
    let element = stmt(Stmt::Function(Function {
        name: Expr::dot(Expr::name("m"), "f"),
        args: vec![Expr::name("a"), Expr::Varargs],
        body: Block::empty(),
    }));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::Function));
    assert_eq!(
        element.children()[0].tokens(),
        vec!["function", "m", ".", "f", "(", "a", ",", "...", ")"]
    );
}

#[test]
fn test_local_function() {
    let element = stmt(Stmt::LocalFunction(LocalFunction {
        name: Name::new("f"),
        args: vec![],
        body: Block::empty(),
    }));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::LocalFunction));
    assert_eq!(element.tokens(), vec!["local", "function", "f", "(", ")", "end"]);
}

#[test]
fn test_method() {
    let element = stmt(Stmt::Method(Method {
        source: Expr::name("Account"),
        name: Name::new("deposit"),
        args: vec![Expr::name("v")],
        body: Block::empty(),
    }));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::Method));
    assert_eq!(element.find_all(Role::MethodName).len(), 1);
    assert_eq!(
        element.children()[0].tokens(),
        vec!["function", "Account", ":", "deposit", "(", "v", ")"]
    );
}

#[test]
fn test_forin() {
    let element = stmt(Stmt::Forin(Forin {
        targets: vec![Name::new("k"), Name::new("v")],
        iter: vec![Expr::call(Expr::name("pairs"), vec![Expr::name("t")])],
        body: Block::empty(),
    }));
    assert_well_formed(&element);
    assert_eq!(
        element.children()[0].tokens(),
        vec!["for", "k", ",", "v", "in", "pairs", "(", "t", ")", "do"]
    );
}

// =============================================================================
// EXPRESSION VARIANTS
// =============================================================================

#[test]
fn test_constants() {
    assert_eq!(expr(Expr::Nil), Element::leaf("nil", Emphasis::Nil));
    assert_eq!(expr(Expr::True), Element::leaf("true", Emphasis::Boolean));
    assert_eq!(expr(Expr::False), Element::leaf("false", Emphasis::Boolean));
    assert_eq!(expr(Expr::Varargs), Element::leaf("...", Emphasis::Varargs));
}

#[test]
fn test_numbers() {
    assert_eq!(expr(Expr::int(42)), Element::leaf("42", Emphasis::Number));
    assert_eq!(expr(Expr::float(0.5)), Element::leaf("0.5", Emphasis::Number));
}

#[test]
fn test_string_delimiter_fidelity() {
    let cases = [
        (Delimiter::DoubleQuote, "\"foo\""),
        (Delimiter::SingleQuote, "'foo'"),
        (Delimiter::LongBracket, "[[foo]]"),
    ];
    for (delimiter, expected) in cases {
        assert_eq!(
            expr(Expr::string("foo", delimiter)),
            Element::leaf(expected, Emphasis::String)
        );
    }
}

#[test]
fn test_name() {
    assert_eq!(expr(Expr::name("x")), Element::leaf("x", Emphasis::Name));
}

#[test]
fn test_index_notation() {
    let dot = expr(Expr::dot(Expr::name("a"), "b"));
    assert_well_formed(&dot);
    assert_eq!(dot.tokens(), vec!["a", ".", "b"]);

    let bracket = expr(Expr::bracket(Expr::name("a"), Expr::int(1)));
    assert_eq!(bracket.role(), Some(Role::Index));
    assert_eq!(bracket.tokens(), vec!["a", "[", "1", "]"]);
}

#[test]
fn test_call_and_invoke() {
    let call = expr(Expr::call(Expr::name("f"), vec![]));
    assert_well_formed(&call);
    assert_eq!(call.tokens(), vec!["f", "(", ")"]);

    let invoke = expr(Expr::invoke(Expr::name("obj"), "m", vec![Expr::int(1), Expr::int(2)]));
    assert_well_formed(&invoke);
    assert_eq!(invoke.role(), Some(Role::Invoke));
    assert_eq!(invoke.tokens(), vec!["obj", ":", "m", "(", "1", ",", "2", ")"]);
}

#[test]
fn test_anonymous_function() {
    let element = expr(Expr::AnonymousFunction(AnonymousFunction {
        args: vec![Expr::name("x")],
        body: Block::new(vec![Stmt::Return(vec![Expr::name("x")])]),
    }));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::AnonymousFunction));
    assert_eq!(
        element.tokens(),
        vec!["function", "(", "x", ")", "return", "x", "end"]
    );
}

#[test]
fn test_table_rows() {
    let element = expr(Expr::Table(Table {
        fields: vec![
            Field::positional(Expr::int(1)),
            Field::named("x", Expr::int(2)),
            Field::bracketed(Expr::string("k", Delimiter::SingleQuote), Expr::int(3)),
        ],
    }));
    assert_well_formed(&element);

    let table = container(&element);
    assert_eq!(table.layout, Layout::Table);
    assert_eq!(table.children.len(), 3);

    // Positional: value cell only
    let positional = container(&table.children[0]);
    assert_eq!(positional.layout, Layout::Row);
    assert_eq!(positional.children.len(), 1);
    assert_eq!(positional.children[0].role(), Some(Role::FieldValue));

    // Named: bare key
    assert_eq!(table.children[1].tokens(), vec!["x", "=", "2"]);

    // Bracketed: key in brackets
    assert_eq!(table.children[2].tokens(), vec!["[", "'k'", "]", "=", "3"]);
}

#[test]
fn test_empty_table() {
    let element = expr(Expr::Table(Table::default()));
    assert_eq!(element.role(), Some(Role::Table));
    assert!(element.children().is_empty());
}

#[test]
fn test_binary_and_unary_units() {
    let binary = expr(Expr::binary(BinaryOpKind::Concat, Expr::name("a"), Expr::name("b")));
    assert_well_formed(&binary);
    assert_eq!(binary.children()[1], Element::leaf("..", Emphasis::Operator));

    let unary = expr(Expr::unary(UnaryOpKind::Len, Expr::name("t")));
    assert_well_formed(&unary);
    assert_eq!(unary.tokens(), vec!["#", "t"]);
}

// =============================================================================
// OPERATOR TABLE
// =============================================================================

#[test]
fn test_binary_symbol_table() {
    let expected = [
        (BinaryOpKind::Add, "+"),
        (BinaryOpKind::Sub, "-"),
        (BinaryOpKind::Mul, "*"),
        (BinaryOpKind::Div, "/"),
        (BinaryOpKind::FloorDiv, "//"),
        (BinaryOpKind::Mod, "%"),
        (BinaryOpKind::Pow, "^"),
        (BinaryOpKind::BAnd, "&"),
        (BinaryOpKind::BOr, "|"),
        (BinaryOpKind::BXor, "~"),
        (BinaryOpKind::Shr, ">>"),
        (BinaryOpKind::Shl, "<<"),
        (BinaryOpKind::Lt, "<"),
        (BinaryOpKind::Gt, ">"),
        (BinaryOpKind::Le, "<="),
        (BinaryOpKind::Ge, ">="),
        (BinaryOpKind::Eq, "=="),
        (BinaryOpKind::Ne, "~="),
        (BinaryOpKind::And, "and"),
        (BinaryOpKind::Or, "or"),
        (BinaryOpKind::Concat, ".."),
    ];
    assert_eq!(expected.len(), BinaryOpKind::ALL.len());

    for (op, symbol) in expected {
        assert_eq!(binary_symbol(op), symbol, "{:?}", op);
        // Independent of operands
        for operands in [(Expr::int(1), Expr::int(2)), (Expr::name("a"), Expr::Nil)] {
            let element = expr(Expr::binary(op, operands.0, operands.1));
            assert_eq!(element.children()[1].tokens(), vec![symbol]);
        }
    }
}

#[test]
fn test_unary_symbol_table() {
    let expected = [
        (UnaryOpKind::Neg, "-"),
        (UnaryOpKind::BNot, "~"),
        (UnaryOpKind::Not, "not"),
        (UnaryOpKind::Len, "#"),
    ];
    assert_eq!(expected.len(), UnaryOpKind::ALL.len());

    for (op, symbol) in expected {
        assert_eq!(unary_symbol(op), symbol);
        let element = expr(Expr::unary(op, Expr::name("x")));
        assert_eq!(element.tokens(), vec![symbol, "x"]);
    }
}

// =============================================================================
// FORNUM STEP ELISION
// =============================================================================

fn fornum(step: Expr) -> Element {
    stmt(Stmt::Fornum(Fornum {
        target: Name::new("i"),
        start: Expr::int(1),
        stop: Expr::int(10),
        step,
        body: Block::empty(),
    }))
}

#[test]
fn test_fornum_default_step_is_elided() {
    let element = fornum(Expr::int(1));
    assert_well_formed(&element);
    assert_eq!(element.role(), Some(Role::ForNum));
    assert_eq!(
        element.children()[0].tokens(),
        vec!["for", "i", "=", "1", ",", "10", "do"]
    );
    assert!(element.children()[1].children().is_empty());
}

#[test]
fn test_fornum_float_one_is_elided() {
    assert_eq!(
        fornum(Expr::float(1.0)).children()[0].tokens(),
        vec!["for", "i", "=", "1", ",", "10", "do"]
    );
}

#[test]
fn test_fornum_other_steps_are_kept() {
    assert_eq!(
        fornum(Expr::int(2)).children()[0].tokens(),
        vec!["for", "i", "=", "1", ",", "10", ",", "2", "do"]
    );
    assert_eq!(
        fornum(Expr::name("step")).children()[0].tokens(),
        vec!["for", "i", "=", "1", ",", "10", ",", "step", "do"]
    );
    assert_eq!(
        fornum(Expr::unary(UnaryOpKind::Neg, Expr::int(1))).children()[0].tokens(),
        vec!["for", "i", "=", "1", ",", "10", ",", "-", "1", "do"]
    );
}

// =============================================================================
// IF-CHAINS
// =============================================================================

#[test]
fn test_if_elseif_else_nests_in_source_order() {
    let element = stmt(Stmt::If(If {
        test: Expr::name("a"),
        body: Block::empty(),
        orelse: Some(ElseBranch::ElseIf(Box::new(ElseIf {
            test: Expr::name("b"),
            body: Block::empty(),
            orelse: Some(ElseBranch::Else(Block::new(vec![Stmt::Break]))),
        }))),
    }));
    assert_well_formed(&element);

    let if_unit = container(&element);
    assert_eq!(if_unit.role, Role::If);
    assert_eq!(if_unit.children.len(), 4);
    assert_eq!(if_unit.children[3], Element::keyword("end"));

    let elseif_unit = container(&if_unit.children[2]);
    assert_eq!(elseif_unit.role, Role::ElseIf);
    assert_eq!(elseif_unit.children[0].tokens(), vec!["elseif", "b", "then"]);

    let else_unit = container(&elseif_unit.children[2]);
    assert_eq!(else_unit.role, Role::Else);
    assert_eq!(else_unit.children[0].tokens(), vec!["else"]);
    assert_eq!(else_unit.children[1].tokens(), vec!["break"]);

    // Nested, not flattened: only one of each at the If's own level
    assert_eq!(element.find_all(Role::ElseIf).len(), 1);
    assert_eq!(element.find_all(Role::Else).len(), 1);
}

#[test]
fn test_if_without_else_has_no_branch_unit() {
    let element = stmt(Stmt::If(If {
        test: Expr::True,
        body: Block::empty(),
        orelse: None,
    }));
    assert_eq!(element.children().len(), 3);
    assert!(element.find_all(Role::Else).is_empty());
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_scenario_local_sum() {
    let chunk = Chunk::new(Block::new(vec![Stmt::LocalAssign(Assign {
        targets: vec![Expr::name("x")],
        values: vec![Expr::binary(BinaryOpKind::Add, Expr::int(1), Expr::int(2))],
    })]));
    let element = translate(&chunk);

    let assigns = element.find_all(Role::LocalAssign);
    assert_eq!(assigns.len(), 1);
    let unit = Element::Container(assigns[0].clone());
    assert_eq!(unit.tokens(), vec!["local", "x", "=", "1", "+", "2"]);

    let ops = element.find_all(Role::BinaryOp);
    assert_eq!(ops.len(), 1);
    assert_eq!(
        ops[0].children,
        vec![
            Element::leaf("1", Emphasis::Number),
            Element::leaf("+", Emphasis::Operator),
            Element::leaf("2", Emphasis::Number),
        ]
    );
}

#[test]
fn test_block_wraps_each_statement() {
    let block = Block::new(vec![Stmt::Break, Stmt::SemiColon, Stmt::Break]);
    let element = translate(&block);
    assert_eq!(element.role(), Some(Role::Block));
    assert_eq!(element.children().len(), 3);
    assert!(element
        .children()
        .iter()
        .all(|child| child.role() == Some(Role::Statement)));
}

#[test]
fn test_chunk_wraps_block() {
    let element = translate(&Chunk::new(Block::empty()));
    assert_eq!(element.role(), Some(Role::Chunk));
    assert_eq!(element.children()[0].role(), Some(Role::Block));
}

#[test]
fn test_deep_expression_does_not_overflow() {
    let mut deep = Expr::int(0);
    for _ in 0..5_000 {
        deep = Expr::unary(UnaryOpKind::Not, deep);
    }
    let element = expr(deep);
    assert_eq!(element.find_all(Role::UnaryOp).len(), 5_000);
}
