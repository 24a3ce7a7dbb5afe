use lua_ast::{Delimiter, ElseBranch, Expr, Field, Stmt};
use lua_parser::{parse, parse_with_limit, ParseErrorKind};

#[test]
fn parses_program_corpus() {
    let cases: [(&str, &str); 12] = [
        ("empty", ""),
        ("shebang", "#!/usr/bin/env lua\nprint(1)"),
        ("comments", "-- leading\nx = 1 --[[ inline ]] y = 2\n--[==[\nblock\n]==]"),
        ("numeric_for", "for i = 1, 10, 2 do print(i) end"),
        ("generic_for", "for k, v in pairs(t) do t[k] = nil end"),
        ("nested_functions", "local function outer() return function(...) return ... end end"),
        ("method_decl", "function Account:deposit(v) self.balance = self.balance + v end"),
        ("goto_loop", "::redo:: if x then goto redo end"),
        ("repeat", "repeat local line = read() until not line"),
        ("table_ctor", "local t = { 1, 2; n = 3, [f(x)] = 'y', {nested = true} }"),
        ("string_args", "require 'a'; require \"b\"; require [[c]]"),
        ("operators", "x = a or b and c < d | e ~ f & g << h .. i + j * k ^ -l"),
    ];

    for (name, source) in cases {
        let result = parse(source);
        assert!(result.is_ok(), "{name}: {:?}", result.err());
    }
}

#[test]
fn rejects_malformed_programs() {
    let cases: [(&str, &str); 8] = [
        ("missing_end", "if x then"),
        ("missing_then", "if x print(x) end"),
        ("bad_for", "for 1 = 1, 2 do end"),
        ("unclosed_paren", "print((1)"),
        ("unclosed_table", "t = {1, 2"),
        ("dangling_operator", "x = 1 +"),
        ("bad_label", ":: 1 ::"),
        ("number_suffix", "x = 12abc"),
    ];

    for (name, source) in cases {
        assert!(parse(source).is_err(), "{name} should fail to parse");
    }
}

#[test]
fn error_positions_are_one_based() {
    let err = parse("local x = 1\nlocal y = = 2").unwrap_err();
    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 11);
    assert_eq!(
        err.to_string(),
        "unexpected token '=', expected expression at line 2, column 11"
    );
}

#[test]
fn elseif_chain_preserves_source_order() {
    let chunk = parse("if a then x() elseif b then y() else z() end").unwrap();
    let Some(Stmt::If(stmt)) = chunk.body.body.first() else {
        panic!("expected if statement");
    };
    let Some(ElseBranch::ElseIf(link)) = &stmt.orelse else {
        panic!("expected elseif link");
    };
    assert_eq!(link.test, Expr::name("b"));
    assert!(matches!(link.orelse, Some(ElseBranch::Else(_))));
}

#[test]
fn long_strings_keep_their_delimiter() {
    let chunk = parse("t = { [[\nfirst line\nsecond]] }").unwrap();
    let Some(Stmt::Assign(assign)) = chunk.body.body.first() else {
        panic!("expected assignment");
    };
    let Expr::Table(table) = &assign.values[0] else {
        panic!("expected table");
    };
    assert_eq!(
        table.fields,
        vec![Field::positional(Expr::string(
            "first line\nsecond",
            Delimiter::LongBracket
        ))]
    );
}

#[test]
fn deep_concat_chain_within_limit() {
    let source = format!("x = {}", vec!["'a'"; 300].join(" .. "));
    assert!(parse(&source).is_ok());
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let source = format!("x = {}1{}", "(".repeat(5000), ")".repeat(5000));
    let err = parse(&source).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn nested_blocks_count_toward_limit() {
    let source = format!("{}{}", "do ".repeat(20), "end ".repeat(20));
    assert!(parse_with_limit(&source, 10).is_err());
    assert!(parse_with_limit(&source, 50).is_ok());
}
