//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Operator precedence and associativity
//! - Grouping, calls and variable references
//! - Function definitions and extern declarations
//! - Error messages and top-level recovery

use crate::{
    ast::{
        ast::Expr,
        statements::{Function, Prototype, TopLevel},
    },
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token},
};

use super::{
    expr::{parse_bin_op_rhs, parse_expression, parse_primary},
    lookups::{PrecedenceTable, NO_PRECEDENCE},
    parser::{parse, parse_with_precedence, Parser, MAX_NESTING_DEPTH},
    stmt::parse_prototype,
};

fn parser_for(source: &str) -> Parser<'_> {
    let mut parser = Parser::new(
        Lexer::from_source(source, Some("test.k".to_string())),
        PrecedenceTable::default(),
    );
    parser.advance();
    parser
}

fn parse_expr_source(source: &str) -> Result<Expr, Error> {
    parse_expression(&mut parser_for(source))
}

fn single(source: &str) -> TopLevel {
    let (body, errors) = parse(source, Some("test.k".to_string()));
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(body.len(), 1);
    body.into_iter().next().unwrap()
}

fn first_error(source: &str) -> Error {
    let (_, errors) = parse(source, Some("test.k".to_string()));
    errors.into_iter().next().expect("Expected a parse error")
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse_expr_source("1+2*3").unwrap(),
        Expr::binary(
            '+',
            Expr::number(1.0),
            Expr::binary('*', Expr::number(2.0), Expr::number(3.0))
        )
    );
}

#[test]
fn test_tighter_operator_first() {
    assert_eq!(
        parse_expr_source("1*2+3").unwrap(),
        Expr::binary(
            '+',
            Expr::binary('*', Expr::number(1.0), Expr::number(2.0)),
            Expr::number(3.0)
        )
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        parse_expr_source("1-2-3").unwrap(),
        Expr::binary(
            '-',
            Expr::binary('-', Expr::number(1.0), Expr::number(2.0)),
            Expr::number(3.0)
        )
    );
}

#[test]
fn test_comparison_binds_loosest() {
    assert_eq!(
        parse_expr_source("a < b + 1").unwrap(),
        Expr::binary(
            '<',
            Expr::variable("a"),
            Expr::binary('+', Expr::variable("b"), Expr::number(1.0))
        )
    );
}

#[test]
fn test_mixed_precedence_chain() {
    // a + b*c*d - e  =>  (- (+ a (* (* b c) d)) e)
    assert_eq!(
        parse_expr_source("a + b*c*d - e").unwrap().to_string(),
        "(- (+ a (* (* b c) d)) e)"
    );
}

#[test]
fn test_grouping_adds_no_node() {
    assert_eq!(
        parse_expr_source("(1+2)*3").unwrap(),
        Expr::binary(
            '*',
            Expr::binary('+', Expr::number(1.0), Expr::number(2.0)),
            Expr::number(3.0)
        )
    );
    assert_eq!(parse_expr_source("((x))").unwrap(), Expr::variable("x"));
}

#[test]
fn test_call_expression() {
    assert_eq!(
        parse_expr_source("foo(1, 2+3)").unwrap(),
        Expr::call(
            "foo",
            vec![
                Expr::number(1.0),
                Expr::binary('+', Expr::number(2.0), Expr::number(3.0))
            ]
        )
    );
}

#[test]
fn test_call_without_arguments() {
    assert_eq!(parse_expr_source("foo()").unwrap(), Expr::call("foo", vec![]));
}

#[test]
fn test_bare_identifier_is_variable() {
    assert_eq!(parse_expr_source("foo").unwrap(), Expr::variable("foo"));
}

#[test]
fn test_call_in_binary_expression() {
    assert_eq!(
        parse_expr_source("f(x)*2").unwrap(),
        Expr::binary(
            '*',
            Expr::call("f", vec![Expr::variable("x")]),
            Expr::number(2.0)
        )
    );
}

#[test]
fn test_unknown_operator_ends_expression() {
    let mut parser = parser_for("1 / 2");
    let expr = parse_expression(&mut parser).unwrap();

    assert_eq!(expr, Expr::number(1.0));
    assert_eq!(parser.current_token(), &Token::Symbol('/'));
}

#[test]
fn test_bin_op_rhs_respects_min_precedence() {
    let mut parser = parser_for("+ 2 * 3");
    let expr = parse_bin_op_rhs(&mut parser, 30, Expr::number(1.0)).unwrap();

    // '+' binds looser than 30, so nothing is consumed.
    assert_eq!(expr, Expr::number(1.0));
    assert_eq!(parser.current_token(), &Token::Symbol('+'));
}

#[test]
fn test_primary_rejects_operator() {
    let error = parse_primary(&mut parser_for("+1")).unwrap_err();

    assert_eq!(error.get_message(), "unknown token when expecting an expression");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_definition() {
    assert_eq!(
        single("def foo(a b) a+b"),
        TopLevel::Definition(Function {
            prototype: Prototype {
                name: "foo".to_string(),
                params: vec!["a".to_string(), "b".to_string()],
            },
            body: Expr::binary('+', Expr::variable("a"), Expr::variable("b")),
        })
    );
}

#[test]
fn test_duplicate_parameters_are_accepted() {
    let prototype = parse_prototype(&mut parser_for("f(x x)")).unwrap();

    assert_eq!(prototype.params, vec!["x".to_string(), "x".to_string()]);
}

#[test]
fn test_extern() {
    assert_eq!(
        single("extern sin(x);"),
        TopLevel::Extern(Prototype {
            name: "sin".to_string(),
            params: vec!["x".to_string()],
        })
    );
}

#[test]
fn test_top_level_expression_is_anonymous() {
    match single("4+5;") {
        TopLevel::Expression(function) => {
            assert!(function.prototype.is_anonymous());
            assert!(function.prototype.params.is_empty());
            assert_eq!(
                function.body,
                Expr::binary('+', Expr::number(4.0), Expr::number(5.0))
            );
        }
        other => panic!("Expected top-level expression, got {:?}", other),
    }
}

#[test]
fn test_empty_statements_are_skipped() {
    let (body, errors) = parse(";;; x ;; ;", None);

    assert!(errors.is_empty());
    assert_eq!(body.len(), 1);
}

#[test]
fn test_empty_input() {
    let (body, errors) = parse("", None);

    assert!(body.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_multiple_constructs() {
    let (body, errors) = parse(
        "# a small program\nextern cos(x);\ndef double(x) x*2;\ndouble(cos(1));",
        None,
    );

    assert!(errors.is_empty());
    assert!(matches!(body[0], TopLevel::Extern(_)));
    assert!(matches!(body[1], TopLevel::Definition(_)));
    assert!(matches!(body[2], TopLevel::Expression(_)));
}

#[test]
fn test_missing_function_name() {
    let error = first_error("def (");

    assert_eq!(error.get_message(), "Expected function name in prototype");
    assert_eq!(error.get_error_name(), "IncompleteConstruct");
}

#[test]
fn test_missing_prototype_paren() {
    let error = first_error("extern foo x)");

    assert_eq!(error.get_message(), "Expected '(' in prototype");
}

#[test]
fn test_unclosed_prototype() {
    let error = first_error("def foo(a, b) a");

    assert_eq!(error.get_message(), "Expected ')' in prototype");
    assert_eq!(error.get_position().column, 10);
}

#[test]
fn test_bad_argument_list() {
    let error = first_error("foo(1 2)");

    assert_eq!(error.get_message(), "Expected ')' or ',' in argument list");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unclosed_paren() {
    let error = first_error("(1+2");

    assert_eq!(error.get_message(), "Expected ')'");
}

#[test]
fn test_missing_right_hand_side() {
    let error = first_error("1 +;");

    assert_eq!(error.get_message(), "unknown token when expecting an expression");
    assert_eq!(error.get_error_name(), "IncompleteConstruct");
}

#[test]
fn test_recovery_after_malformed_definition() {
    let (body, errors) = parse("def (\n1+1;", Some("test.k".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_message(), "Expected function name in prototype");
    assert_eq!(errors[0].get_position().line, 1);

    assert_eq!(
        body,
        vec![TopLevel::Expression(Function {
            prototype: Prototype::anonymous(),
            body: Expr::binary('+', Expr::number(1.0), Expr::number(1.0)),
        })]
    );
}

#[test]
fn test_parse_top_level_skips_failed_token() {
    let mut parser = parser_for(") 7");

    let first = parser.parse_top_level().unwrap();
    assert!(first.is_err());
    assert_eq!(parser.current_token(), &Token::Number(7.0));

    let second = parser.parse_top_level().unwrap().unwrap();
    assert!(matches!(second, TopLevel::Expression(_)));
    assert!(parser.parse_top_level().is_none());
}

#[test]
fn test_reparsing_is_identical() {
    let source = "def f(a b) a*(b-1) < g(a, 2); extern g(x y); f(1, 2) + 3";

    assert_eq!(parse(source, None), parse(source, None));
}

#[test]
fn test_precedence_table_defaults() {
    let table = PrecedenceTable::default();

    assert_eq!(table.get('<'), 10);
    assert_eq!(table.get('+'), 20);
    assert_eq!(table.get('-'), 20);
    assert_eq!(table.get('*'), 40);
    assert_eq!(table.get('/'), NO_PRECEDENCE);
    assert_eq!(table.get_token_precedence(&Token::Identifier("x".to_string())), NO_PRECEDENCE);
}

#[test]
fn test_non_positive_precedence_is_ignored() {
    let mut table = PrecedenceTable::empty();
    table.insert('%', 0);
    table.insert('^', -5);
    table.insert('é', 50);

    assert_eq!(table.get('%'), NO_PRECEDENCE);
    assert_eq!(table.get('^'), NO_PRECEDENCE);
    assert_eq!(table.get('é'), NO_PRECEDENCE);
}

#[test]
fn test_user_defined_operator() {
    let mut table = PrecedenceTable::default();
    assert_eq!(table.insert('/', 40), None);
    assert_eq!(table.insert('|', 5), None);

    let (body, errors) = parse_with_precedence("a | b / c - d", None, table);

    assert!(errors.is_empty());
    assert_eq!(body[0].to_string(), "(| a (- (/ b c) d))");
}

#[test]
fn test_independent_parsers() {
    let mut first = parser_for("1 + 2");
    let mut second = parser_for("x * y");

    let a = parse_primary(&mut first).unwrap();
    let b = parse_expression(&mut second).unwrap();
    let a = parse_bin_op_rhs(&mut first, 0, a).unwrap();

    assert_eq!(a.to_string(), "(+ 1 2)");
    assert_eq!(b.to_string(), "(* x y)");
}

#[test]
fn test_deeply_nested_parens_fail_cleanly() {
    let source = format!("{}1{}; 2", "(".repeat(10_000), ")".repeat(10_000));
    let (body, errors) = parse(&source, None);

    assert!(!errors.is_empty());
    assert_eq!(errors[0].get_message(), "Expression nested too deeply");
    assert_eq!(body.last().map(|top_level| top_level.to_string()), Some("2".to_string()));
}

#[test]
fn test_deeply_nested_calls_fail_cleanly() {
    let source = format!("{}x{}", "f(".repeat(10_000), ")".repeat(10_000));
    let (_, errors) = parse(&source, None);

    assert_eq!(errors[0].get_message(), "Expression nested too deeply");
}

#[test]
fn test_nesting_up_to_the_limit_parses() {
    let source = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH),
        ")".repeat(MAX_NESTING_DEPTH)
    );

    assert_eq!(single(&source).to_string(), "1");

    let source = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH + 1),
        ")".repeat(MAX_NESTING_DEPTH + 1)
    );
    assert!(!parse(&source, None).1.is_empty());
}

#[test]
fn test_nesting_depth_resets_between_constructs() {
    let deep = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH),
        ")".repeat(MAX_NESTING_DEPTH)
    );
    let source = format!("{};{};{}", deep, deep, deep);

    let (body, errors) = parse(&source, None);
    assert!(errors.is_empty());
    assert_eq!(body.len(), 3);
}

#[test]
fn test_long_left_associative_chain() {
    let source = format!("{}1", "1+".repeat(10_000));
    let mut parser = parser_for(&source);
    let expr = parse_expression(&mut parser).unwrap();

    let mut depth = 0;
    let mut node = &expr;
    while let Expr::Binary(binary) = node {
        assert_eq!(binary.op, '+');
        assert_eq!(*binary.rhs, Expr::number(1.0));
        depth += 1;
        node = binary.lhs.as_ref();
    }

    assert_eq!(depth, 10_000);
    assert_eq!(*node, Expr::number(1.0));
    assert_eq!(parser.current_token(), &Token::EndOfInput);
}

#[test]
fn test_precedence_table_is_read_only_on_parser() {
    let mut table = PrecedenceTable::default();
    table.insert('%', 40);

    let parser = Parser::new(Lexer::from_source("", None), table.clone());

    assert_eq!(parser.get_precedence_table(), &table);
    assert_eq!(parser.get_precedence_table().get('%'), 40);
    assert_eq!(parser.get_precedence_table().get('<'), 10);
}
