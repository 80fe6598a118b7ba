use pretty_assertions::assert_eq;
use sqf_diagnostic::{ErrorCode, SqfError};
use sqf_ir::{Span, Statement, Token, Value};

use crate::parse;

fn render(source: &str) -> Vec<String> {
    parse(source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn single(source: &str) -> Statement {
    let mut statements = parse(source).unwrap();
    assert_eq!(statements.len(), 1, "expected one statement in {source:?}");
    statements.remove(0)
}

fn error_code(source: &str) -> ErrorCode {
    parse(source).unwrap_err().code()
}

#[test]
fn parses_assignment() {
    let statement = single("_x = 2;");
    assert!(statement.is_assignment());
    assert!(statement.ending);
    assert!(matches!(&statement.tokens[0], Token::Variable(var) if var.name == "_x"));
    assert!(matches!(&statement.tokens[2], Token::Literal(Value::Number(n), _) if *n == 2.0));
}

#[test]
fn separators_set_ending() {
    let statements = parse("a = 1; b = 2, c").unwrap();
    let endings: Vec<bool> = statements.iter().map(|s| s.ending).collect();
    assert_eq!(endings, vec![true, true, false]);
}

#[test]
fn empty_statements_are_dropped() {
    assert_eq!(render(";;_x = 1;;"), vec!["_x=1;"]);
    assert!(parse("").unwrap().is_empty());
    assert!(parse("  // only a comment\n").unwrap().is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statement = single("1 + 2 * 3");
    assert_eq!(statement.len(), 3);
    assert!(statement.tokens[1].is_keyword("+"));
    let Token::Statement(rhs) = &statement.tokens[2] else {
        panic!("expected nested statement, got {:?}", statement.tokens[2]);
    };
    assert!(rhs.tokens[1].is_keyword("*"));
}

#[test]
fn binary_operators_are_left_associative() {
    let statement = single("10 - 2 - 3");
    let Token::Statement(lhs) = &statement.tokens[0] else {
        panic!("expected nested statement, got {:?}", statement.tokens[0]);
    };
    assert_eq!(lhs.to_string(), "10-2");
    assert_eq!(statement.tokens[2].to_string(), "3");
}

#[test]
fn word_operators_are_case_insensitive() {
    let statement = single("_a SELECT 0");
    assert!(statement.tokens[1].is_keyword("select"));
    assert_eq!(statement.to_string(), "_a select 0");
}

#[test]
fn unary_operators_nest() {
    let statement = single("!isServer");
    assert_eq!(statement.len(), 2);
    assert!(statement.tokens[0].is_keyword("!"));
    assert!(statement.tokens[1].is_keyword("isServer"));

    let negated = single("- -1");
    let Token::Statement(inner) = &negated.tokens[1] else {
        panic!("expected nested statement, got {:?}", negated.tokens[1]);
    };
    assert!(inner.tokens[0].is_keyword("-"));
}

#[test]
fn count_is_unary_or_binary_by_position() {
    let unary = single("count _a");
    assert_eq!(unary.len(), 2);
    let binary = single("{_x > 1} count _a");
    assert_eq!(binary.len(), 3);
    assert!(binary.tokens[1].is_keyword("count"));
}

#[test]
fn parenthesis_is_kept_for_rendering() {
    let statement = single("(1 + 2) * 3");
    let Token::Statement(lhs) = &statement.tokens[0] else {
        panic!("expected nested statement, got {:?}", statement.tokens[0]);
    };
    assert!(lhs.parenthesis);
    assert_eq!(statement.to_string(), "(1+2)*3");
}

#[test]
fn parenthesized_atom_is_wrapped() {
    let statement = single("(_x)");
    assert_eq!(statement.len(), 1);
    let Token::Statement(inner) = &statement.tokens[0] else {
        panic!("expected nested statement, got {:?}", statement.tokens[0]);
    };
    assert!(inner.parenthesis);
    assert_eq!(statement.to_string(), "(_x)");
}

#[test]
fn parses_arrays() {
    assert_eq!(render("[1, \"a\", [true]]"), vec!["[1,\"a\",[true]]"]);
    assert_eq!(render("[]"), vec!["[]"]);
    let statement = single("[1 + 2, _y]");
    let Token::Array(array) = &statement.tokens[0] else {
        panic!("expected array, got {:?}", statement.tokens[0]);
    };
    assert_eq!(array.elements.len(), 2);
    assert_eq!(array.elements[0].len(), 3);
}

#[test]
fn parses_code_blocks() {
    assert_eq!(render("_f = {_x = 2;}"), vec!["_f={_x=2;}"]);
    let statement = single("{a; b}");
    let Token::Literal(Value::Code(code), _) = &statement.tokens[0] else {
        panic!("expected code literal, got {:?}", statement.tokens[0]);
    };
    assert_eq!(code.statements().len(), 2);
    assert!(code.statements()[0].ending);
    assert!(!code.statements()[1].ending);
}

#[test]
fn parses_private_forms() {
    assert_eq!(render("private _x"), vec!["private _x"]);
    assert_eq!(render("private \"_x\""), vec!["private \"_x\""]);
    assert_eq!(render("private [\"_a\", \"_b\"]"), vec!["private[\"_a\",\"_b\"]"]);

    let statement = single("private _x = 1;");
    assert_eq!(statement.len(), 2);
    assert!(statement.tokens[0].is_keyword("private"));
    let Token::Statement(assignment) = &statement.tokens[1] else {
        panic!("expected assignment, got {:?}", statement.tokens[1]);
    };
    assert!(assignment.is_assignment());
    assert_eq!(statement.to_string(), "private _x=1;");
}

#[test]
fn parses_literal_words() {
    let statement = single("[true, FALSE, nil]");
    let Token::Array(array) = &statement.tokens[0] else {
        panic!("expected array, got {:?}", statement.tokens[0]);
    };
    let values: Vec<&Token> = array.elements.iter().map(|e| &e.tokens[0]).collect();
    assert!(matches!(values[0], Token::Literal(Value::Boolean(true), _)));
    assert!(matches!(values[1], Token::Literal(Value::Boolean(false), _)));
    assert!(matches!(values[2], Token::Literal(Value::Nothing, _)));
}

#[test]
fn nular_keywords_and_variables() {
    let statement = single("missionNamespace");
    assert!(statement.tokens[0].is_keyword("missionNamespace"));
    let statement = single("someGlobal");
    assert!(matches!(&statement.tokens[0], Token::Variable(var) if var.name == "someGlobal"));
}

#[test]
fn assignment_to_non_name_is_left_for_the_evaluator() {
    let statement = single("1 = 2");
    assert!(statement.is_assignment());
    assert!(matches!(&statement.tokens[0], Token::Literal(..)));
}

#[test]
fn public_variable_client_parses_as_binary() {
    let statement = single("2 publicVariableClient \"x\"");
    assert_eq!(statement.len(), 3);
    assert!(statement.tokens[1].is_keyword("publicVariableClient"));
}

#[test]
fn spans_cover_the_statement() {
    let statement = single("_x = 1 + 22");
    assert_eq!(statement.span, Span::new(0, 11));
    assert_eq!(statement.tokens[2].span(), Span::new(5, 11));
}

#[test]
fn reports_lexer_errors() {
    assert_eq!(error_code("_x = @"), ErrorCode::E0001);
    assert_eq!(error_code("_x = \"abc"), ErrorCode::E0002);
    assert_eq!(error_code("_x = 1; /* never closed"), ErrorCode::E0002);
}

#[test]
fn comments_between_tokens() {
    let statements = parse("_x = 1 /* a\n b */; // done\n_x").unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].to_string(), "_x=1;");
}

#[test]
fn reports_missing_operand() {
    assert_eq!(error_code("1 +"), ErrorCode::E1002);
    assert_eq!(error_code("hint;"), ErrorCode::E1002);
    assert_eq!(error_code("select 1"), ErrorCode::E1002);
}

#[test]
fn reports_unexpected_tokens() {
    assert_eq!(error_code("1 2"), ErrorCode::E1001);
    assert_eq!(error_code("}"), ErrorCode::E1001);
    assert_eq!(error_code("(1 2)"), ErrorCode::E1001);
}

#[test]
fn reports_unclosed_delimiters() {
    let err = parse("_f = {_x = 1;").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.span(), Some(Span::new(5, 6)));
    assert_eq!(error_code("[1, 2"), ErrorCode::E1003);
    assert_eq!(error_code("(1 + 2"), ErrorCode::E1003);
}

#[test]
fn errors_are_syntax_errors() {
    let err = parse("1 +").unwrap_err();
    assert!(matches!(err, SqfError::Syntax { .. }));
    assert!(err.is_syntax());
}
