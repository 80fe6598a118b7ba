use super::*;
use crate::ast::Token;
use pretty_assertions::assert_eq;

#[test]
fn test_bool_to_string() {
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Boolean(false).to_string(), "false");
}

#[test]
fn test_number_to_string() {
    assert_eq!(Value::Number(1.0).to_string(), "1");
    assert_eq!(Value::Number(1.1).to_string(), "1.10");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
}

#[test]
fn test_array_to_string() {
    let array = Value::Array(vec![Value::Number(1.0), Value::Number(1.0)]);
    assert_eq!(array.to_string(), "[1,1]");
    assert_eq!(Value::Array(vec![]).to_string(), "[]");
}

#[test]
fn test_text_doubles_quotes() {
    assert_eq!(Value::text("a\"b").to_string(), "\"a\"\"b\"");
}

#[test]
fn test_nothing_and_keyword_to_string() {
    assert_eq!(Value::Nothing.to_string(), "Nothing");
    assert_eq!(Value::keyword("foreach").to_string(), "forEach");
}

#[test]
fn nothing_equals_only_nothing() {
    assert_eq!(Value::Nothing, Value::Nothing);
    assert_ne!(Value::Nothing, Value::Boolean(false));
    assert_ne!(Value::Nothing, Value::Array(vec![]));
    assert_ne!(Value::text(""), Value::Nothing);
}

#[test]
fn array_equality_is_ordered() {
    let a = Value::Array(vec![1.0.into(), 2.0.into()]);
    let b = Value::Array(vec![1.0.into(), 2.0.into()]);
    let c = Value::Array(vec![2.0.into(), 1.0.into()]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn code_compares_by_identity() {
    let body = vec![crate::ast::Statement::new([Token::number(1.0)], Span::DUMMY)];
    let first = Code::new(body.clone());
    let second = Code::new(body);
    assert_eq!(Value::Code(first.clone()), Value::Code(first.clone()));
    assert_ne!(Value::Code(first), Value::Code(second));
}

#[test]
fn concrete_values() {
    assert!(Value::Nothing.is_concrete());
    assert!(Value::Number(0.0).is_concrete());
    assert!(!Value::keyword("isServer").is_concrete());
    assert!(!Value::Variable(Variable::new("_x", Span::DUMMY)).is_concrete());
}

#[test]
fn variable_names_ignore_case() {
    assert_eq!(
        Variable::new("_Foo", Span::new(0, 4)),
        Variable::new("_foo", Span::new(9, 13))
    );
    assert!(is_private_name("_foo"));
    assert!(!is_private_name("foo"));
}

#[test]
fn type_names() {
    assert_eq!(Value::Number(1.0).kind().type_name(), "SCALAR");
    assert_eq!(Value::text("x").kind().type_name(), "STRING");
    assert_eq!(Value::Nothing.kind().type_name(), "NOTHING");
}
