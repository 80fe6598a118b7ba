//! Arithmetic, comparison and logic operators.

#![allow(
    clippy::unnecessary_wraps,
    reason = "every handler shares the table's fallible signature"
)]

use sqf_diagnostic::SqfResult;
use sqf_ir::Value;

use super::pattern::{kw, one_of, ANY, ARRAY, BOOLEAN, CODE, NUMBER, TEXT};
use super::{array, boolean, code, number, text, Expression, ExpressionTable};
use crate::errors::division_by_zero;
use crate::Evaluator;

const NOT: &[&str] = &["!", "not"];
const AND: &[&str] = &["&&", "and"];
const OR: &[&str] = &["||", "or"];
const MODULO: &[&str] = &["%", "mod"];

pub(super) fn register(table: &mut ExpressionTable) {
    // arithmetic
    table
        .register(Expression::new("number + number", [NUMBER, kw("+"), NUMBER], |_, v, _| {
            numeric(v, |a, b| a + b)
        }))
        .register(Expression::new("string + string", [TEXT, kw("+"), TEXT], concat_text))
        .register(Expression::new("array + array", [ARRAY, kw("+"), ARRAY], concat_arrays))
        .register(Expression::new("number - number", [NUMBER, kw("-"), NUMBER], |_, v, _| {
            numeric(v, |a, b| a - b)
        }))
        .register(Expression::new("array - array", [ARRAY, kw("-"), ARRAY], array_difference))
        .register(Expression::new("number * number", [NUMBER, kw("*"), NUMBER], |_, v, _| {
            numeric(v, |a, b| a * b)
        }))
        .register(Expression::new("number / number", [NUMBER, kw("/"), NUMBER], divide))
        .register(Expression::new("number mod number", [NUMBER, one_of(MODULO), NUMBER], modulo))
        .register(Expression::new("number ^ number", [NUMBER, kw("^"), NUMBER], |_, v, _| {
            numeric(v, f64::powf)
        }))
        .register(Expression::new("number max number", [NUMBER, kw("max"), NUMBER], |_, v, _| {
            numeric(v, f64::max)
        }))
        .register(Expression::new("number min number", [NUMBER, kw("min"), NUMBER], |_, v, _| {
            numeric(v, f64::min)
        }))
        .register(Expression::new("number atan2 number", [NUMBER, kw("atan2"), NUMBER], |_, v, _| {
            numeric(v, |y, x| y.atan2(x).to_degrees())
        }))
        .register(Expression::new("- number", [kw("-"), NUMBER], |_, v, _| {
            Ok(Value::Number(-number("-", &v[1])?))
        }))
        .register(Expression::new("+ number", [kw("+"), NUMBER], |_, v, _| {
            Ok(Value::Number(number("+", &v[1])?))
        }));

    // comparison
    table
        .register(Expression::new("number == number", [NUMBER, kw("=="), NUMBER], |_, v, _| {
            compare(v, |a, b| a == b)
        }))
        .register(Expression::new("number != number", [NUMBER, kw("!="), NUMBER], |_, v, _| {
            compare(v, |a, b| a != b)
        }))
        .register(Expression::new("number < number", [NUMBER, kw("<"), NUMBER], |_, v, _| {
            compare(v, |a, b| a < b)
        }))
        .register(Expression::new("number > number", [NUMBER, kw(">"), NUMBER], |_, v, _| {
            compare(v, |a, b| a > b)
        }))
        .register(Expression::new("number <= number", [NUMBER, kw("<="), NUMBER], |_, v, _| {
            compare(v, |a, b| a <= b)
        }))
        .register(Expression::new("number >= number", [NUMBER, kw(">="), NUMBER], |_, v, _| {
            compare(v, |a, b| a >= b)
        }))
        .register(Expression::new("string == string", [TEXT, kw("=="), TEXT], |_, v, _| {
            Ok(Value::Boolean(text_eq(v)?))
        }))
        .register(Expression::new("string != string", [TEXT, kw("!="), TEXT], |_, v, _| {
            Ok(Value::Boolean(!text_eq(v)?))
        }))
        .register(Expression::new("any isEqualTo any", [ANY, kw("isEqualTo"), ANY], |_, v, _| {
            Ok(Value::Boolean(v[0] == v[2]))
        }));

    // logic
    table
        .register(Expression::new("! bool", [one_of(NOT), BOOLEAN], |_, v, _| {
            Ok(Value::Boolean(!boolean("!", &v[1])?))
        }))
        .register(Expression::new("bool && bool", [BOOLEAN, one_of(AND), BOOLEAN], |_, v, _| {
            Ok(Value::Boolean(boolean("&&", &v[0])? && boolean("&&", &v[2])?))
        }))
        .register(Expression::new("bool || bool", [BOOLEAN, one_of(OR), BOOLEAN], |_, v, _| {
            Ok(Value::Boolean(boolean("||", &v[0])? || boolean("||", &v[2])?))
        }))
        .register(Expression::new("bool && code", [BOOLEAN, one_of(AND), CODE], lazy_and))
        .register(Expression::new("bool || code", [BOOLEAN, one_of(OR), CODE], lazy_or));
}

fn numeric(values: &[Value], op: fn(f64, f64) -> f64) -> SqfResult<Value> {
    let lhs = number("arithmetic", &values[0])?;
    let rhs = number("arithmetic", &values[2])?;
    Ok(Value::Number(op(lhs, rhs)))
}

fn compare(values: &[Value], op: fn(f64, f64) -> bool) -> SqfResult<Value> {
    let lhs = number("comparison", &values[0])?;
    let rhs = number("comparison", &values[2])?;
    Ok(Value::Boolean(op(lhs, rhs)))
}

/// String equality ignores case.
fn text_eq(values: &[Value]) -> SqfResult<bool> {
    let lhs = text("==", &values[0])?;
    let rhs = text("==", &values[2])?;
    Ok(lhs.to_lowercase() == rhs.to_lowercase())
}

fn concat_text(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let lhs = text("+", &values[0])?;
    let rhs = text("+", &values[2])?;
    Ok(Value::Text(format!("{lhs}{rhs}")))
}

fn concat_arrays(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let lhs = array("+", &values[0])?;
    let rhs = array("+", &values[2])?;
    Ok(Value::Array(lhs.iter().chain(rhs).cloned().collect()))
}

/// Removes every element of the left array that equals one on the right.
fn array_difference(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let lhs = array("-", &values[0])?;
    let rhs = array("-", &values[2])?;
    Ok(Value::Array(
        lhs.iter().filter(|item| !rhs.contains(*item)).cloned().collect(),
    ))
}

fn divide(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let lhs = number("/", &values[0])?;
    let rhs = number("/", &values[2])?;
    if rhs == 0.0 {
        return Err(division_by_zero("/"));
    }
    Ok(Value::Number(lhs / rhs))
}

/// Remainder with the sign of the dividend.
fn modulo(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let lhs = number("mod", &values[0])?;
    let rhs = number("mod", &values[2])?;
    if rhs == 0.0 {
        return Err(division_by_zero("mod"));
    }
    Ok(Value::Number(lhs % rhs))
}

/// The code operand runs only when the left side is true.
fn lazy_and(_: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    if !boolean("&&", &values[0])? {
        return Ok(Value::Boolean(false));
    }
    let outcome = evaluator.execute_code(code("&&", &values[2])?, None, None)?;
    Ok(Value::Boolean(boolean("&&", &outcome)?))
}

/// The code operand runs only when the left side is false.
fn lazy_or(_: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    if boolean("||", &values[0])? {
        return Ok(Value::Boolean(true));
    }
    let outcome = evaluator.execute_code(code("||", &values[2])?, None, None)?;
    Ok(Value::Boolean(boolean("||", &outcome)?))
}
