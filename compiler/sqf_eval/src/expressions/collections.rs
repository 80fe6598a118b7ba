//! Array and string commands.

#![allow(
    clippy::unnecessary_wraps,
    reason = "every handler shares the table's fallible signature"
)]

use sqf_diagnostic::SqfResult;
use sqf_ir::Value;

use super::pattern::{kw, ANY, ARRAY, BOOLEAN, CODE, NUMBER, TEXT};
use super::{array, boolean, code, number, text, Expression, ExpressionTable};
use crate::errors::{index_out_of_bounds, type_mismatch};
use crate::namespace::Scope;
use crate::Evaluator;

pub(super) fn register(table: &mut ExpressionTable) {
    table
        .register(Expression::new("count array", [kw("count"), ARRAY], |_, v, _| {
            Ok(length(array("count", &v[1])?.len()))
        }))
        .register(Expression::new("count string", [kw("count"), TEXT], |_, v, _| {
            Ok(length(text("count", &v[1])?.chars().count()))
        }))
        .register(Expression::new("code count array", [CODE, kw("count"), ARRAY], count_matching))
        .register(Expression::new("array select number", [ARRAY, kw("select"), NUMBER], |_, v, _| {
            select(array("select", &v[0])?, number("select", &v[2])?)
        }))
        .register(Expression::new("array select bool", [ARRAY, kw("select"), BOOLEAN], |_, v, _| {
            let index = if boolean("select", &v[2])? { 1.0 } else { 0.0 };
            select(array("select", &v[0])?, index)
        }))
        .register(Expression::new("array # number", [ARRAY, kw("#"), NUMBER], |_, v, _| {
            let items = array("#", &v[0])?;
            let item = to_index(number("#", &v[2])?).and_then(|i| items.get(i));
            Ok(item.cloned().unwrap_or(Value::Nothing))
        }))
        .register(Expression::new("array pushBack any", [ARRAY, kw("pushBack"), ANY], push_back))
        .register(Expression::new("string in string", [TEXT, kw("in"), TEXT], |_, v, _| {
            Ok(Value::Boolean(text("in", &v[2])?.contains(text("in", &v[0])?)))
        }))
        .register(Expression::new("any in array", [ANY, kw("in"), ARRAY], |_, v, _| {
            Ok(Value::Boolean(array("in", &v[2])?.contains(&v[0])))
        }))
        .register(Expression::new("code forEach array", [CODE, kw("forEach"), ARRAY], for_each))
        .register(Expression::new("toUpper string", [kw("toUpper"), TEXT], |_, v, _| {
            Ok(Value::Text(text("toUpper", &v[1])?.to_uppercase()))
        }))
        .register(Expression::new("toLower string", [kw("toLower"), TEXT], |_, v, _| {
            Ok(Value::Text(text("toLower", &v[1])?.to_lowercase()))
        }))
        .register(Expression::new("format array", [kw("format"), ARRAY], format))
        .register(Expression::new("str any", [kw("str"), ANY], |_, v, _| {
            Ok(Value::Text(v[1].to_string()))
        }))
        .register(Expression::new("typeName any", [kw("typeName"), ANY], |_, v, _| {
            Ok(Value::text(v[1].kind().type_name()))
        }));
}

#[expect(
    clippy::cast_precision_loss,
    reason = "script collections are far smaller than 2^52 elements"
)]
fn length(len: usize) -> Value {
    Value::Number(len as f64)
}

/// Position an index refers to. Fractions round half to even.
#[expect(clippy::cast_sign_loss, reason = "negative indices are rejected first")]
fn to_index(index: f64) -> Option<usize> {
    let rounded = index.round_ties_even();
    (rounded.is_finite() && rounded >= 0.0).then_some(rounded as usize)
}

/// The element at `index`; one past the end reads as `Nothing`.
fn select(items: &[Value], index: f64) -> SqfResult<Value> {
    match to_index(index) {
        Some(i) if i < items.len() => Ok(items[i].clone()),
        Some(i) if i == items.len() => Ok(Value::Nothing),
        _ => Err(index_out_of_bounds(index, items.len())),
    }
}

/// Appends to the array and, when the left operand is a variable, stores
/// the grown array back into it. Returns the new element's index.
fn push_back(tokens: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    let item = &values[2];
    if !item.is_concrete() {
        return Err(type_mismatch("pushBack", "a value", item));
    }
    let mut items = array("pushBack", &values[0])?.to_vec();
    let index = items.len();
    items.push(item.clone());
    if let Value::Variable(var) = &tokens[0] {
        evaluator
            .get_scope(&var.name, None)
            .insert(&var.name, Value::Array(items));
    }
    Ok(length(index))
}

/// Number of elements for which the code returns true, `_x` bound to each.
fn count_matching(_: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    let condition = code("count", &values[0])?;
    let mut matching = 0;
    for item in array("count", &values[2])? {
        let scope: Scope = [("_x", item.clone())].into_iter().collect();
        let outcome = evaluator.execute_code(condition, None, Some(scope))?;
        if boolean("count", &outcome)? {
            matching += 1;
        }
    }
    Ok(length(matching))
}

/// Runs the code once per element with `_x` and `_forEachIndex` bound.
/// Yields the last iteration's outcome.
fn for_each(_: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    let body = code("forEach", &values[0])?;
    let mut outcome = Value::Nothing;
    for (index, item) in array("forEach", &values[2])?.iter().enumerate() {
        let scope: Scope = [("_x", item.clone()), ("_forEachIndex", length(index))]
            .into_iter()
            .collect();
        outcome = evaluator.execute_code(body, None, Some(scope))?;
    }
    Ok(outcome)
}

/// `format ["%1 of %2", a, b]`: placeholders are 1-based argument indices.
fn format(_: &[Value], values: &[Value], _: &mut Evaluator) -> SqfResult<Value> {
    let items = array("format", &values[1])?;
    let Some((template, args)) = items.split_first() else {
        return Err(type_mismatch("format", "a template string", &values[1]));
    };
    let template = text("format", template)?;
    Ok(Value::Text(render_format(template, args)))
}

fn render_format(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let mut digits = String::new();
        while let Some(d) = chars.next_if(char::is_ascii_digit) {
            digits.push(d);
        }
        let arg = digits
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));
        match arg {
            // strings are inserted without quotes
            Some(Value::Text(s)) => out.push_str(s),
            Some(other) => out.push_str(&other.to_string()),
            None => {
                out.push('%');
                out.push_str(&digits);
            }
        }
    }
    out
}
