//! End-to-end tests: source text in, outcome and session state out.


use sqf_diagnostic::SqfError;
use sqf_ir::Value;

use crate::interpret;

/// Outcome of a script that must succeed.
fn run(source: &str) -> Value {
    match interpret(source) {
        Ok((_, outcome)) => outcome,
        Err(err) => panic!("{source:?} failed: {err}"),
    }
}

/// Error of a script that must fail.
fn fail(source: &str) -> SqfError {
    match interpret(source) {
        Ok((_, outcome)) => panic!("{source:?} succeeded with {outcome}"),
        Err(err) => err,
    }
}

fn numbers(items: &[f64]) -> Value {
    Value::Array(items.iter().copied().map(Value::Number).collect())
}
