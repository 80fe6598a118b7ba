//! Expression dispatch table.
//!
//! Every operation the evaluator knows is an [`Expression`]: an argument
//! pattern plus a handler. A statement's evaluated values are matched
//! against the table in order and the first matching entry runs. Order is
//! priority, so more specific entries must come before broader ones.

mod collections;
mod commands;
mod operators;

use std::fmt;

use sqf_diagnostic::SqfResult;
use sqf_ir::{Code, Value, ValueKind};

use crate::errors::type_mismatch;
use crate::Evaluator;

/// Handler signature: materialized tokens, their values and the evaluator.
///
/// `tokens[i]` is the token as evaluated (a variable reference stays a
/// [`Value::Variable`]); `values[i]` is its resolved value.
pub type Handler = fn(&[Value], &[Value], &mut Evaluator) -> SqfResult<Value>;

/// Predicate over one argument position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgPattern {
    /// Matches any value.
    Any,
    /// Matches values of one variant.
    Kind(ValueKind),
    /// Matches the keyword with this spelling.
    Keyword(&'static str),
    /// Matches any of these keywords.
    OneOf(&'static [&'static str]),
}

impl ArgPattern {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ArgPattern::Any => true,
            ArgPattern::Kind(kind) => value.kind() == *kind,
            ArgPattern::Keyword(name) => value.is_keyword(name),
            ArgPattern::OneOf(names) => names.iter().any(|name| value.is_keyword(name)),
        }
    }
}

/// Shorthand constructors used by the catalogue.
pub mod pattern {
    use super::ArgPattern;
    use sqf_ir::ValueKind;

    pub const ANY: ArgPattern = ArgPattern::Any;
    pub const NUMBER: ArgPattern = ArgPattern::Kind(ValueKind::Number);
    pub const BOOLEAN: ArgPattern = ArgPattern::Kind(ValueKind::Boolean);
    pub const TEXT: ArgPattern = ArgPattern::Kind(ValueKind::Text);
    pub const ARRAY: ArgPattern = ArgPattern::Kind(ValueKind::Array);
    pub const CODE: ArgPattern = ArgPattern::Kind(ValueKind::Code);

    pub const fn kw(name: &'static str) -> ArgPattern {
        ArgPattern::Keyword(name)
    }

    pub const fn one_of(names: &'static [&'static str]) -> ArgPattern {
        ArgPattern::OneOf(names)
    }
}

/// One table entry.
#[derive(Clone)]
pub struct Expression {
    name: &'static str,
    pattern: Vec<ArgPattern>,
    handler: Handler,
}

impl Expression {
    pub fn new(name: &'static str, pattern: impl Into<Vec<ArgPattern>>, handler: Handler) -> Self {
        Expression {
            name,
            pattern: pattern.into(),
            handler,
        }
    }

    /// Display name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.pattern.len()
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    pub fn is_match(&self, values: &[Value]) -> bool {
        values.len() == self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(values)
                .all(|(pattern, value)| pattern.matches(value))
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Ordered catalogue of operations.
#[derive(Clone, Debug, Default)]
pub struct ExpressionTable {
    expressions: Vec<Expression>,
}

impl ExpressionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalogue.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        operators::register(&mut table);
        collections::register(&mut table);
        commands::register(&mut table);
        table
    }

    /// Append an entry; it has lower priority than every existing one.
    pub fn register(&mut self, expression: Expression) -> &mut Self {
        self.expressions.push(expression);
        self
    }

    /// First entry matching `values`.
    pub fn dispatch(&self, values: &[Value]) -> Option<&Expression> {
        self.expressions.iter().find(|expression| expression.is_match(values))
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

// Argument extraction. Patterns already guarantee the variant; these turn a
// mismatch into an error instead of a panic.

pub(crate) fn number(operation: &str, value: &Value) -> SqfResult<f64> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch(operation, "a number", value))
}

pub(crate) fn boolean(operation: &str, value: &Value) -> SqfResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(operation, "a boolean", value))
}

pub(crate) fn text<'v>(operation: &str, value: &'v Value) -> SqfResult<&'v str> {
    value
        .as_text()
        .ok_or_else(|| type_mismatch(operation, "a string", value))
}

pub(crate) fn array<'v>(operation: &str, value: &'v Value) -> SqfResult<&'v [Value]> {
    value
        .as_array()
        .ok_or_else(|| type_mismatch(operation, "an array", value))
}

pub(crate) fn code<'v>(operation: &str, value: &'v Value) -> SqfResult<&'v Code> {
    value
        .as_code()
        .ok_or_else(|| type_mismatch(operation, "code", value))
}
