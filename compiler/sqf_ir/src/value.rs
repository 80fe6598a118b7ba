//! Runtime values.
//!
//! `Value` is the closed set of things a token can evaluate to. Only the
//! first six variants are concrete values; `Variable` and `Keyword` are
//! token-level and are resolved or interpreted by the evaluator before any
//! operation sees them as data.

use std::fmt;
use std::rc::Rc;

use crate::ast::Statement;
use crate::keyword::Keyword;
use crate::Span;

/// Prefix that marks a variable as local-only.
pub const PRIVATE_SIGIL: char = '_';

/// Whether `name` follows the local-only naming convention.
#[inline]
pub fn is_private_name(name: &str) -> bool {
    name.starts_with(PRIVATE_SIGIL)
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    Text(String),
    Array(Vec<Value>),
    Code(Code),
    /// The unit / absent value.
    Nothing,
    /// Unresolved name reference.
    Variable(Variable),
    /// Reserved operation token.
    Keyword(Keyword),
}

/// Discriminant of a [`Value`], used by dispatch patterns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Boolean,
    Text,
    Array,
    Code,
    Nothing,
    Variable,
    Keyword,
}

impl ValueKind {
    /// Name reported by the `typeName` command.
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Number => "SCALAR",
            ValueKind::Boolean => "BOOL",
            ValueKind::Text => "STRING",
            ValueKind::Array => "ARRAY",
            ValueKind::Code => "CODE",
            ValueKind::Nothing => "NOTHING",
            ValueKind::Variable => "VARIABLE",
            ValueKind::Keyword => "KEYWORD",
        }
    }
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn keyword(name: &str) -> Self {
        Value::Keyword(Keyword::new(name))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Array,
            Value::Code(_) => ValueKind::Code,
            Value::Nothing => ValueKind::Nothing,
            Value::Variable(_) => ValueKind::Variable,
            Value::Keyword(_) => ValueKind::Keyword,
        }
    }

    /// Concrete values are the ones that can be stored in a scope.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Value::Variable(_) | Value::Keyword(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    /// Whether this is the keyword `name`.
    pub fn is_keyword(&self, name: &str) -> bool {
        matches!(self, Value::Keyword(kw) if kw.is(name))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Value::Code(code) => Some(code),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Code(a), Value::Code(b)) => a.ptr_eq(b),
            (Value::Nothing, Value::Nothing) => true,
            (Value::Variable(a), Value::Variable(b)) => a == b,
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Code(code) => write!(f, "{code}"),
            Value::Nothing => f.write_str("Nothing"),
            Value::Variable(var) => f.write_str(&var.name),
            Value::Keyword(kw) => write!(f, "{kw}"),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n:.2}")
    }
}

/// A deferred statement sequence.
///
/// Code captures no scope; the caller supplies one when invoking it.
/// Equality is reference identity: two code values are equal only when
/// they come from the same literal.
#[derive(Clone, Debug)]
pub struct Code {
    statements: Rc<[Statement]>,
}

impl Code {
    pub fn new(statements: Vec<Statement>) -> Self {
        Code {
            statements: statements.into(),
        }
    }

    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Code) -> bool {
        Rc::ptr_eq(&self.statements, &other.statements)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for statement in self.statements.iter() {
            write!(f, "{statement}")?;
        }
        f.write_str("}")
    }
}

/// A reference to a variable by name.
///
/// Names are case-insensitive; the span is ignored by equality.
#[derive(Clone, Debug)]
pub struct Variable {
    pub name: String,
    pub span: Span,
}

impl Variable {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Variable {
            name: name.into(),
            span,
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Variable {}

#[cfg(test)]
mod tests;
