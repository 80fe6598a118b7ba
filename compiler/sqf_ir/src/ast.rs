//! Statement tree consumed by the evaluator.
//!
//! A script is a sequence of [`Statement`]s. Each statement is a short list
//! of tokens: a binary application is `[lhs, op, rhs]`, a unary one
//! `[op, operand]`, and a lone value is a single token. Nested applications
//! appear as `Token::Statement`.

use std::fmt;

use crate::keyword::Keyword;
use crate::value::{Value, Variable};
use crate::Span;

/// Tokens of one statement. Nested statements sit behind the heap
/// allocation, so `Statement` and `Token` stay finitely sized.
pub type TokenList = Vec<Token>;

/// One parsed unit: a token sequence plus a result-discard flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub tokens: TokenList,
    /// Trailing `;` or `,`: the outcome is discarded.
    pub ending: bool,
    /// Written inside parentheses (affects rendering only).
    pub parenthesis: bool,
    pub span: Span,
}

impl Statement {
    pub fn new(tokens: impl IntoIterator<Item = Token>, span: Span) -> Self {
        Statement {
            tokens: tokens.into_iter().collect(),
            ending: false,
            parenthesis: false,
            span,
        }
    }

    /// Builder-style setter for the terminator flag.
    #[must_use]
    pub fn with_ending(mut self, ending: bool) -> Self {
        self.ending = ending;
        self
    }

    #[must_use]
    pub fn parenthesized(mut self) -> Self {
        self.parenthesis = true;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether this is an `lhs = rhs` statement.
    pub fn is_assignment(&self) -> bool {
        self.tokens.len() == 3
            && matches!(&self.tokens[1], Token::Keyword(kw, _) if kw.is(crate::keyword::names::ASSIGN))
    }
}

/// One element of a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Statement(Statement),
    Array(ArrayLiteral),
    /// Number, boolean, text, code or `nil` written in the source.
    Literal(Value, Span),
    Variable(Variable),
    Keyword(Keyword, Span),
}

impl Token {
    pub fn number(n: f64) -> Self {
        Token::Literal(Value::Number(n), Span::DUMMY)
    }

    pub fn boolean(b: bool) -> Self {
        Token::Literal(Value::Boolean(b), Span::DUMMY)
    }

    pub fn text(s: &str) -> Self {
        Token::Literal(Value::text(s), Span::DUMMY)
    }

    pub fn code(statements: Vec<Statement>) -> Self {
        Token::Literal(Value::Code(crate::value::Code::new(statements)), Span::DUMMY)
    }

    pub fn variable(name: &str) -> Self {
        Token::Variable(Variable::new(name, Span::DUMMY))
    }

    pub fn keyword(name: &str) -> Self {
        Token::Keyword(Keyword::new(name), Span::DUMMY)
    }

    pub fn array(elements: Vec<Statement>) -> Self {
        Token::Array(ArrayLiteral {
            elements,
            span: Span::DUMMY,
        })
    }

    pub fn span(&self) -> Span {
        match self {
            Token::Statement(statement) => statement.span,
            Token::Array(array) => array.span,
            Token::Literal(_, span) | Token::Keyword(_, span) => *span,
            Token::Variable(var) => var.span,
        }
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        matches!(self, Token::Keyword(kw, _) if kw.is(name))
    }
}

/// `[a, b, ...]` as written; each element is evaluated on materialization.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Statement>,
    pub span: Span,
}

// Rendering

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '"'
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for token in &self.tokens {
            let rendered = token.to_string();
            let joins_words = out.chars().last().is_some_and(is_word_char)
                && rendered.chars().next().is_some_and(is_word_char);
            if joins_words {
                out.push(' ');
            }
            out.push_str(&rendered);
        }
        if self.parenthesis {
            write!(f, "({out})")?;
        } else {
            f.write_str(&out)?;
        }
        if self.ending {
            f.write_str(";")?;
        }
        Ok(())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Statement(statement) => write!(f, "{statement}"),
            Token::Array(array) => write!(f, "{array}"),
            Token::Literal(value, _) => write!(f, "{value}"),
            Token::Variable(var) => f.write_str(&var.name),
            Token::Keyword(kw, _) => write!(f, "{kw}"),
        }
    }
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assign(name: &str, n: f64) -> Statement {
        Statement::new(
            [Token::variable(name), Token::keyword("="), Token::number(n)],
            Span::DUMMY,
        )
    }

    #[test]
    fn renders_code_block() {
        let code = Token::code(vec![assign("_x", 2.0).with_ending(true)]);
        assert_eq!(code.to_string(), "{_x=2;}");
    }

    #[test]
    fn separates_adjacent_words() {
        let statement = Statement::new(
            [Token::keyword("private"), Token::variable("_x")],
            Span::DUMMY,
        );
        assert_eq!(statement.to_string(), "private _x");
    }

    #[test]
    fn renders_parenthesis_and_arrays() {
        let inner = Statement::new(
            [Token::number(1.0), Token::keyword("+"), Token::number(2.0)],
            Span::DUMMY,
        )
        .parenthesized();
        let array = Token::array(vec![
            Statement::new([Token::Statement(inner)], Span::DUMMY),
            Statement::new([Token::text("a")], Span::DUMMY),
        ]);
        assert_eq!(array.to_string(), "[(1+2),\"a\"]");
    }

    #[test]
    fn nested_statements_stay_small() {
        let mut statement = assign("_x", 1.0);
        for _ in 0..64 {
            statement = Statement::new(
                [Token::keyword("-"), Token::Statement(statement)],
                Span::DUMMY,
            );
        }
        assert_eq!(statement.len(), 2);
        assert!(std::mem::size_of::<Statement>() <= 64);
        assert!(std::mem::size_of::<Token>() <= 64);
    }

    #[test]
    fn detects_assignment() {
        assert!(assign("_x", 1.0).is_assignment());
        let call = Statement::new(
            [Token::keyword("call"), Token::variable("_f")],
            Span::DUMMY,
        );
        assert!(!call.is_assignment());
    }
}
