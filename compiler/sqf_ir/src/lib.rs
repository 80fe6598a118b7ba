//! SQF IR - values and statement trees.
//!
//! This crate contains the data the interpreter works on:
//! - [`Span`] for source locations
//! - [`Value`], the closed set of runtime values
//! - [`Keyword`] and the keyword tables the parser consults
//! - [`Statement`] / [`Token`], the tree handed to the evaluator
//!
//! Nothing here evaluates anything. The tree is immutable once built.

pub mod ast;
pub mod keyword;
mod span;
mod value;

pub use ast::{ArrayLiteral, Statement, Token, TokenList};
pub use keyword::Keyword;
pub use span::Span;
pub use value::{is_private_name, Code, Value, ValueKind, Variable, PRIVATE_SIGIL};
