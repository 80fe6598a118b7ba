//! Parser for SQF.
//!
//! Turns source text into the statement tree the evaluator consumes.
//! Binary applications are grouped by precedence climbing over the
//! keyword tables in [`sqf_ir::keyword`]; every application becomes a
//! nested [`Statement`] of the shape `[lhs, op, rhs]` or `[op, operand]`.

mod cursor;
mod error;
mod grammar;

use sqf_diagnostic::SqfResult;
use sqf_ir::Statement;
use sqf_lexer::lex;

use cursor::Cursor;

/// Parse a whole script into its top-level statements.
///
/// Statements separated by `;` or `,` have their `ending` flag set; empty
/// statements are dropped.
///
/// ```
/// let statements = sqf_parse::parse("_x = 1 + 2;").unwrap();
/// assert_eq!(statements.len(), 1);
/// assert_eq!(statements[0].to_string(), "_x=1+2;");
/// ```
pub fn parse(source: &str) -> SqfResult<Vec<Statement>> {
    let lexemes = lex(source);
    let mut parser = Parser::new(&lexemes);
    parser.parse_script()
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(lexemes: &'a [sqf_lexer::Lexeme]) -> Self {
        Parser {
            cursor: Cursor::new(lexemes),
        }
    }
}

#[cfg(test)]
mod tests;
