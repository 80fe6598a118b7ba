//! Parse error constructors.
//!
//! Every parse failure is a malformed-program [`SqfError`] carrying the span
//! of the lexeme where parsing stopped.

use sqf_diagnostic::{ErrorCode, SqfError};
use sqf_ir::Span;
use sqf_lexer::{LexKind, Lexeme};

/// Human-readable description of a lexeme for messages.
pub(crate) fn describe(kind: &LexKind) -> String {
    match kind {
        LexKind::Number(n) => format!("number `{n}`"),
        LexKind::Text(s) => format!("string \"{s}\""),
        LexKind::Ident(name) => format!("`{name}`"),
        LexKind::Operator(op) => format!("`{op}`"),
        LexKind::LBrace => "`{`".to_owned(),
        LexKind::RBrace => "`}`".to_owned(),
        LexKind::LBracket => "`[`".to_owned(),
        LexKind::RBracket => "`]`".to_owned(),
        LexKind::LParen => "`(`".to_owned(),
        LexKind::RParen => "`)`".to_owned(),
        LexKind::Semicolon => "`;`".to_owned(),
        LexKind::Comma => "`,`".to_owned(),
        LexKind::InvalidNumber => "invalid number".to_owned(),
        LexKind::UnterminatedString => "unterminated string".to_owned(),
        LexKind::UnterminatedComment => "unterminated block comment".to_owned(),
        LexKind::Invalid => "invalid character".to_owned(),
        LexKind::Eof => "end of input".to_owned(),
    }
}

/// Error for a lexeme the lexer could not make sense of, if it is one.
pub(crate) fn lex_error(lexeme: &Lexeme) -> Option<SqfError> {
    let code = match lexeme.kind {
        LexKind::Invalid => ErrorCode::E0001,
        LexKind::UnterminatedString | LexKind::UnterminatedComment => ErrorCode::E0002,
        LexKind::InvalidNumber => ErrorCode::E0003,
        _ => return None,
    };
    Some(SqfError::syntax(
        code,
        lexeme.span,
        format!("{} in source", describe(&lexeme.kind)),
    ))
}

pub(crate) fn unexpected_token(lexeme: &Lexeme, expected: &str) -> SqfError {
    lex_error(lexeme).unwrap_or_else(|| {
        SqfError::syntax(
            ErrorCode::E1001,
            lexeme.span,
            format!("expected {expected}, found {}", describe(&lexeme.kind)),
        )
    })
}

pub(crate) fn expected_expression(lexeme: &Lexeme) -> SqfError {
    lex_error(lexeme).unwrap_or_else(|| {
        SqfError::syntax(
            ErrorCode::E1002,
            lexeme.span,
            format!("expected expression, found {}", describe(&lexeme.kind)),
        )
    })
}

pub(crate) fn unclosed_delimiter(open: Span, delimiter: char) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1003,
        open,
        format!("unclosed delimiter `{delimiter}`"),
    )
}
