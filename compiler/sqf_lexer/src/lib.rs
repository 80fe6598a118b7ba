//! Lexer for SQF using logos.
//!
//! Produces a flat list of [`Lexeme`]s terminated by `Eof`. Whitespace and
//! comments are dropped. Input logos cannot match becomes an error lexeme;
//! the parser turns those into syntax errors with the right span.

mod raw_token;

use logos::Logos;
use sqf_ir::Span;

use raw_token::RawToken;

/// Kind of a lexed token, with its extracted value.
#[derive(Clone, Debug, PartialEq)]
pub enum LexKind {
    Number(f64),
    /// String literal with quotes removed and doubled quotes collapsed.
    Text(String),
    Ident(String),
    Operator(&'static str),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semicolon,
    Comma,
    /// Numeric literal that does not fit a number.
    InvalidNumber,
    /// Stray quote: a string literal without its closing quote.
    UnterminatedString,
    /// `/*` with no matching `*/` before the end of the source.
    UnterminatedComment,
    /// Character logos could not match.
    Invalid,
    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lexeme {
    pub kind: LexKind,
    pub span: Span,
}

impl Lexeme {
    pub fn new(kind: LexKind, span: Span) -> Self {
        Lexeme { kind, span }
    }
}

/// Lex source code into a list of lexemes ending with `Eof`.
pub fn lex(source: &str) -> Vec<Lexeme> {
    let mut result = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment(true)) => {}
            Ok(RawToken::BlockComment(false)) => {
                result.push(Lexeme::new(LexKind::UnterminatedComment, span));
            }
            Ok(raw) => result.push(Lexeme::new(convert_token(raw, slice), span)),
            Err(()) => {
                let kind = if slice.starts_with('"') || slice.starts_with('\'') {
                    LexKind::UnterminatedString
                } else {
                    LexKind::Invalid
                };
                result.push(Lexeme::new(kind, span));
            }
        }
    }

    result.push(Lexeme::new(LexKind::Eof, Span::point(Span::from_range(0..source.len()).end)));
    result
}

fn convert_token(raw: RawToken, slice: &str) -> LexKind {
    match raw {
        RawToken::Decimal => slice
            .parse::<f64>()
            .map_or(LexKind::InvalidNumber, LexKind::Number),
        RawToken::HexInt => parse_hex(&slice[2..]),
        RawToken::DollarHex => parse_hex(&slice[1..]),
        RawToken::DoubleQuoted => LexKind::Text(unquote(slice, '"')),
        RawToken::SingleQuoted => LexKind::Text(unquote(slice, '\'')),
        RawToken::Ident => LexKind::Ident(slice.to_owned()),
        RawToken::LBrace => LexKind::LBrace,
        RawToken::RBrace => LexKind::RBrace,
        RawToken::LBracket => LexKind::LBracket,
        RawToken::RBracket => LexKind::RBracket,
        RawToken::LParen => LexKind::LParen,
        RawToken::RParen => LexKind::RParen,
        RawToken::Semicolon => LexKind::Semicolon,
        RawToken::Comma => LexKind::Comma,
        other => other.operator().map_or(LexKind::Invalid, LexKind::Operator),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "SQF numbers are doubles; large hex literals lose precision there too"
)]
fn parse_hex(digits: &str) -> LexKind {
    u64::from_str_radix(digits, 16).map_or(LexKind::InvalidNumber, |n| LexKind::Number(n as f64))
}

fn unquote(slice: &str, quote: char) -> String {
    let inner = &slice[1..slice.len() - 1];
    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}

#[cfg(test)]
mod tests;
