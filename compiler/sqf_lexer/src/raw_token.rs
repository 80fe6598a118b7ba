//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before values
//! are extracted from the source slice.

use logos::{Lexer, Logos};

/// Raw token from logos (before value extraction).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")] // Newlines carry no meaning in SQF
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    /// `/* ... */`; the flag is false when the comment runs to the end
    /// of the source without its closing `*/`.
    #[token("/*", block_comment)]
    BlockComment(bool),

    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Decimal,
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexInt,
    #[regex(r"\$[0-9a-fA-F]+")]
    DollarHex,

    // Quotes are escaped by doubling them
    #[regex(r#""([^"]|"")*""#)]
    DoubleQuoted,
    #[regex(r"'([^']|'')*'")]
    SingleQuoted,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("#")]
    Hash,
}

/// Consume a block comment body up to and including `*/`.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl RawToken {
    /// Spelling of operator tokens.
    pub(crate) fn operator(self) -> Option<&'static str> {
        Some(match self {
            RawToken::Assign => "=",
            RawToken::EqEq => "==",
            RawToken::NotEq => "!=",
            RawToken::Lt => "<",
            RawToken::Gt => ">",
            RawToken::LtEq => "<=",
            RawToken::GtEq => ">=",
            RawToken::AndAnd => "&&",
            RawToken::OrOr => "||",
            RawToken::Bang => "!",
            RawToken::Plus => "+",
            RawToken::Minus => "-",
            RawToken::Star => "*",
            RawToken::Slash => "/",
            RawToken::Percent => "%",
            RawToken::Caret => "^",
            RawToken::Hash => "#",
            _ => return None,
        })
    }
}
