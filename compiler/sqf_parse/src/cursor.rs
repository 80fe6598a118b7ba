//! Cursor over the lexeme stream.
//!
//! Provides lookahead and consumption. The last lexeme is always `Eof`, so
//! every position the cursor can reach is valid.

use sqf_ir::Span;
use sqf_lexer::{LexKind, Lexeme};
use tracing::trace;

pub(crate) struct Cursor<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(lexemes: &'a [Lexeme]) -> Self {
        Cursor { lexemes, pos: 0 }
    }

    /// Current lexeme; sticks at `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &'a Lexeme {
        self.peek(0)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a LexKind {
        &self.current().kind
    }

    /// Lexeme `n` positions ahead, clamped to `Eof`.
    pub(crate) fn peek(&self, n: usize) -> &'a Lexeme {
        let last = self.lexemes.len().saturating_sub(1);
        &self.lexemes[(self.pos + n).min(last)]
    }

    /// Consume the current lexeme and return its span.
    pub(crate) fn advance(&mut self) -> Span {
        let lexeme = self.current();
        trace!(kind = ?lexeme.kind, span = %lexeme.span, "advance");
        if !self.is_at_end() {
            self.pos += 1;
        }
        lexeme.span
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), LexKind::Eof)
    }

    /// Whether the current lexeme is the operator `op`.
    pub(crate) fn at_operator(&self, op: &str) -> bool {
        matches!(self.current_kind(), LexKind::Operator(o) if *o == op)
    }

    /// Whether the current lexeme ends a statement.
    pub(crate) fn at_separator(&self) -> bool {
        matches!(self.current_kind(), LexKind::Semicolon | LexKind::Comma)
    }
}
