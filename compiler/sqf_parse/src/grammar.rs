//! Statement and expression grammar.

use sqf_diagnostic::SqfResult;
use sqf_ir::keyword::{self, names};
use sqf_ir::{ArrayLiteral, Code, Keyword, Span, Statement, Token, Value, Variable};
use sqf_lexer::LexKind;
use tracing::trace;

use crate::error::{expected_expression, lex_error, unclosed_delimiter, unexpected_token};
use crate::Parser;

/// What closes the statement sequence being parsed.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Closer {
    Eof,
    Brace,
}

impl Parser<'_> {
    pub(crate) fn parse_script(&mut self) -> SqfResult<Vec<Statement>> {
        let statements = self.parse_statements(Closer::Eof, Span::DUMMY)?;
        if self.cursor.is_at_end() {
            Ok(statements)
        } else {
            Err(unexpected_token(self.cursor.current(), "end of input"))
        }
    }

    /// Parse statements up to (not including) the closer.
    fn parse_statements(&mut self, closer: Closer, open: Span) -> SqfResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            match self.cursor.current_kind() {
                LexKind::Eof if closer == Closer::Brace => {
                    return Err(unclosed_delimiter(open, '{'));
                }
                LexKind::Eof | LexKind::RBrace => break,
                LexKind::Semicolon | LexKind::Comma => {
                    self.cursor.advance();
                }
                _ => {
                    let mut statement = self.parse_statement()?;
                    if self.cursor.at_separator() {
                        self.cursor.advance();
                        statement.ending = true;
                    } else if !self.at_closer(closer) {
                        return Err(unexpected_token(self.cursor.current(), "`;`"));
                    }
                    trace!(statement = %statement, "statement");
                    statements.push(statement);
                }
            }
        }
        Ok(statements)
    }

    fn at_closer(&self, closer: Closer) -> bool {
        match closer {
            Closer::Eof => self.cursor.is_at_end(),
            Closer::Brace => matches!(self.cursor.current_kind(), LexKind::RBrace),
        }
    }

    /// `private name = expr`, `lhs = expr`, or an expression.
    fn parse_statement(&mut self) -> SqfResult<Statement> {
        if self.at_private_assignment() {
            let private_span = self.cursor.advance();
            let assignment = self.parse_assignment_or_expression()?;
            let span = private_span.merge(assignment.span);
            return Ok(Statement::new(
                [
                    Token::Keyword(Keyword::new(names::PRIVATE), private_span),
                    Token::Statement(assignment),
                ],
                span,
            ));
        }
        self.parse_assignment_or_expression()
    }

    fn at_private_assignment(&self) -> bool {
        let is_private = matches!(
            self.cursor.current_kind(),
            LexKind::Ident(name) if name.eq_ignore_ascii_case(names::PRIVATE)
        );
        let is_name = matches!(
            &self.cursor.peek(1).kind,
            LexKind::Ident(name) if !keyword::is_keyword(name)
        );
        let is_assign = matches!(
            &self.cursor.peek(2).kind,
            LexKind::Operator(op) if *op == names::ASSIGN
        );
        is_private && is_name && is_assign
    }

    fn parse_assignment_or_expression(&mut self) -> SqfResult<Statement> {
        let lhs = self.parse_expression(0)?;
        if !self.cursor.at_operator(names::ASSIGN) {
            return Ok(into_statement(lhs));
        }
        let assign_span = self.cursor.advance();
        let rhs = self.parse_expression(0)?;
        let span = lhs.span().merge(rhs.span());
        Ok(Statement::new(
            [
                lhs,
                Token::Keyword(Keyword::new(names::ASSIGN), assign_span),
                rhs,
            ],
            span,
        ))
    }

    /// Precedence climbing over binary keywords; all are left-associative.
    fn parse_expression(&mut self, min_precedence: u8) -> SqfResult<Token> {
        let mut lhs = self.parse_unary()?;
        while let Some((name, precedence)) = self.peek_binary() {
            if precedence < min_precedence {
                break;
            }
            let op_span = self.cursor.advance();
            let rhs = self.parse_expression(precedence + 1)?;
            let span = lhs.span().merge(rhs.span());
            lhs = Token::Statement(Statement::new(
                [lhs, Token::Keyword(Keyword::new(&name), op_span), rhs],
                span,
            ));
        }
        Ok(lhs)
    }

    fn peek_binary(&self) -> Option<(String, u8)> {
        let name = match self.cursor.current_kind() {
            LexKind::Operator(op) => *op,
            LexKind::Ident(name) => name.as_str(),
            _ => return None,
        };
        keyword::binary_precedence(name).map(|precedence| (name.to_owned(), precedence))
    }

    fn parse_unary(&mut self) -> SqfResult<Token> {
        let name = match self.cursor.current_kind() {
            LexKind::Operator(op) if keyword::is_unary(op) => (*op).to_owned(),
            LexKind::Ident(name) if keyword::is_unary(name) => name.clone(),
            _ => return self.parse_primary(),
        };
        let op_span = self.cursor.advance();
        let operand = self.parse_unary()?;
        let span = op_span.merge(operand.span());
        Ok(Token::Statement(Statement::new(
            [Token::Keyword(Keyword::new(&name), op_span), operand],
            span,
        )))
    }

    fn parse_primary(&mut self) -> SqfResult<Token> {
        let lexeme = self.cursor.current();
        let span = lexeme.span;
        let token = match &lexeme.kind {
            LexKind::Number(n) => Token::Literal(Value::Number(*n), span),
            LexKind::Text(s) => Token::Literal(Value::text(s.as_str()), span),
            LexKind::Ident(name) if name.eq_ignore_ascii_case("true") => {
                Token::Literal(Value::Boolean(true), span)
            }
            LexKind::Ident(name) if name.eq_ignore_ascii_case("false") => {
                Token::Literal(Value::Boolean(false), span)
            }
            LexKind::Ident(name) if name.eq_ignore_ascii_case("nil") => {
                Token::Literal(Value::Nothing, span)
            }
            LexKind::Ident(name) if keyword::is_nular(name) => {
                Token::Keyword(Keyword::new(name), span)
            }
            LexKind::Ident(name) if !keyword::is_keyword(name) => {
                Token::Variable(Variable::new(name.as_str(), span))
            }
            LexKind::LParen => return self.parse_parenthesized(),
            LexKind::LBracket => return self.parse_array(),
            LexKind::LBrace => return self.parse_code(),
            _ => return Err(expected_expression(lexeme)),
        };
        self.cursor.advance();
        Ok(token)
    }

    fn parse_parenthesized(&mut self) -> SqfResult<Token> {
        let open = self.cursor.advance();
        let inner = self.parse_expression(0)?;
        let close = self.expect_closing(&LexKind::RParen, open, '(')?;
        let span = open.merge(close);
        let statement = match inner {
            Token::Statement(statement) if !statement.parenthesis => statement,
            other => Statement::new([other], span),
        };
        Ok(Token::Statement(Statement {
            span,
            ..statement.parenthesized()
        }))
    }

    fn parse_array(&mut self) -> SqfResult<Token> {
        let open = self.cursor.advance();
        let mut elements = Vec::new();
        if !matches!(self.cursor.current_kind(), LexKind::RBracket) {
            loop {
                let element = self.parse_expression(0)?;
                elements.push(into_statement(element));
                if matches!(self.cursor.current_kind(), LexKind::Comma) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        let close = self.expect_closing(&LexKind::RBracket, open, '[')?;
        Ok(Token::Array(ArrayLiteral {
            elements,
            span: open.merge(close),
        }))
    }

    fn parse_code(&mut self) -> SqfResult<Token> {
        let open = self.cursor.advance();
        let statements = self.parse_statements(Closer::Brace, open)?;
        let close = self.expect_closing(&LexKind::RBrace, open, '{')?;
        Ok(Token::Literal(
            Value::Code(Code::new(statements)),
            open.merge(close),
        ))
    }

    fn expect_closing(&mut self, closing: &LexKind, open: Span, delimiter: char) -> SqfResult<Span> {
        let current = self.cursor.current();
        if current.kind == *closing {
            return Ok(self.cursor.advance());
        }
        if let Some(err) = lex_error(current) {
            return Err(err);
        }
        if self.cursor.is_at_end() {
            Err(unclosed_delimiter(open, delimiter))
        } else {
            let expected = match closing {
                LexKind::RParen => "`)`",
                LexKind::RBracket => "`,` or `]`",
                _ => "`}`",
            };
            Err(unexpected_token(current, expected))
        }
    }
}

/// A non-parenthesized application is adopted as the statement itself;
/// anything else becomes a single-token statement.
fn into_statement(token: Token) -> Statement {
    match token {
        Token::Statement(statement) if !statement.parenthesis => statement,
        other => {
            let span = other.span();
            Statement::new([other], span)
        }
    }
}
