//! Statement shapes the expression table does not cover.
//!
//! Tried in order once dispatch finds no entry: `publicVariable`,
//! `publicVariableServer`, `private`, three-token forms with a keyword in
//! the middle (assignment, `publicVariableClient`) and lone tokens.

use sqf_diagnostic::SqfResult;
use sqf_ir::keyword::names;
use sqf_ir::{is_private_name, Keyword, Span, Statement, Token, Value, Variable};
use tracing::warn;

use super::Evaluator;
use crate::client::BroadcastTarget;
use crate::errors::{
    invalid_assignment_target, invalid_broadcast_name, invalid_client_id, malformed_statement,
    private_on_global, unimplemented_operation,
};
use crate::namespace::NamespaceKind;

/// The assignment inside `private name = value`, if that is the shape.
pub(super) fn private_assignment(statement: &Statement) -> Option<&Statement> {
    match statement.tokens.as_slice() {
        [op, Token::Statement(assignment)]
            if op.is_keyword(names::PRIVATE) && assignment.is_assignment() =>
        {
            Some(assignment)
        }
        _ => None,
    }
}

/// Variable on the left of an assignment. A nested statement contributes
/// its first token.
fn assignment_target(assignment: &Statement) -> SqfResult<&Variable> {
    let target = match assignment.tokens.first() {
        Some(Token::Statement(inner)) => inner.tokens.first(),
        other => other,
    };
    match target {
        Some(Token::Variable(var)) => Ok(var),
        _ => Err(invalid_assignment_target(assignment)),
    }
}

impl Evaluator {
    pub(super) fn special_form(
        &mut self,
        statement: &Statement,
        tokens: &[Value],
        values: &[Value],
    ) -> SqfResult<Value> {
        match tokens {
            [op, name] if op.is_keyword(names::PUBLIC_VARIABLE) => {
                self.public_variable(statement, name, BroadcastTarget::Everyone)
            }
            [op, name] if op.is_keyword(names::PUBLIC_VARIABLE_SERVER) => {
                self.public_variable(statement, name, BroadcastTarget::Server)
            }
            [op, target] if op.is_keyword(names::PRIVATE) => {
                self.private(statement, target, &values[1])
            }
            [_, Value::Keyword(op), _] => self.keyword_form(statement, op, tokens, values),
            [_] => Ok(values[0].clone()),
            _ => Err(malformed_statement(statement)),
        }
    }

    /// `private "_a"`, `private ["_a", "_b"]` and `private _a` declare the
    /// names as `Nothing` in the current frame.
    fn private(&mut self, statement: &Statement, token: &Value, value: &Value) -> SqfResult<Value> {
        let declared: Vec<(&str, Span)> = match (token, value) {
            (Value::Variable(var), _) => vec![(var.name.as_str(), var.span)],
            (_, Value::Text(name)) => vec![(name.as_str(), statement.span)],
            (_, Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Text(name) => Ok((name.as_str(), statement.span)),
                    _ => Err(malformed_statement(statement)),
                })
                .collect::<SqfResult<_>>()?,
            _ => return Err(malformed_statement(statement)),
        };
        self.add_privates(statement, &declared)?;
        Ok(Value::Nothing)
    }

    fn add_privates(&mut self, statement: &Statement, declared: &[(&str, Span)]) -> SqfResult<()> {
        if let Some(&(name, span)) = declared.iter().find(|(name, _)| !is_private_name(name)) {
            return Err(private_on_global(statement, name, span));
        }
        let scope = self.namespace_mut(self.current).current_scope_mut();
        for (name, _) in declared {
            scope.insert(name, Value::Nothing);
        }
        Ok(())
    }

    /// `private name = value`: declare, then assign.
    pub(super) fn declare_and_assign(
        &mut self,
        statement: &Statement,
        assignment: &Statement,
    ) -> SqfResult<Value> {
        let target = assignment_target(assignment)?;
        self.add_privates(statement, &[(target.name.as_str(), target.span)])?;
        self.execute_single(assignment)
    }

    fn keyword_form(
        &mut self,
        statement: &Statement,
        op: &Keyword,
        tokens: &[Value],
        values: &[Value],
    ) -> SqfResult<Value> {
        if op.is(names::ASSIGN) {
            return self.assign(statement, &values[2]);
        }
        if op.is(names::PUBLIC_VARIABLE_CLIENT) {
            return self.public_variable_client(statement, tokens, values);
        }
        warn!(statement = %statement, "operation recognized but not implemented");
        Err(unimplemented_operation(statement))
    }

    /// `name = value` binds in the frame that already holds `name`, else in
    /// the innermost frame, and yields the value.
    fn assign(&mut self, statement: &Statement, value: &Value) -> SqfResult<Value> {
        let target = assignment_target(statement)?;
        if !value.is_concrete() {
            return Err(malformed_statement(statement));
        }
        self.get_scope(&target.name, None)
            .insert(&target.name, value.clone());
        Ok(value.clone())
    }

    fn public_variable(
        &mut self,
        statement: &Statement,
        name: &Value,
        target: BroadcastTarget,
    ) -> SqfResult<Value> {
        let name = broadcast_name(statement, name)?;
        self.broadcast(name, target)
    }

    /// `id publicVariableClient "name"`. The id is taken from the left
    /// token as written, so it must be a whole number there.
    fn public_variable_client(
        &mut self,
        statement: &Statement,
        tokens: &[Value],
        values: &[Value],
    ) -> SqfResult<Value> {
        let (Value::Number(id), Value::Number(_)) = (&tokens[0], &values[0]) else {
            return Err(malformed_statement(statement));
        };
        let target =
            BroadcastTarget::from_number(*id).ok_or_else(|| invalid_client_id(statement, *id))?;
        let name = broadcast_name(statement, &tokens[2])?;
        self.broadcast(name, target)
    }

    /// Send the mission namespace's value of `name`.
    fn broadcast(&mut self, name: &str, target: BroadcastTarget) -> SqfResult<Value> {
        let value = self.namespace(NamespaceKind::Mission).lookup(name);
        self.simulation()?.broadcast(name, &value, target);
        Ok(Value::Nothing)
    }
}

fn broadcast_name<'v>(statement: &Statement, token: &'v Value) -> SqfResult<&'v str> {
    match token {
        Value::Text(name) if !is_private_name(name) => Ok(name.as_str()),
        _ => Err(invalid_broadcast_name(statement)),
    }
}
