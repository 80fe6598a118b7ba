//! Centralized error constructors for the evaluator.
//!
//! Handlers and special forms build their errors here so that codes and
//! message wording stay consistent across the crate.

use sqf_diagnostic::{ErrorCode, SqfError};
use sqf_ir::{Span, Statement, Value};

// Malformed programs

/// No operation or special form accepts the statement's shape.
pub fn malformed_statement(statement: &Statement) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1101,
        statement.span,
        format!("Interpretation of \"{statement}\" failed"),
    )
}

pub fn private_on_global(statement: &Statement, name: &str, span: Span) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1102,
        span,
        format!(
            "Interpretation of \"{statement}\" failed: cannot use global variable \"{name}\" in `private`"
        ),
    )
}

pub fn invalid_assignment_target(statement: &Statement) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1103,
        statement.span,
        format!("Interpretation of \"{statement}\" failed: left side must be a variable"),
    )
}

pub fn invalid_broadcast_name(statement: &Statement) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1104,
        statement.span,
        format!("Interpretation of \"{statement}\" failed: expected a public variable name"),
    )
}

pub fn invalid_client_id(statement: &Statement, id: f64) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1101,
        statement.span,
        format!("Interpretation of \"{statement}\" failed: client id {id} is not a whole number"),
    )
}

/// A private name used where only globals may go. The span is filled in
/// from the enclosing statement when there is one.
pub fn private_as_global(name: &str) -> SqfError {
    SqfError::syntax(
        ErrorCode::E1105,
        Span::DUMMY,
        format!("Private variable \"{name}\" cannot be declared as a global"),
    )
}

// Execution

pub fn missing_client() -> SqfError {
    SqfError::execution(ErrorCode::E2001, "Trying to access client without a client")
}

pub fn missing_simulation() -> SqfError {
    SqfError::execution(
        ErrorCode::E2002,
        "Trying to access simulation without a simulation assigned",
    )
}

pub fn duplicate_marker(name: &str) -> SqfError {
    SqfError::execution(ErrorCode::E2003, format!("Marker \"{name}\" already exists"))
}

pub fn invalid_marker(message: impl Into<String>) -> SqfError {
    SqfError::execution(ErrorCode::E2004, message)
}

pub fn type_mismatch(operation: &str, expected: &str, found: &Value) -> SqfError {
    SqfError::execution(
        ErrorCode::E2005,
        format!(
            "`{operation}` expected {expected}, found {} {found}",
            found.kind().type_name()
        ),
    )
}

pub fn index_out_of_bounds(index: f64, len: usize) -> SqfError {
    SqfError::execution(
        ErrorCode::E2006,
        format!("index {index} out of bounds for array of length {len}"),
    )
}

pub fn division_by_zero(operation: &str) -> SqfError {
    SqfError::execution(ErrorCode::E2007, format!("`{operation}` by zero"))
}

pub fn client_already_attached() -> SqfError {
    SqfError::execution(ErrorCode::E2008, "A client is already attached")
}

// Internal

pub fn unimplemented_operation(statement: &Statement) -> SqfError {
    SqfError::internal(
        ErrorCode::E9001,
        format!("Operation \"{statement}\" is recognized but not implemented"),
    )
}

pub fn scope_underflow() -> SqfError {
    SqfError::internal(ErrorCode::E9002, "Cannot remove the base scope of a namespace")
}
