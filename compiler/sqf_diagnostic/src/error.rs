//! The interpreter's error type.
//!
//! Three kinds, all propagated to the caller of `execute`/`interpret`:
//! - `Syntax`: the program is malformed (bad token shape, `private` on a
//!   global name, assignment to a non-name, ...). Carries a source span.
//! - `Execution`: legal at parse time but invalid while running (missing
//!   client, duplicate marker, out-of-range index, ...).
//! - `Internal`: a limitation of the engine rather than a script defect
//!   (an operation recognized structurally but given no semantics, or a
//!   broken scope-stack invariant).

use sqf_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Result alias used across the interpreter crates.
pub type SqfResult<T> = Result<T, SqfError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SqfError {
    #[error("syntax error [{code}] at {span}: {message}")]
    Syntax {
        code: ErrorCode,
        span: Span,
        message: String,
    },
    #[error("execution error [{code}]: {message}")]
    Execution { code: ErrorCode, message: String },
    #[error("internal error [{code}]: {message}")]
    Internal { code: ErrorCode, message: String },
}

impl SqfError {
    pub fn syntax(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        SqfError::Syntax {
            code,
            span,
            message: message.into(),
        }
    }

    pub fn execution(code: ErrorCode, message: impl Into<String>) -> Self {
        SqfError::Execution {
            code,
            message: message.into(),
        }
    }

    pub fn internal(code: ErrorCode, message: impl Into<String>) -> Self {
        SqfError::Internal {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SqfError::Syntax { code, .. }
            | SqfError::Execution { code, .. }
            | SqfError::Internal { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SqfError::Syntax { message, .. }
            | SqfError::Execution { message, .. }
            | SqfError::Internal { message, .. } => message,
        }
    }

    /// Source position, available for malformed-program errors only.
    pub fn span(&self) -> Option<Span> {
        match self {
            SqfError::Syntax { span, .. } => Some(*span),
            SqfError::Execution { .. } | SqfError::Internal { .. } => None,
        }
    }

    /// Give a syntax error raised without a location the span of the
    /// enclosing statement.
    #[must_use]
    pub fn or_span(self, fallback: Span) -> Self {
        match self {
            SqfError::Syntax {
                code,
                span,
                message,
            } if span == Span::DUMMY => SqfError::Syntax {
                code,
                span: fallback,
                message,
            },
            other => other,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, SqfError::Syntax { .. })
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, SqfError::Execution { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, SqfError::Internal { .. })
    }

    /// Convert into a diagnostic. Internal errors are reported as warnings
    /// since they point at the engine, not at the script.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SqfError::Syntax {
                code,
                span,
                message,
            } => Diagnostic::error(*code)
                .with_message(message.clone())
                .with_label(*span, "malformed statement"),
            SqfError::Execution { code, message } => {
                Diagnostic::error(*code).with_message(message.clone())
            }
            SqfError::Internal { code, message } => Diagnostic::warning(*code)
                .with_message(message.clone())
                .with_note("this is a limitation of the interpreter, not a defect in the script"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn syntax_error_carries_span() {
        let err = SqfError::syntax(ErrorCode::E1101, Span::new(3, 9), "Interpretation of \"a b\" failed");
        assert!(err.is_syntax());
        assert_eq!(err.span(), Some(Span::new(3, 9)));
        assert_eq!(
            err.to_string(),
            "syntax error [E1101] at 3..9: Interpretation of \"a b\" failed"
        );
    }

    #[test]
    fn execution_error_has_no_span() {
        let err = SqfError::execution(ErrorCode::E2003, "Marker \"m1\" already exists");
        assert!(err.is_execution());
        assert_eq!(err.span(), None);
        assert_eq!(err.code(), ErrorCode::E2003);
        assert_eq!(err.message(), "Marker \"m1\" already exists");
    }

    #[test]
    fn or_span_fills_only_missing_locations() {
        let located = SqfError::syntax(ErrorCode::E1105, Span::DUMMY, "private").or_span(Span::new(2, 5));
        assert_eq!(located.span(), Some(Span::new(2, 5)));

        let kept = SqfError::syntax(ErrorCode::E1102, Span::new(1, 2), "x").or_span(Span::new(2, 5));
        assert_eq!(kept.span(), Some(Span::new(1, 2)));

        let execution = SqfError::execution(ErrorCode::E2001, "no client").or_span(Span::new(2, 5));
        assert_eq!(execution.span(), None);
    }

    #[test]
    fn internal_error_is_a_warning_diagnostic() {
        let err = SqfError::internal(ErrorCode::E9001, "operation `a` `foo` `b` is not implemented");
        let diag = err.to_diagnostic();
        assert!(!diag.is_error());
        assert_eq!(diag.notes.len(), 1);
    }
}
