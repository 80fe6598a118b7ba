use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser and malformed-program errors
/// - E2xxx: Execution errors
/// - E9xxx: Internal engine errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated string literal or block comment
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,

    // Malformed Program (E11xx)
    /// Statement shape matches no operation
    E1101,
    /// `private` used on a global name
    E1102,
    /// Assignment target is not a variable
    E1103,
    /// Broadcast name is not a public text literal
    E1104,
    /// Private variable used as a global
    E1105,

    // Execution Errors (E2xxx)
    /// No client attached
    E2001,
    /// No simulation attached
    E2002,
    /// Marker already exists
    E2003,
    /// Invalid marker arguments
    E2004,
    /// Type mismatch inside an operation
    E2005,
    /// Index out of bounds
    E2006,
    /// Division or modulo by zero
    E2007,
    /// Client already attached
    E2008,

    // Internal Errors (E9xxx)
    /// Operation recognized but not implemented
    E9001,
    /// Scope stack underflow
    E9002,
}

impl ErrorCode {
    /// Check if this is a lexer, parser or malformed-program error.
    pub fn is_syntax_error(&self) -> bool {
        let code = self.as_str();
        code.starts_with("E0") || code.starts_with("E1")
    }

    /// Check if this is an internal engine error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        self.as_str().starts_with("E9")
    }

    /// Get the code as a string (e.g., "E1101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1101 => "E1101",
            ErrorCode::E1102 => "E1102",
            ErrorCode::E1103 => "E1103",
            ErrorCode::E1104 => "E1104",
            ErrorCode::E1105 => "E1105",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
