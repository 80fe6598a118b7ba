//! Reserved operation tokens.
//!
//! SQF keywords are case-insensitive. The parser looks identifiers up in
//! the tables below to decide whether a word is a keyword (and with which
//! arity it may appear) or a plain variable name.

use std::fmt;

/// Spelling of the keywords the evaluator itself gives meaning to.
pub mod names {
    pub const ASSIGN: &str = "=";
    pub const PRIVATE: &str = "private";
    pub const PUBLIC_VARIABLE: &str = "publicVariable";
    pub const PUBLIC_VARIABLE_SERVER: &str = "publicVariableServer";
    pub const PUBLIC_VARIABLE_CLIENT: &str = "publicVariableClient";
    pub const IS_SERVER: &str = "isServer";
    pub const IS_CLIENT: &str = "isClient";
    pub const IS_DEDICATED: &str = "isDedicated";
    pub const MISSION_NAMESPACE: &str = "missionNamespace";
    pub const UI_NAMESPACE: &str = "uiNamespace";
    pub const PARSING_NAMESPACE: &str = "parsingNamespace";
    pub const PROFILE_NAMESPACE: &str = "profileNamespace";
}

/// A reserved operation token such as `=`, `+` or `isServer`.
///
/// Equality ignores ASCII case, matching the language.
#[derive(Clone, Debug)]
pub struct Keyword(Box<str>);

impl Keyword {
    pub fn new(name: &str) -> Self {
        Keyword(canonical(name).unwrap_or(name).into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a spelling.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }

    /// Whether the keyword is spelled with letters (as opposed to `+`, `==`, ...).
    pub fn is_word(&self) -> bool {
        self.0
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Keyword {}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keywords that take no operand.
pub const NULAR: &[&str] = &[
    names::IS_SERVER,
    names::IS_CLIENT,
    names::IS_DEDICATED,
    names::MISSION_NAMESPACE,
    names::UI_NAMESPACE,
    names::PARSING_NAMESPACE,
    names::PROFILE_NAMESPACE,
];

/// Keywords usable as prefix (unary) operators.
pub const UNARY: &[&str] = &[
    "!",
    "-",
    "+",
    "not",
    names::PRIVATE,
    names::PUBLIC_VARIABLE,
    names::PUBLIC_VARIABLE_SERVER,
    "count",
    "call",
    "str",
    "typeName",
    "isNil",
    "toUpper",
    "toLower",
    "format",
    "createMarker",
    "deleteMarker",
    "getMarkerPos",
    "diag_log",
    "hint",
    "systemChat",
];

/// Keywords usable as infix (binary) operators, with their precedence.
///
/// Higher numbers bind tighter. Every unary operator binds tighter than any
/// binary one.
pub const BINARY: &[(&str, u8)] = &[
    ("||", 1),
    ("or", 1),
    ("&&", 2),
    ("and", 2),
    ("==", 3),
    ("!=", 3),
    ("<", 3),
    (">", 3),
    ("<=", 3),
    (">=", 3),
    ("select", 4),
    ("pushBack", 4),
    ("in", 4),
    ("forEach", 4),
    ("call", 4),
    ("count", 4),
    ("setVariable", 4),
    ("getVariable", 4),
    ("isEqualTo", 4),
    (names::PUBLIC_VARIABLE_CLIENT, 4),
    ("+", 6),
    ("-", 6),
    ("max", 6),
    ("min", 6),
    ("*", 7),
    ("/", 7),
    ("%", 7),
    ("mod", 7),
    ("atan2", 7),
    ("^", 8),
    ("#", 9),
];

/// Precedence of `name` when used as a binary operator.
pub fn binary_precedence(name: &str) -> Option<u8> {
    BINARY
        .iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(name))
        .map(|&(_, prec)| prec)
}

pub fn is_unary(name: &str) -> bool {
    UNARY.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}

pub fn is_nular(name: &str) -> bool {
    NULAR.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}

/// Whether `name` is reserved in any position.
pub fn is_keyword(name: &str) -> bool {
    is_nular(name) || is_unary(name) || binary_precedence(name).is_some()
}

/// Canonical spelling of a keyword, if `name` is one.
pub fn canonical(name: &str) -> Option<&'static str> {
    NULAR
        .iter()
        .chain(UNARY.iter())
        .chain(BINARY.iter().map(|(kw, _)| kw))
        .chain(std::iter::once(&names::ASSIGN))
        .find(|kw| kw.eq_ignore_ascii_case(name))
        .copied()
}
