//! Namespaces and their scope stacks.
//!
//! There are four independent namespaces. Each owns a stack of scopes: the
//! base frame holds the namespace's globals and every further frame is a
//! local frame pushed when a code block runs. Lookup walks the stack from
//! the innermost frame outwards.
//!
//! Names are case-insensitive; bindings are keyed by the lower-cased name.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sqf_diagnostic::SqfResult;
use sqf_ir::keyword::names;
use sqf_ir::Value;

use crate::errors::scope_underflow;

/// One of the four global namespaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
    Ui,
    Parsing,
    Mission,
    Profile,
}

impl NamespaceKind {
    pub const ALL: [NamespaceKind; 4] = [
        NamespaceKind::Ui,
        NamespaceKind::Parsing,
        NamespaceKind::Mission,
        NamespaceKind::Profile,
    ];

    /// Keyword that evaluates to this namespace in scripts.
    pub fn keyword(self) -> &'static str {
        match self {
            NamespaceKind::Ui => names::UI_NAMESPACE,
            NamespaceKind::Parsing => names::PARSING_NAMESPACE,
            NamespaceKind::Mission => names::MISSION_NAMESPACE,
            NamespaceKind::Profile => names::PROFILE_NAMESPACE,
        }
    }

    pub fn from_keyword(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(name))
    }

    /// The namespace a keyword value stands for.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Keyword(kw) => Self::from_keyword(kw.as_str()),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            NamespaceKind::Ui => 0,
            NamespaceKind::Parsing => 1,
            NamespaceKind::Mission => 2,
            NamespaceKind::Profile => 3,
        }
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// A single frame of variable bindings, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: IndexMap<String, Value, FxBuildHasher>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Value bound to `name`, or `Nothing` when unbound. Never inserts.
    pub fn get(&self, name: &str) -> Value {
        self.bindings
            .get(&key(name))
            .cloned()
            .unwrap_or(Value::Nothing)
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.bindings.insert(key(name), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(&key(name))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in insertion order, keyed by lower-cased name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: AsRef<str>> FromIterator<(S, Value)> for Scope {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut scope = Scope::new();
        for (name, value) in iter {
            scope.insert(name.as_ref(), value);
        }
        scope
    }
}

/// A scope stack that never shrinks below its base frame.
#[derive(Clone, Debug)]
pub struct Namespace {
    scopes: Vec<Scope>,
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::new(Scope::new())
    }
}

impl Namespace {
    pub fn new(globals: Scope) -> Self {
        Namespace {
            scopes: vec![globals],
        }
    }

    /// Frame holding the namespace's globals.
    pub fn base_scope(&self) -> &Scope {
        &self.scopes[0]
    }

    pub fn base_scope_mut(&mut self) -> &mut Scope {
        &mut self.scopes[0]
    }

    /// Innermost frame.
    pub fn current_scope(&self) -> &Scope {
        // The stack always holds the base frame.
        &self.scopes[self.scopes.len() - 1]
    }

    pub fn current_scope_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Innermost frame binding `name`, else the innermost frame.
    pub fn get_scope(&mut self, name: &str) -> &mut Scope {
        let last = self.scopes.len() - 1;
        let index = self
            .scopes
            .iter()
            .rposition(|scope| scope.contains(name))
            .unwrap_or(last);
        &mut self.scopes[index]
    }

    /// Resolve `name` from the innermost frame outwards.
    pub fn lookup(&self, name: &str) -> Value {
        self.scopes
            .iter()
            .rev()
            .find(|scope| scope.contains(name))
            .map_or(Value::Nothing, |scope| scope.get(name))
    }

    pub fn add_scope(&mut self, scope: Option<Scope>) {
        self.scopes.push(scope.unwrap_or_default());
    }

    /// Pop the innermost frame. The base frame cannot be removed.
    pub fn del_scope(&mut self) -> SqfResult<Scope> {
        if self.scopes.len() <= 1 {
            return Err(scope_underflow());
        }
        self.scopes.pop().ok_or_else(scope_underflow)
    }

    /// Number of frames, base included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// The four namespaces, indexed by [`NamespaceKind`].
#[derive(Clone, Debug, Default)]
pub struct Namespaces {
    namespaces: [Namespace; 4],
}

impl Namespaces {
    pub fn get(&self, kind: NamespaceKind) -> &Namespace {
        &self.namespaces[kind.index()]
    }

    pub fn get_mut(&mut self, kind: NamespaceKind) -> &mut Namespace {
        &mut self.namespaces[kind.index()]
    }
}

#[cfg(test)]
mod tests;
