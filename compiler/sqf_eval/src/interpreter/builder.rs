//! `EvaluatorBuilder` for configuring an [`Evaluator`] before first use.

use sqf_diagnostic::SqfResult;
use sqf_ir::Value;

use super::Evaluator;
use crate::client::Client;
use crate::expressions::ExpressionTable;
use crate::namespace::NamespaceKind;

/// Builder for evaluators with pre-seeded state.
///
/// ```
/// use sqf_eval::Evaluator;
/// use sqf_ir::Value;
///
/// let evaluator = Evaluator::builder()
///     .global("difficulty", Value::Number(2.0))
///     .build()
///     .unwrap();
/// assert_eq!(evaluator.lookup("difficulty"), Value::Number(2.0));
/// ```
pub struct EvaluatorBuilder {
    globals: Vec<(String, Value)>,
    client: Option<Box<dyn Client>>,
    expressions: Option<ExpressionTable>,
    namespace: NamespaceKind,
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        EvaluatorBuilder {
            globals: Vec::new(),
            client: None,
            expressions: None,
            namespace: NamespaceKind::Mission,
        }
    }

    /// Seed a mission namespace global.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.globals.push((name.into(), value));
        self
    }

    #[must_use]
    pub fn client(mut self, client: impl Client + 'static) -> Self {
        self.client = Some(Box::new(client));
        self
    }

    /// Replace the built-in catalogue.
    #[must_use]
    pub fn expressions(mut self, expressions: ExpressionTable) -> Self {
        self.expressions = Some(expressions);
        self
    }

    /// Namespace used by unqualified lookups. Default: mission.
    #[must_use]
    pub fn namespace(mut self, namespace: NamespaceKind) -> Self {
        self.namespace = namespace;
        self
    }

    /// Build the evaluator. Fails if a seeded global is private or not a
    /// concrete value.
    pub fn build(self) -> SqfResult<Evaluator> {
        let mut evaluator =
            Evaluator::with_expressions(self.expressions.unwrap_or_else(ExpressionTable::builtin));
        for (name, value) in self.globals {
            evaluator.set_global(&name, value)?;
        }
        if let Some(client) = self.client {
            evaluator.attach_client(client)?;
        }
        evaluator.set_current_namespace(self.namespace);
        Ok(evaluator)
    }
}
