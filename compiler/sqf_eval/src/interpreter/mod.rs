//! The evaluator.
//!
//! Walks statement trees. Each statement's tokens are materialized into
//! (token, value) pairs, then the expression table is consulted; when no
//! entry matches, the special forms in [`special_forms`] decide the
//! outcome. A statement ending in `;` or `,` yields `Nothing`.

mod builder;
mod special_forms;

pub use builder::EvaluatorBuilder;

use sqf_diagnostic::SqfResult;
use sqf_ir::keyword::names;
use smallvec::SmallVec;
use sqf_ir::{is_private_name, Code, Statement, Token, Value};
use tracing::trace;

use crate::client::{Client, SharedSimulation};
use crate::errors::{
    client_already_attached, duplicate_marker, invalid_marker, missing_client, missing_simulation,
    private_as_global, type_mismatch,
};
use crate::expressions::ExpressionTable;
use crate::marker::{Marker, MarkerTable};
use crate::namespace::{Namespace, NamespaceKind, Namespaces, Scope};
use crate::stack::with_stack_headroom;

/// Materialized tokens or values of one statement; rarely more than three.
type Operands = SmallVec<[Value; 3]>;

/// Interpreter session state.
///
/// Owns the four namespaces, the markers created so far and the optional
/// multiplayer collaborators. Single-threaded.
pub struct Evaluator {
    namespaces: Namespaces,
    current: NamespaceKind,
    markers: MarkerTable,
    expressions: ExpressionTable,
    client: Option<Box<dyn Client>>,
    simulation: Option<SharedSimulation>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// An evaluator with the built-in catalogue and no client.
    pub fn new() -> Self {
        Self::with_expressions(ExpressionTable::builtin())
    }

    pub fn with_expressions(expressions: ExpressionTable) -> Self {
        Evaluator {
            namespaces: Namespaces::default(),
            current: NamespaceKind::Mission,
            markers: MarkerTable::default(),
            expressions,
            client: None,
            simulation: None,
        }
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    // Collaborators

    /// Attach the machine scripts run on. A client can be attached once.
    pub fn attach_client(&mut self, client: Box<dyn Client>) -> SqfResult<()> {
        if self.client.is_some() {
            return Err(client_already_attached());
        }
        self.simulation = Some(client.simulation());
        self.client = Some(client);
        Ok(())
    }

    pub fn client(&self) -> SqfResult<&dyn Client> {
        self.client.as_deref().ok_or_else(missing_client)
    }

    pub fn simulation(&self) -> SqfResult<SharedSimulation> {
        self.simulation.clone().ok_or_else(missing_simulation)
    }

    // Variables and scopes

    /// Bind a global in the mission namespace's base frame.
    pub fn set_global(&mut self, name: &str, value: Value) -> SqfResult<()> {
        if is_private_name(name) {
            return Err(private_as_global(name));
        }
        if !value.is_concrete() {
            return Err(type_mismatch("set_global", "a value", &value));
        }
        self.namespaces
            .get_mut(NamespaceKind::Mission)
            .base_scope_mut()
            .insert(name, value);
        Ok(())
    }

    /// Innermost frame of `namespace` (default: the current one) binding
    /// `name`, else its innermost frame.
    pub fn get_scope(&mut self, name: &str, namespace: Option<NamespaceKind>) -> &mut Scope {
        let kind = namespace.unwrap_or(self.current);
        self.namespaces.get_mut(kind).get_scope(name)
    }

    /// Value of `name` in the current namespace; `Nothing` when unbound.
    pub fn lookup(&self, name: &str) -> Value {
        self.namespaces.get(self.current).lookup(name)
    }

    pub fn add_scope(&mut self, scope: Option<Scope>) {
        self.namespaces.get_mut(self.current).add_scope(scope);
    }

    pub fn del_scope(&mut self) -> SqfResult<Scope> {
        self.namespaces.get_mut(self.current).del_scope()
    }

    pub fn current_scope(&self) -> &Scope {
        self.namespaces.get(self.current).current_scope()
    }

    pub fn current_namespace(&self) -> NamespaceKind {
        self.current
    }

    pub fn set_current_namespace(&mut self, kind: NamespaceKind) {
        self.current = kind;
    }

    pub fn namespace(&self, kind: NamespaceKind) -> &Namespace {
        self.namespaces.get(kind)
    }

    pub(crate) fn namespace_mut(&mut self, kind: NamespaceKind) -> &mut Namespace {
        self.namespaces.get_mut(kind)
    }

    pub fn expressions(&self) -> &ExpressionTable {
        &self.expressions
    }

    // Markers

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Record a marker from `[name, position, ...]` and return its name.
    pub fn create_marker(&mut self, args: &Value) -> SqfResult<Value> {
        let Some([Value::Text(name), position, ..]) = args.as_array() else {
            return Err(invalid_marker(format!(
                "\"createMarker\" expects [name, position], found {args}"
            )));
        };
        if self.markers.contains(name) {
            return Err(duplicate_marker(name));
        }
        let Value::Array(position) = position else {
            return Err(invalid_marker(
                "Second argument of \"createMarker\" must be a position",
            ));
        };
        self.markers.insert(name.clone(), Marker::new(position.clone()));
        Ok(Value::Text(name.clone()))
    }

    pub fn delete_marker(&mut self, name: &str) -> Option<Marker> {
        self.markers.remove(name)
    }

    // Evaluation

    /// Run statements in order and return the last outcome.
    pub fn execute(&mut self, statements: &[Statement]) -> SqfResult<Value> {
        let mut outcome = Value::Nothing;
        for statement in statements {
            outcome = self.execute_single(statement)?;
        }
        Ok(outcome)
    }

    /// Run a code block in a fresh frame holding `_this` (default `[]`)
    /// and any extra bindings. The frame is removed even on error.
    #[tracing::instrument(level = "debug", skip_all, fields(code = %code))]
    pub fn execute_code(
        &mut self,
        code: &Code,
        params: Option<Value>,
        extra: Option<Scope>,
    ) -> SqfResult<Value> {
        let mut scope = extra.unwrap_or_default();
        scope.insert("_this", params.unwrap_or_else(|| Value::Array(Vec::new())));
        self.add_scope(Some(scope));
        let outcome = self.execute(code.statements());
        let popped = self.del_scope();
        let outcome = outcome?;
        popped?;
        Ok(outcome)
    }

    /// Evaluate one statement.
    #[tracing::instrument(level = "trace", skip_all, fields(statement = %statement))]
    pub fn execute_single(&mut self, statement: &Statement) -> SqfResult<Value> {
        let outcome = with_stack_headroom(|| self.evaluate_statement(statement))
            .map_err(|err| err.or_span(statement.span))?;
        if statement.ending {
            Ok(Value::Nothing)
        } else {
            Ok(outcome)
        }
    }

    fn evaluate_statement(&mut self, statement: &Statement) -> SqfResult<Value> {
        if statement.is_empty() {
            return Ok(Value::Nothing);
        }
        // The nested assignment runs after the declaration, not before.
        if let Some(assignment) = special_forms::private_assignment(statement) {
            return self.declare_and_assign(statement, assignment);
        }

        let mut tokens = Operands::with_capacity(statement.len());
        let mut values = Operands::with_capacity(statement.len());
        for token in &statement.tokens {
            let (token, value) = self.execute_token(token)?;
            tokens.push(token);
            values.push(value);
        }

        if let Some(expression) = self.expressions.dispatch(&values) {
            trace!(expression = expression.name(), "dispatch");
            let handler = expression.handler();
            return handler(&tokens, &values, self);
        }
        self.special_form(statement, &tokens, &values)
    }

    /// Materialize a token into its evaluated form and resolved value.
    ///
    /// Nested statements are evaluated, array literals are built from
    /// their non-empty elements and client queries are answered by the
    /// attached client. A variable stays a variable; its value is looked
    /// up in the current namespace.
    pub fn execute_token(&mut self, token: &Token) -> SqfResult<(Value, Value)> {
        let result = match token {
            Token::Statement(statement) => self.execute_single(statement)?,
            Token::Array(array) => {
                let mut items = Vec::with_capacity(array.elements.len());
                for element in array.elements.iter().filter(|element| !element.is_empty()) {
                    items.push(self.execute_single(element)?);
                }
                Value::Array(items)
            }
            Token::Keyword(kw, _) if kw.is(names::IS_SERVER) => {
                Value::Boolean(self.client()?.is_server())
            }
            Token::Keyword(kw, _) if kw.is(names::IS_CLIENT) => {
                Value::Boolean(self.client()?.is_client())
            }
            Token::Keyword(kw, _) if kw.is(names::IS_DEDICATED) => {
                Value::Boolean(self.client()?.is_dedicated())
            }
            Token::Keyword(kw, _) => Value::Keyword(kw.clone()),
            Token::Variable(var) => Value::Variable(var.clone()),
            Token::Literal(value, _) => value.clone(),
        };
        let value = match &result {
            Value::Variable(var) => self.lookup(&var.name),
            other => other.clone(),
        };
        Ok((result, value))
    }
}
