//! Code, variable, namespace, marker and logging commands.

#![allow(
    clippy::unnecessary_wraps,
    reason = "every handler shares the table's fallible signature"
)]

use sqf_diagnostic::SqfResult;
use sqf_ir::keyword::names;
use sqf_ir::{is_private_name, Value};
use tracing::info;

use super::pattern::{kw, one_of, ANY, ARRAY, CODE, TEXT};
use super::{array, code, text, Expression, ExpressionTable};
use crate::errors::{private_as_global, type_mismatch};
use crate::namespace::NamespaceKind;
use crate::Evaluator;

const NAMESPACES: &[&str] = &[
    names::UI_NAMESPACE,
    names::PARSING_NAMESPACE,
    names::MISSION_NAMESPACE,
    names::PROFILE_NAMESPACE,
];

/// Target of script log output.
const SCRIPT_LOG: &str = "sqf::script";

pub(super) fn register(table: &mut ExpressionTable) {
    // code
    table
        .register(Expression::new("call code", [kw("call"), CODE], |_, v, e| {
            e.execute_code(code("call", &v[1])?, None, None)
        }))
        .register(Expression::new("any call code", [ANY, kw("call"), CODE], |_, v, e| {
            e.execute_code(code("call", &v[2])?, Some(v[0].clone()), None)
        }));

    // variables
    table
        .register(Expression::new("isNil string", [kw("isNil"), TEXT], |_, v, e| {
            Ok(Value::Boolean(e.lookup(text("isNil", &v[1])?).is_nothing()))
        }))
        .register(Expression::new("isNil code", [kw("isNil"), CODE], |_, v, e| {
            let outcome = e.execute_code(code("isNil", &v[1])?, None, None)?;
            Ok(Value::Boolean(outcome.is_nothing()))
        }));

    // namespaces
    table
        .register(Expression::new(
            "namespace setVariable array",
            [one_of(NAMESPACES), kw("setVariable"), ARRAY],
            set_variable,
        ))
        .register(Expression::new(
            "namespace getVariable string",
            [one_of(NAMESPACES), kw("getVariable"), TEXT],
            |_, v, e| {
                let namespace = namespace_of("getVariable", &v[0])?;
                let name = text("getVariable", &v[2])?;
                Ok(e.namespace(namespace).base_scope().get(name))
            },
        ))
        .register(Expression::new(
            "namespace getVariable array",
            [one_of(NAMESPACES), kw("getVariable"), ARRAY],
            get_variable_or_default,
        ));

    // markers
    table
        .register(Expression::new("createMarker array", [kw("createMarker"), ARRAY], |_, v, e| {
            e.create_marker(&v[1])
        }))
        .register(Expression::new("deleteMarker string", [kw("deleteMarker"), TEXT], |_, v, e| {
            e.delete_marker(text("deleteMarker", &v[1])?);
            Ok(Value::Nothing)
        }))
        .register(Expression::new("getMarkerPos string", [kw("getMarkerPos"), TEXT], |_, v, e| {
            let name = text("getMarkerPos", &v[1])?;
            Ok(e.markers().get(name).map_or_else(
                || Value::Array(vec![Value::Number(0.0); 3]),
                |marker| Value::Array(marker.position.clone()),
            ))
        }));

    // diagnostics
    table
        .register(Expression::new("diag_log any", [kw("diag_log"), ANY], |_, v, _| {
            info!(target: SCRIPT_LOG, "{}", v[1]);
            Ok(Value::Nothing)
        }))
        .register(Expression::new("hint string", [kw("hint"), TEXT], |_, v, _| {
            let message = text("hint", &v[1])?;
            info!(target: SCRIPT_LOG, hint = message);
            Ok(Value::Nothing)
        }))
        .register(Expression::new("systemChat string", [kw("systemChat"), TEXT], |_, v, _| {
            let message = text("systemChat", &v[1])?;
            info!(target: SCRIPT_LOG, system_chat = message);
            Ok(Value::Nothing)
        }));
}

fn namespace_of(operation: &str, value: &Value) -> SqfResult<NamespaceKind> {
    NamespaceKind::from_value(value).ok_or_else(|| type_mismatch(operation, "a namespace", value))
}

/// `namespace setVariable [name, value]` stores a global of that namespace.
fn set_variable(_: &[Value], values: &[Value], evaluator: &mut Evaluator) -> SqfResult<Value> {
    let namespace = namespace_of("setVariable", &values[0])?;
    let [name, value, ..] = array("setVariable", &values[2])? else {
        return Err(type_mismatch("setVariable", "[name, value]", &values[2]));
    };
    let name = text("setVariable", name)?;
    if is_private_name(name) {
        return Err(private_as_global(name));
    }
    if !value.is_concrete() {
        return Err(type_mismatch("setVariable", "a value", value));
    }
    evaluator
        .namespace_mut(namespace)
        .base_scope_mut()
        .insert(name, value.clone());
    Ok(Value::Nothing)
}

/// `namespace getVariable [name, default]`: the default replaces `Nothing`.
fn get_variable_or_default(
    _: &[Value],
    values: &[Value],
    evaluator: &mut Evaluator,
) -> SqfResult<Value> {
    let namespace = namespace_of("getVariable", &values[0])?;
    let [name, default] = array("getVariable", &values[2])? else {
        return Err(type_mismatch("getVariable", "[name, default]", &values[2]));
    };
    let value = evaluator
        .namespace(namespace)
        .base_scope()
        .get(text("getVariable", name)?);
    Ok(if value.is_nothing() {
        default.clone()
    } else {
        value
    })
}
