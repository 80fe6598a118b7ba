use pretty_assertions::assert_eq;
use sqf_diagnostic::ErrorCode;
use sqf_ir::Value;

use super::*;

#[test]
fn unbound_names_read_as_nothing() {
    let scope = Scope::new();
    assert_eq!(scope.get("_missing"), Value::Nothing);
    assert!(scope.is_empty());
}

#[test]
fn names_are_case_insensitive() {
    let mut scope = Scope::new();
    scope.insert("MyVar", Value::Number(1.0));
    assert!(scope.contains("myvar"));
    assert_eq!(scope.get("MYVAR"), Value::Number(1.0));
    scope.insert("myVAR", Value::Number(2.0));
    assert_eq!(scope.len(), 1);
}

#[test]
fn scope_iterates_in_insertion_order() {
    let scope: Scope = [("b", Value::Number(1.0)), ("a", Value::Number(2.0))]
        .into_iter()
        .collect();
    let names: Vec<&str> = scope.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn get_scope_finds_innermost_binding() {
    let mut namespace = Namespace::default();
    namespace.base_scope_mut().insert("g", Value::Number(1.0));
    namespace.add_scope(None);
    namespace.add_scope(Some([("_x", Value::Number(2.0))].into_iter().collect()));

    // bound in the base frame
    namespace.get_scope("g").insert("g", Value::Number(3.0));
    assert_eq!(namespace.base_scope().get("g"), Value::Number(3.0));

    // unbound: innermost frame
    namespace.get_scope("_new").insert("_new", Value::Boolean(true));
    assert!(namespace.current_scope().contains("_new"));
    assert!(!namespace.base_scope().contains("_new"));
}

#[test]
fn lookup_prefers_inner_frames() {
    let mut namespace = Namespace::default();
    namespace.base_scope_mut().insert("_x", Value::Number(1.0));
    namespace.add_scope(Some([("_x", Value::Number(2.0))].into_iter().collect()));
    assert_eq!(namespace.lookup("_x"), Value::Number(2.0));
    namespace.del_scope().unwrap_or_default();
    assert_eq!(namespace.lookup("_x"), Value::Number(1.0));
}

#[test]
fn base_scope_cannot_be_removed() {
    let mut namespace = Namespace::default();
    namespace.add_scope(None);
    assert!(namespace.del_scope().is_ok());
    let err = namespace.del_scope().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E9002);
    assert!(err.is_internal());
    assert_eq!(namespace.depth(), 1);
}

#[test]
fn namespaces_are_independent() {
    let mut namespaces = Namespaces::default();
    namespaces
        .get_mut(NamespaceKind::Ui)
        .base_scope_mut()
        .insert("shared", Value::Number(1.0));
    assert_eq!(
        namespaces.get(NamespaceKind::Mission).lookup("shared"),
        Value::Nothing
    );
    assert_eq!(
        namespaces.get(NamespaceKind::Ui).lookup("shared"),
        Value::Number(1.0)
    );
}

#[test]
fn namespace_kinds_map_to_keywords() {
    assert_eq!(
        NamespaceKind::from_keyword("MISSIONNAMESPACE"),
        Some(NamespaceKind::Mission)
    );
    assert_eq!(
        NamespaceKind::from_value(&Value::keyword("profileNamespace")),
        Some(NamespaceKind::Profile)
    );
    assert_eq!(NamespaceKind::from_value(&Value::text("uiNamespace")), None);
    assert_eq!(NamespaceKind::Parsing.to_string(), "parsingNamespace");
}
