//! Tests for the core data-model contracts: default-empty collections,
//! order preservation, and wire shapes.
mod common;
use caseflow::prelude::*;
use common::in_range_expression;

#[test]
fn test_case_node_starts_with_empty_children() {
    let node = CaseNode::new("root", "1", "workflow");
    assert_eq!(node.children.len(), 0);
    assert!(node.is_leaf());
    assert_eq!(node.node_count(), 1);
}

#[test]
fn test_case_node_child_identity_and_order() {
    let mut parent = CaseNode::new("root", "1", "workflow");
    let first = CaseNode::new("Condition: util.equals", "2", "condition");
    let second = CaseNode::new("Transform: util.length", "3", "transform");
    parent.push_child(first.clone());
    parent.push_child(second.clone());

    assert_eq!(parent.children[0], first);
    assert_eq!(parent.children[1], second);
    assert_eq!(parent.node_count(), 3);
}

#[test]
fn test_case_node_find_by_id() {
    let mut root = CaseNode::new("root", "1", "workflow");
    let mut middle = CaseNode::new("mid", "2", "condition");
    middle.push_child(CaseNode::new("leaf", "3", "transform"));
    root.push_child(middle);

    assert_eq!(root.find("3").map(|n| n.name.as_str()), Some("leaf"));
    assert!(root.find("missing").is_none());
}

#[test]
fn test_transform_starts_with_empty_arguments() {
    let transform = Transform::new("t1", "shell", "run");
    assert_eq!(transform.app_name, "shell");
    assert_eq!(transform.action_name, "run");
    assert_eq!(transform.arguments.len(), 0);
}

#[test]
fn test_transform_argument_order_preserved() {
    let transform = Transform::new("t1", "shell", "run").with_arguments(vec![
        Argument::new("first", Value::Number(1.0)),
        Argument::new("second", Value::Number(2.0)),
    ]);
    assert_eq!(transform.arguments[0].name, "first");
    assert_eq!(transform.arguments[1].name, "second");
}

#[test]
fn test_condition_defaults() {
    let condition = Condition::new("c1", "util", "equals");
    assert!(!condition.is_negated);
    assert!(condition.arguments.is_empty());
    assert!(condition.transforms.is_empty());
    assert_eq!(condition.label(), "util.equals");
}

#[test]
fn test_case_node_kind_serializes_as_type() {
    let node = CaseNode::new("root", "1", "workflow");
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["type"], "workflow");
    assert_eq!(json["children"].as_array().unwrap().len(), 0);
}

#[test]
fn test_case_node_deserializes_without_children() {
    let node: CaseNode =
        serde_json::from_str(r#"{"name":"root","id":"1","type":"workflow"}"#).unwrap();
    assert_eq!(node.kind, "workflow");
    assert!(node.children.is_empty());
}

#[test]
fn test_transform_deserializes_flat_with_defaults() {
    let transform: Transform =
        serde_json::from_str(r#"{"id":"t1","app_name":"shell","action_name":"run"}"#).unwrap();
    assert_eq!(transform.element.id, "t1");
    assert!(transform.arguments.is_empty());
}

#[test]
fn test_expression_deserializes_lowercase_operator() {
    let expr: ConditionalExpression = serde_json::from_str(
        r#"{"id":"e1","operator":"xor","conditions":[{"id":"c1","app_name":"util","action_name":"always_true"}]}"#,
    )
    .unwrap();
    assert_eq!(expr.operator, Operator::Xor);
    assert_eq!(expr.conditions.len(), 1);
    assert!(expr.child_expressions.is_empty());
    assert!(!expr.is_empty());
}

#[test]
fn test_argument_roundtrip_with_reference_and_selection() {
    let argument = Argument::reference("target", "action-7")
        .with_selection(vec![Value::from("hosts"), Value::Number(0.0)]);
    let json = serde_json::to_string(&argument).unwrap();
    let back: Argument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, argument);

    // A plain literal argument omits reference and selection on the wire.
    let literal = Argument::new("count", Value::Number(3.0));
    let json = serde_json::to_value(&literal).unwrap();
    assert!(json.get("reference").is_none());
    assert!(json.get("selection").is_none());
}

#[test]
fn test_expression_validates_against_registry() {
    let registry = AppRegistry::with_defaults();
    let valid = in_range_expression();
    assert!(valid.validate(&registry).is_ok());

    let invalid = ConditionalExpression::truth("e1", Condition::new("c1", "nope", "missing"));
    let err = invalid.validate(&registry).unwrap_err();
    assert!(err.to_string().contains("nope"));
    assert!(err.to_string().contains("missing"));
}
