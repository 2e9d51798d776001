//! Tests for case-tree construction and case event subscriptions.
mod common;
use caseflow::prelude::*;
use common::*;

#[test]
fn test_tree_builder_synthesizes_names() {
    let condition = greater_than("c1", 5.0)
        .with_transforms(vec![Transform::new("t1", "util", "length")]);
    let expression = ConditionalExpression::truth("e1", condition);

    let tree = CaseTreeBuilder::from_expression(&expression);
    assert_eq!(tree.name, "Expression (truth)");
    assert_eq!(tree.id, "e1");
    assert_eq!(tree.kind, "conditional_expression");

    let condition_node = &tree.children[0];
    assert_eq!(condition_node.name, "Condition: util.greater_than");
    assert_eq!(condition_node.kind, "condition");

    let transform_node = &condition_node.children[0];
    assert_eq!(transform_node.name, "Transform: util.length");
    assert_eq!(transform_node.kind, "transform");
    assert!(transform_node.is_leaf());
}

#[test]
fn test_tree_builder_orders_conditions_before_children() {
    let child = ConditionalExpression::truth("nested", equals("ce", Value::Null));
    let expression = ConditionalExpression::new("root", Operator::And)
        .with_conditions(vec![greater_than("c1", 1.0), greater_than("c2", 2.0)])
        .with_children(vec![child]);

    let tree = CaseTreeBuilder::from_expression(&expression);
    let ids: Vec<&str> = tree.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "nested"]);
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn test_subscription_store_set_and_query() {
    let mut store = SubscriptionStore::new();
    store.set(
        "case1",
        &[
            Subscription::new("id1", vec!["e1".into(), "e2".into()]),
            Subscription::new("id2", vec!["e1".into()]),
        ],
    );

    assert!(store.is_subscribed("case1", "id1", "e2"));
    assert!(!store.is_subscribed("case1", "id2", "e2"));
    assert!(!store.is_subscribed("case2", "id1", "e1"));
    assert_eq!(
        store.events_for("case1", "id1"),
        Some(["e1".to_string(), "e2".to_string()].as_slice())
    );
}

#[test]
fn test_subscription_store_merges_duplicate_ids() {
    let mut store = SubscriptionStore::new();
    store.set(
        "case1",
        &[
            Subscription::new("id1", vec!["a".into(), "b".into()]),
            Subscription::new("id1", vec!["b".into(), "c".into()]),
        ],
    );
    assert_eq!(
        store.events_for("case1", "id1"),
        Some(["a".to_string(), "b".to_string(), "c".to_string()].as_slice())
    );
}

#[test]
fn test_sync_from_replaces_store_contents() {
    let mut store = SubscriptionStore::new();
    store.set("case1", &[Subscription::new("id1", vec!["e1".into()])]);
    store.set("case2", &[Subscription::new("id1", vec!["e2".into()])]);

    store.sync_from(&sample_case_subscriptions());

    assert!(store.contains_case("case3"));
    assert!(store.contains_case("case4"));
    assert!(!store.contains_case("case1"));
    assert!(!store.contains_case("case2"));
    assert!(store.is_subscribed("case3", "id4", "d"));
    assert!(store.is_subscribed("case4", "id1", "b"));
}

#[test]
fn test_snapshot_roundtrip() {
    let mut store = SubscriptionStore::new();
    store.sync_from(&sample_case_subscriptions());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.bin");
    let path = path.to_str().unwrap();

    store.save(path).unwrap();
    let restored = SubscriptionStore::from_file(path).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn test_snapshot_rejects_garbage_bytes() {
    let err = SubscriptionStore::from_bytes(&[0xFF, 0x13, 0x37]).unwrap_err();
    assert!(err.to_string().contains("Deserialization failed"));
}
