//! Common test utilities for building playbook elements and data.
use caseflow::prelude::*;

/// A condition checking `data > threshold` using the built-in util app.
#[allow(dead_code)]
pub fn greater_than(id: &str, threshold: f64) -> Condition {
    Condition::new(id, "util", "greater_than")
        .with_arguments(vec![Argument::new("threshold", Value::Number(threshold))])
}

/// A condition checking `data == value` using the built-in util app.
#[allow(dead_code)]
pub fn equals(id: &str, value: Value) -> Condition {
    Condition::new(id, "util", "equals").with_arguments(vec![Argument::new("value", value)])
}

/// An expression: `$data > 10 AND $data < 20`.
#[allow(dead_code)]
pub fn in_range_expression() -> ConditionalExpression {
    let lower = greater_than("lower", 10.0);
    let upper = Condition::new("upper", "util", "smaller_than")
        .with_arguments(vec![Argument::new("threshold", Value::Number(20.0))]);
    ConditionalExpression::new("range", Operator::And).with_conditions(vec![lower, upper])
}

/// Subscription records matching the shapes the original system stored.
#[allow(dead_code)]
pub fn sample_case_subscriptions() -> Vec<CaseSubscription> {
    vec![
        CaseSubscription::new(
            "case3",
            vec![
                Subscription::new("id3", vec!["e".into(), "b".into(), "c".into()]),
                Subscription::new("id4", vec!["d".into()]),
            ],
        ),
        CaseSubscription::new(
            "case4",
            vec![Subscription::new("id1", vec!["a".into(), "b".into()])],
        ),
    ]
}
