use super::CaseNode;
use crate::playbook::{Condition, ConditionalExpression, Transform};

/// Flattens playbook elements into [`CaseNode`] trees for display.
///
/// Playbook elements carry no display name of their own, so the builder
/// synthesizes one per node, prefixed with the element kind. Children keep
/// declaration order: an expression lists its conditions first, then its
/// child expressions; a condition lists its transforms.
pub struct CaseTreeBuilder;

impl CaseTreeBuilder {
    pub fn from_expression(expression: &ConditionalExpression) -> CaseNode {
        let mut node = CaseNode::new(
            format!("Expression ({})", expression.operator),
            expression.element.id.clone(),
            "conditional_expression",
        );
        for condition in &expression.conditions {
            node.push_child(Self::from_condition(condition));
        }
        for child in &expression.child_expressions {
            node.push_child(Self::from_expression(child));
        }
        node
    }

    pub fn from_condition(condition: &Condition) -> CaseNode {
        let mut node = CaseNode::new(
            format!("Condition: {}", condition.label()),
            condition.element.id.clone(),
            "condition",
        );
        for transform in &condition.transforms {
            node.push_child(Self::from_transform(transform));
        }
        node
    }

    pub fn from_transform(transform: &Transform) -> CaseNode {
        CaseNode::new(
            format!("Transform: {}.{}", transform.app_name, transform.action_name),
            transform.element.id.clone(),
            "transform",
        )
    }
}
