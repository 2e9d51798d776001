use super::Condition;
use crate::element::ExecutionElement;
use crate::error::ElementError;
use crate::eval::AppRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean combinator applied over an expression's operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Passes through the single operand unchanged.
    Truth,
    /// Negates the single operand.
    Not,
    And,
    Or,
    Xor,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Truth => "truth",
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
        };
        write!(f, "{}", name)
    }
}

/// A boolean expression tree over conditions.
///
/// Operands are the direct `conditions` plus the nested
/// `child_expressions`, in that order. `Truth` and `Not` apply to a single
/// operand: the first condition if one exists, otherwise the first child
/// expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    #[serde(flatten)]
    pub element: ExecutionElement,
    pub operator: Operator,
    #[serde(default)]
    pub child_expressions: Vec<ConditionalExpression>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl ConditionalExpression {
    pub fn new(id: impl Into<String>, operator: Operator) -> Self {
        Self {
            element: ExecutionElement::new(id),
            operator,
            child_expressions: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Convenience constructor for a truth expression over one condition.
    pub fn truth(id: impl Into<String>, condition: Condition) -> Self {
        Self::new(id, Operator::Truth).with_conditions(vec![condition])
    }

    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_children(mut self, child_expressions: Vec<ConditionalExpression>) -> Self {
        self.child_expressions = child_expressions;
        self
    }

    /// True when the expression has no operands at all.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.child_expressions.is_empty()
    }

    /// Recursively validates every condition and nested expression.
    pub fn validate(&self, registry: &AppRegistry) -> Result<(), ElementError> {
        for condition in &self.conditions {
            condition.validate(registry)?;
        }
        for child in &self.child_expressions {
            child.validate(registry)?;
        }
        Ok(())
    }
}
