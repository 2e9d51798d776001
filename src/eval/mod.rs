use crate::element::Value;
use crate::error::EvaluationError;
use crate::playbook::{Condition, ConditionalExpression, Operator, Transform};
use ahash::AHashMap;
use itertools::Itertools;
use log::{debug, error};

mod registry;

pub use registry::{AppRegistry, ConditionAction, ResolvedArguments, TransformAction};

/// The outcome of evaluating a conditional expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Whether the expression evaluated to true.
    pub triggered: bool,
    /// A human-readable rendering of the logic that produced the outcome.
    pub reason: String,
}

/// Evaluates conditional-expression trees against runtime data.
///
/// An `Evaluator` owns an [`AppRegistry`] and can be reused across any
/// number of expressions and data values. The accumulator carries the
/// outputs of previously executed elements, keyed by element id, for
/// argument references to resolve against.
pub struct Evaluator {
    registry: AppRegistry,
}

impl Evaluator {
    pub fn new(registry: AppRegistry) -> Self {
        Self { registry }
    }

    /// An evaluator over the built-in `util` app only.
    pub fn with_defaults() -> Self {
        Self::new(AppRegistry::with_defaults())
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AppRegistry {
        &mut self.registry
    }

    /// Evaluates an expression tree against a datum.
    pub fn eval(
        &self,
        expression: &ConditionalExpression,
        data: &Value,
        accumulator: &AHashMap<String, Value>,
    ) -> Result<EvaluationResult, EvaluationError> {
        let (triggered, reason) = self.eval_expression(expression, data, accumulator)?;
        Ok(EvaluationResult { triggered, reason })
    }

    fn eval_expression(
        &self,
        expression: &ConditionalExpression,
        data: &Value,
        accumulator: &AHashMap<String, Value>,
    ) -> Result<(bool, String), EvaluationError> {
        match expression.operator {
            Operator::Truth => self.eval_single(expression, data, accumulator, false),
            Operator::Not => self.eval_single(expression, data, accumulator, true),
            Operator::And => self.eval_variadic(expression, data, accumulator, Operator::And),
            Operator::Or => self.eval_variadic(expression, data, accumulator, Operator::Or),
            Operator::Xor => self.eval_variadic(expression, data, accumulator, Operator::Xor),
        }
    }

    /// Truth and Not apply to exactly one operand: the first condition if
    /// any, otherwise the first child expression.
    fn eval_single(
        &self,
        expression: &ConditionalExpression,
        data: &Value,
        accumulator: &AHashMap<String, Value>,
        negate: bool,
    ) -> Result<(bool, String), EvaluationError> {
        let (outcome, label) = if let Some(condition) = expression.conditions.first() {
            let outcome = self.eval_condition(condition, data, accumulator)?;
            (outcome, condition.label())
        } else if let Some(child) = expression.child_expressions.first() {
            let (outcome, reason) = self.eval_expression(child, data, accumulator)?;
            (outcome, format!("({})", reason))
        } else {
            return Err(EvaluationError::EmptyExpression {
                id: expression.element.id.clone(),
                operator: expression.operator.to_string(),
            });
        };
        if negate {
            Ok((!outcome, format!("NOT {}", label)))
        } else {
            Ok((outcome, label))
        }
    }

    fn eval_variadic(
        &self,
        expression: &ConditionalExpression,
        data: &Value,
        accumulator: &AHashMap<String, Value>,
        operator: Operator,
    ) -> Result<(bool, String), EvaluationError> {
        let mut outcomes = Vec::new();
        let mut labels = Vec::new();
        for condition in &expression.conditions {
            outcomes.push(self.eval_condition(condition, data, accumulator)?);
            labels.push(condition.label());
        }
        for child in &expression.child_expressions {
            let (outcome, reason) = self.eval_expression(child, data, accumulator)?;
            outcomes.push(outcome);
            labels.push(format!("({})", reason));
        }

        // An empty conjunction is vacuously true, an empty disjunction
        // vacuously false; Xor over nothing is false.
        let triggered = match operator {
            Operator::And => outcomes.iter().all(|o| *o),
            Operator::Or => outcomes.iter().any(|o| *o),
            Operator::Xor => outcomes.iter().filter(|o| **o).count() == 1,
            Operator::Truth | Operator::Not => unreachable!("handled by eval_single"),
        };

        let joiner = format!(" {} ", operator.to_string().to_uppercase());
        let reason = labels
            .iter()
            .zip(&outcomes)
            .map(|(label, outcome)| format!("{}={}", label, outcome))
            .join(&joiner);
        Ok((triggered, reason))
    }

    /// Pipes the datum through the condition's transforms, then runs the
    /// registered predicate, inverting when the condition is negated.
    fn eval_condition(
        &self,
        condition: &Condition,
        data: &Value,
        accumulator: &AHashMap<String, Value>,
    ) -> Result<bool, EvaluationError> {
        let mut datum = data.clone();
        for transform in &condition.transforms {
            datum = self.apply_transform(transform, datum, accumulator)?;
        }

        let args = ResolvedArguments::resolve(&condition.arguments, accumulator).map_err(|e| {
            error!(
                "Condition '{}' ({}) has invalid arguments: {}",
                condition.element.id,
                condition.label(),
                e
            );
            e
        })?;
        let action = self
            .registry
            .condition(&condition.app_name, &condition.action_name)?;
        let outcome = action.run(&datum, &args)?;
        debug!(
            "Condition '{}' ({}) evaluated to {}",
            condition.element.id,
            condition.label(),
            outcome
        );
        if condition.is_negated {
            Ok(!outcome)
        } else {
            Ok(outcome)
        }
    }

    fn apply_transform(
        &self,
        transform: &Transform,
        data: Value,
        accumulator: &AHashMap<String, Value>,
    ) -> Result<Value, EvaluationError> {
        let args = ResolvedArguments::resolve(&transform.arguments, accumulator)?;
        let action = self
            .registry
            .transform(&transform.app_name, &transform.action_name)?;
        action.run(data, &args)
    }
}
