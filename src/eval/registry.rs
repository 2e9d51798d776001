use crate::element::{Argument, Value};
use crate::error::EvaluationError;
use ahash::AHashMap;

/// Resolved arguments for one invocation, keyed by argument name.
#[derive(Debug, Clone, Default)]
pub struct ResolvedArguments {
    values: AHashMap<String, Value>,
}

impl ResolvedArguments {
    /// Resolves a declared argument list against the accumulator of prior
    /// element outputs. Later duplicates of a name overwrite earlier ones.
    pub fn resolve(
        arguments: &[Argument],
        accumulator: &AHashMap<String, Value>,
    ) -> Result<Self, EvaluationError> {
        let mut values = AHashMap::with_capacity(arguments.len());
        for argument in arguments {
            values.insert(argument.name.clone(), argument.resolve(accumulator)?);
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&Value, EvaluationError> {
        self.values
            .get(name)
            .ok_or_else(|| EvaluationError::MissingArgument(name.to_string()))
    }

    pub fn require_number(&self, name: &str) -> Result<f64, EvaluationError> {
        let value = self.require(name)?;
        value
            .as_number()
            .ok_or_else(|| EvaluationError::TypeMismatch {
                operation: name.to_string(),
                expected: "number",
                found: value.clone(),
            })
    }

    pub fn require_string(&self, name: &str) -> Result<&str, EvaluationError> {
        let value = self.require(name)?;
        value.as_str().ok_or_else(|| EvaluationError::TypeMismatch {
            operation: name.to_string(),
            expected: "string",
            found: value.clone(),
        })
    }
}

/// A registered predicate: decides whether the datum matches.
pub trait ConditionAction: Send + Sync {
    fn run(&self, data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError>;
}

/// A registered transform: reshapes the datum before predicates see it.
pub trait TransformAction: Send + Sync {
    fn run(&self, data: Value, args: &ResolvedArguments) -> Result<Value, EvaluationError>;
}

struct FnCondition<F>(F);

impl<F> ConditionAction for FnCondition<F>
where
    F: Fn(&Value, &ResolvedArguments) -> Result<bool, EvaluationError> + Send + Sync,
{
    fn run(&self, data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError> {
        (self.0)(data, args)
    }
}

struct FnTransform<F>(F);

impl<F> TransformAction for FnTransform<F>
where
    F: Fn(Value, &ResolvedArguments) -> Result<Value, EvaluationError> + Send + Sync,
{
    fn run(&self, data: Value, args: &ResolvedArguments) -> Result<Value, EvaluationError> {
        (self.0)(data, args)
    }
}

/// Maps `(app_name, action_name)` pairs to runnable actions.
///
/// Apps register their conditions and transforms here; the evaluator looks
/// invocation descriptors up by name at runtime.
#[derive(Default)]
pub struct AppRegistry {
    conditions: AHashMap<(String, String), Box<dyn ConditionAction>>,
    transforms: AHashMap<(String, String), Box<dyn TransformAction>>,
}

impl AppRegistry {
    /// An empty registry with no apps.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in `util` app.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_util_app(&mut registry);
        registry
    }

    pub fn register_condition(
        &mut self,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
        action: Box<dyn ConditionAction>,
    ) {
        self.conditions
            .insert((app_name.into(), action_name.into()), action);
    }

    pub fn register_transform(
        &mut self,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
        action: Box<dyn TransformAction>,
    ) {
        self.transforms
            .insert((app_name.into(), action_name.into()), action);
    }

    /// Registers a plain function or closure as a condition action.
    pub fn register_condition_fn<F>(
        &mut self,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
        f: F,
    ) where
        F: Fn(&Value, &ResolvedArguments) -> Result<bool, EvaluationError> + Send + Sync + 'static,
    {
        self.register_condition(app_name, action_name, Box::new(FnCondition(f)));
    }

    /// Registers a plain function or closure as a transform action.
    pub fn register_transform_fn<F>(
        &mut self,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
        f: F,
    ) where
        F: Fn(Value, &ResolvedArguments) -> Result<Value, EvaluationError> + Send + Sync + 'static,
    {
        self.register_transform(app_name, action_name, Box::new(FnTransform(f)));
    }

    pub fn has_condition(&self, app_name: &str, action_name: &str) -> bool {
        self.conditions
            .contains_key(&(app_name.to_string(), action_name.to_string()))
    }

    pub fn has_transform(&self, app_name: &str, action_name: &str) -> bool {
        self.transforms
            .contains_key(&(app_name.to_string(), action_name.to_string()))
    }

    pub(super) fn condition(
        &self,
        app_name: &str,
        action_name: &str,
    ) -> Result<&dyn ConditionAction, EvaluationError> {
        self.conditions
            .get(&(app_name.to_string(), action_name.to_string()))
            .map(|b| b.as_ref())
            .ok_or_else(|| EvaluationError::UnknownCondition {
                app_name: app_name.to_string(),
                action_name: action_name.to_string(),
            })
    }

    pub(super) fn transform(
        &self,
        app_name: &str,
        action_name: &str,
    ) -> Result<&dyn TransformAction, EvaluationError> {
        self.transforms
            .get(&(app_name.to_string(), action_name.to_string()))
            .map(|b| b.as_ref())
            .ok_or_else(|| EvaluationError::UnknownTransform {
                app_name: app_name.to_string(),
                action_name: action_name.to_string(),
            })
    }
}

fn number_of(data: &Value, operation: &str) -> Result<f64, EvaluationError> {
    data.as_number().ok_or_else(|| EvaluationError::TypeMismatch {
        operation: operation.to_string(),
        expected: "number",
        found: data.clone(),
    })
}

fn cond_always_true(_data: &Value, _args: &ResolvedArguments) -> Result<bool, EvaluationError> {
    Ok(true)
}

fn cond_equals(data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError> {
    Ok(data == args.require("value")?)
}

fn cond_greater_than(data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError> {
    Ok(number_of(data, "greater_than")? > args.require_number("threshold")?)
}

fn cond_smaller_than(data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError> {
    Ok(number_of(data, "smaller_than")? < args.require_number("threshold")?)
}

fn cond_contains(data: &Value, args: &ResolvedArguments) -> Result<bool, EvaluationError> {
    let needle = args.require("value")?;
    match data {
        Value::List(items) => Ok(items.contains(needle)),
        Value::String(s) => match needle.as_str() {
            Some(sub) => Ok(s.contains(sub)),
            None => Err(EvaluationError::TypeMismatch {
                operation: "contains".to_string(),
                expected: "string",
                found: needle.clone(),
            }),
        },
        other => Err(EvaluationError::TypeMismatch {
            operation: "contains".to_string(),
            expected: "list",
            found: other.clone(),
        }),
    }
}

fn transform_identity(data: Value, _args: &ResolvedArguments) -> Result<Value, EvaluationError> {
    Ok(data)
}

fn transform_select(data: Value, args: &ResolvedArguments) -> Result<Value, EvaluationError> {
    let key = args.require_string("key")?;
    match &data {
        Value::Object(fields) => {
            fields
                .get(key)
                .cloned()
                .ok_or_else(|| EvaluationError::InvalidSelection {
                    name: "key".to_string(),
                    step: key.to_string(),
                })
        }
        other => Err(EvaluationError::TypeMismatch {
            operation: "select".to_string(),
            expected: "object",
            found: other.clone(),
        }),
    }
}

fn transform_length(data: Value, _args: &ResolvedArguments) -> Result<Value, EvaluationError> {
    let len = match &data {
        Value::List(items) => items.len(),
        Value::String(s) => s.chars().count(),
        Value::Object(fields) => fields.len(),
        other => {
            return Err(EvaluationError::TypeMismatch {
                operation: "length".to_string(),
                expected: "list",
                found: other.clone(),
            });
        }
    };
    Ok(Value::Number(len as f64))
}

/// Registers the built-in `util` app: a handful of generic predicates and
/// reshaping transforms that need no external integration.
fn register_util_app(registry: &mut AppRegistry) {
    registry.register_condition_fn("util", "always_true", cond_always_true);
    registry.register_condition_fn("util", "equals", cond_equals);
    registry.register_condition_fn("util", "greater_than", cond_greater_than);
    registry.register_condition_fn("util", "smaller_than", cond_smaller_than);
    registry.register_condition_fn("util", "contains", cond_contains);

    registry.register_transform_fn("util", "identity", transform_identity);
    registry.register_transform_fn("util", "select", transform_select);
    registry.register_transform_fn("util", "length", transform_length);
}
