use crate::element::Value;
use thiserror::Error;

/// Errors raised while validating playbook elements against a registry.
#[derive(Error, Debug, Clone)]
pub enum ElementError {
    #[error("Element '{id}' references unknown app '{app_name}'")]
    UnknownApp { id: String, app_name: String },

    #[error("Element '{id}' references unknown {kind} '{action_name}' in app '{app_name}'")]
    UnknownAction {
        id: String,
        kind: &'static str,
        app_name: String,
        action_name: String,
    },

    #[error("Invalid element '{id}': {message}")]
    InvalidElement { id: String, message: String },
}

/// Errors that can occur while evaluating a conditional expression.
#[derive(Error, Debug, Clone)]
pub enum EvaluationError {
    #[error("No condition '{action_name}' is registered for app '{app_name}'")]
    UnknownCondition {
        app_name: String,
        action_name: String,
    },

    #[error("No transform '{action_name}' is registered for app '{app_name}'")]
    UnknownTransform {
        app_name: String,
        action_name: String,
    },

    #[error("Argument '{name}' is invalid: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Required argument '{0}' was not supplied")]
    MissingArgument(String),

    #[error("Argument '{name}' references element '{element_id}', which has no recorded output")]
    UnknownReference { name: String, element_id: String },

    #[error(
        "Argument '{name}' has a selection step '{step}' that does not match the referenced output"
    )]
    InvalidSelection { name: String, step: String },

    #[error("Type mismatch in '{operation}': expected {expected}, but found value '{found}'")]
    TypeMismatch {
        operation: String,
        expected: &'static str,
        found: Value,
    },

    #[error("Expression '{id}' has operator '{operator}' but no conditions or child expressions")]
    EmptyExpression { id: String, operator: String },
}

/// Errors that can occur when saving or loading a subscription snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot error: {0}")]
    Generic(String),
}
