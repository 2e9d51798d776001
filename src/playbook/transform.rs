use crate::element::{Argument, ExecutionElement};
use crate::error::ElementError;
use crate::eval::AppRegistry;
use serde::{Deserialize, Serialize};

/// A transform invocation descriptor: names an app, an action within it,
/// and the ordered arguments to supply.
///
/// Transforms reshape the datum flowing into a condition; a condition's
/// transforms run in declaration order before its predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(flatten)]
    pub element: ExecutionElement,
    pub app_name: String,
    pub action_name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Transform {
    /// Creates a transform with no arguments.
    pub fn new(
        id: impl Into<String>,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            element: ExecutionElement::new(id),
            app_name: app_name.into(),
            action_name: action_name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Checks that the named action exists in the registry.
    pub fn validate(&self, registry: &AppRegistry) -> Result<(), ElementError> {
        if !registry.has_transform(&self.app_name, &self.action_name) {
            return Err(ElementError::UnknownAction {
                id: self.element.id.clone(),
                kind: "transform",
                app_name: self.app_name.clone(),
                action_name: self.action_name.clone(),
            });
        }
        Ok(())
    }
}
