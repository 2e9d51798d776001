use super::Transform;
use crate::element::{Argument, ExecutionElement};
use crate::error::ElementError;
use crate::eval::AppRegistry;
use serde::{Deserialize, Serialize};

/// A predicate invocation: the datum is piped through `transforms` in
/// order, then the named condition action decides true or false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(flatten)]
    pub element: ExecutionElement,
    pub app_name: String,
    pub action_name: String,
    /// Inverts the predicate's result.
    #[serde(default)]
    pub is_negated: bool,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub transforms: Vec<Transform>,
}

impl Condition {
    pub fn new(
        id: impl Into<String>,
        app_name: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            element: ExecutionElement::new(id),
            app_name: app_name.into(),
            action_name: action_name.into(),
            is_negated: false,
            arguments: Vec::new(),
            transforms: Vec::new(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.is_negated = true;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_transforms(mut self, transforms: Vec<Transform>) -> Self {
        self.transforms = transforms;
        self
    }

    /// Checks that the condition action and every attached transform
    /// resolve against the registry.
    pub fn validate(&self, registry: &AppRegistry) -> Result<(), ElementError> {
        if !registry.has_condition(&self.app_name, &self.action_name) {
            return Err(ElementError::UnknownAction {
                id: self.element.id.clone(),
                kind: "condition",
                app_name: self.app_name.clone(),
                action_name: self.action_name.clone(),
            });
        }
        for transform in &self.transforms {
            transform.validate(registry)?;
        }
        Ok(())
    }

    /// Display label used by the case-tree builder and trace output.
    pub fn label(&self) -> String {
        format!("{}.{}", self.app_name, self.action_name)
    }
}
