use super::Value;
use crate::error::EvaluationError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single named argument supplied to a condition or transform invocation.
///
/// An argument carries either a literal `value` or a `reference` to the
/// output of a previously executed element, identified by its id in the
/// accumulator. When a reference is set, `selection` optionally drills
/// into the referenced output: string entries index into objects, numeric
/// entries index into lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection: Vec<Value>,
}

impl Argument {
    /// Creates a literal argument.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            reference: None,
            selection: Vec::new(),
        }
    }

    /// Creates an argument referencing the output of a prior element.
    pub fn reference(name: impl Into<String>, element_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            reference: Some(element_id.into()),
            selection: Vec::new(),
        }
    }

    pub fn with_selection(mut self, selection: Vec<Value>) -> Self {
        self.selection = selection;
        self
    }

    /// Resolves this argument to a concrete value against the accumulator
    /// of prior element outputs. References take precedence over literals.
    pub fn resolve(&self, accumulator: &AHashMap<String, Value>) -> Result<Value, EvaluationError> {
        if let Some(element_id) = &self.reference {
            let referenced =
                accumulator
                    .get(element_id)
                    .ok_or_else(|| EvaluationError::UnknownReference {
                        name: self.name.clone(),
                        element_id: element_id.clone(),
                    })?;
            return self.select(referenced);
        }
        match &self.value {
            Some(value) => Ok(value.clone()),
            None => Err(EvaluationError::InvalidArgument {
                name: self.name.clone(),
                message: "argument has neither a value nor a reference".to_string(),
            }),
        }
    }

    /// Applies the selection path to a referenced output.
    fn select(&self, root: &Value) -> Result<Value, EvaluationError> {
        let mut current = root;
        for step in &self.selection {
            current = match (step, current) {
                (Value::String(key), Value::Object(fields)) => {
                    fields
                        .get(key)
                        .ok_or_else(|| EvaluationError::InvalidSelection {
                            name: self.name.clone(),
                            step: key.clone(),
                        })?
                }
                (Value::Number(index), Value::List(items)) => {
                    // An `as usize` cast would saturate negative indices to
                    // 0 and truncate fractions, resolving to the wrong item.
                    if !index.is_finite() || *index < 0.0 || index.fract() != 0.0 {
                        return Err(EvaluationError::InvalidSelection {
                            name: self.name.clone(),
                            step: index.to_string(),
                        });
                    }
                    items
                        .get(*index as usize)
                        .ok_or_else(|| EvaluationError::InvalidSelection {
                            name: self.name.clone(),
                            step: index.to_string(),
                        })?
                }
                (step, found) => {
                    return Err(EvaluationError::InvalidSelection {
                        name: self.name.clone(),
                        step: format!("{} (into {})", step, found.type_name()),
                    });
                }
            };
        }
        Ok(current.clone())
    }
}
