pub mod argument;
pub mod value;

pub use argument::*;
pub use value::*;

use serde::{Deserialize, Serialize};

/// Base identity shared by every playbook element.
///
/// The original model expressed this through inheritance; here it is an
/// explicit embedded struct, flattened on the wire so element records
/// stay flat JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecutionElement {
    pub id: String,
}

impl ExecutionElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
