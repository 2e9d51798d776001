use serde::{Deserialize, Serialize};

/// A labeled node in a case's execution-hierarchy tree.
///
/// Cases visualize a recorded execution as a tree of the elements that
/// participated in it. Child order is traversal/display order and is
/// preserved as inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNode {
    /// Display name, possibly prefixed with the element kind. Elements
    /// without a name of their own get one synthesized by the builder.
    pub name: String,
    /// Id of the referenced execution element.
    pub id: String,
    /// Kind of execution element, e.g. "workflow" or "condition".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub children: Vec<CaseNode>,
}

impl CaseNode {
    /// Creates a leaf node with an empty child list.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind: kind.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child, keeping insertion order.
    pub fn push_child(&mut self, child: CaseNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CaseNode::node_count).sum::<usize>()
    }

    /// Depth-first search for a node by element id.
    pub fn find(&self, id: &str) -> Option<&CaseNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
