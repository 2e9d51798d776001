//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the caseflow crate so
//! downstream code can bring the core API in with a single `use`.

// Playbook element models
pub use crate::element::{Argument, ExecutionElement, Value};
pub use crate::playbook::{Condition, ConditionalExpression, Operator, Transform};

// Case-side structures
pub use crate::case::{CaseNode, CaseSubscription, CaseTreeBuilder, Subscription, SubscriptionStore};

// Evaluation
pub use crate::eval::{AppRegistry, EvaluationResult, Evaluator, ResolvedArguments};

// Error types
pub use crate::error::{ElementError, EvaluationError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
