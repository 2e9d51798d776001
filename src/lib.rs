//! # Caseflow - Playbook Models and Case-Tree Evaluation
//!
//! **Caseflow** models the execution elements of playbook workflows
//! (transforms, conditions, and conditional-expression trees) and the
//! case-side structures that record and visualize executions: labeled
//! case-node trees and case event subscriptions. A registry-driven
//! evaluator runs conditional expressions against runtime data.
//!
//! ## Core Workflow
//!
//! 1.  **Model**: Build (or deserialize) playbook elements: [`playbook::Transform`],
//!     [`playbook::Condition`], and [`playbook::ConditionalExpression`].
//! 2.  **Register**: Apps contribute their condition and transform actions
//!     to an [`eval::AppRegistry`]; a built-in `util` app covers generic
//!     predicates and reshaping.
//! 3.  **Evaluate**: An [`eval::Evaluator`] runs an expression tree against a
//!     datum and an accumulator of prior element outputs, yielding a
//!     triggered/not-triggered outcome plus a readable reason.
//! 4.  **Inspect**: [`case::CaseTreeBuilder`] flattens elements into
//!     [`case::CaseNode`] trees, and a [`case::SubscriptionStore`] tracks which
//!     cases record which events.
//!
//! ## Quick Start
//!
//! ```rust
//! use caseflow::prelude::*;
//! use ahash::AHashMap;
//!
//! fn main() -> Result<()> {
//!     // A condition: pipe the datum through `util.length`, then require > 2.
//!     let condition = Condition::new("c1", "util", "greater_than")
//!         .with_arguments(vec![Argument::new("threshold", Value::Number(2.0))])
//!         .with_transforms(vec![Transform::new("t1", "util", "length")]);
//!     let expression = ConditionalExpression::truth("e1", condition);
//!
//!     let evaluator = Evaluator::with_defaults();
//!     let data = Value::from("hello");
//!     let result = evaluator.eval(&expression, &data, &AHashMap::new())?;
//!     assert!(result.triggered);
//!
//!     // Flatten the same expression into a case tree for display.
//!     let tree = CaseTreeBuilder::from_expression(&expression);
//!     assert_eq!(tree.children[0].kind, "condition");
//!     Ok(())
//! }
//! ```

pub mod case;
pub mod element;
pub mod error;
pub mod eval;
pub mod playbook;
pub mod prelude;
