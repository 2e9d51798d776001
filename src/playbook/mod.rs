pub mod condition;
pub mod expression;
pub mod transform;

pub use condition::*;
pub use expression::*;
pub use transform::*;
