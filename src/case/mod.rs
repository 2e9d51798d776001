pub mod builder;
pub mod node;
pub mod subscription;

pub use builder::*;
pub use node::*;
pub use subscription::*;
