mod node;
mod visit;

pub use node::*;
pub use visit::*;
