mod operands;
mod operators;
mod variables;

pub use operands::*;
pub use operators::*;
pub use variables::*;
