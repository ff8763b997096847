mod basis;
mod operator_substitution;
mod substitution;

pub use basis::*;
pub use operator_substitution::*;
pub use substitution::*;
