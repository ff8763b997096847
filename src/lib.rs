#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Assignments of truth values to variables.
pub mod datastructures;
/// Types and datastructures to represent and manage formulas effectively.
pub mod formulas;
/// Functions, Predicates, and Transformations for formulas.
pub mod operations;
mod parser;
/// Additional utility.
pub mod util;

/// Rules of the formula grammar, the error type parameter of
/// [`FormulaFactory::parse`](formulas::FormulaFactory::parse).
pub use parser::propositional_parser::Rule;
