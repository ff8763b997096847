use crate::formulas::{BinaryOp, EncodedFormula, FormulaFactory, FormulaType};
use crate::operations::functions::operators;

/// The target basis of [`to_not_and_or`](crate::operations::transformations::to_not_and_or).
pub const NOT_AND_OR: &[FormulaType] =
    &[FormulaType::Not, FormulaType::Binary(BinaryOp::And), FormulaType::Binary(BinaryOp::Or)];

/// The target basis of [`to_not_and`](crate::operations::transformations::to_not_and).
pub const NOT_AND: &[FormulaType] = &[FormulaType::Not, FormulaType::Binary(BinaryOp::And)];

/// The target basis of [`to_nand`](crate::operations::transformations::to_nand).
pub const NAND_ONLY: &[FormulaType] = &[FormulaType::Binary(BinaryOp::Nand)];

/// The target basis of [`to_implies_not`](crate::operations::transformations::to_implies_not).
pub const IMPLIES_NOT: &[FormulaType] = &[FormulaType::Binary(BinaryOp::Impl), FormulaType::Not];

/// The target basis of [`to_implies_false`](crate::operations::transformations::to_implies_false).
pub const IMPLIES_FALSE: &[FormulaType] = &[FormulaType::Binary(BinaryOp::Impl), FormulaType::False];

/// Predicate to test whether a formula only uses operators and constants of
/// the given basis. Variables are always allowed.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::predicates::{in_basis, NOT_AND, NOT_AND_OR};
/// # let f = FormulaFactory::new();
///
/// let formula = "~(a & ~b)".to_formula(&f);
///
/// assert!(in_basis(formula, NOT_AND, &f));
/// assert!(in_basis(formula, NOT_AND_OR, &f));
/// ```
pub fn in_basis(formula: EncodedFormula, basis: &[FormulaType], f: &FormulaFactory) -> bool {
    operators(formula, f).iter().all(|ty| basis.contains(ty))
}
