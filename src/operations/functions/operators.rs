use std::collections::{BTreeSet, HashSet};

use crate::formulas::{EncodedFormula, Formula, FormulaFactory, FormulaType};

/// Returns the set of distinct operator and constant symbols appearing in
/// the given formula. Variables do not count as operators.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{BinaryOp, FormulaFactory, FormulaType, ToFormula};
/// # use opbasis::operations::functions::operators;
/// # use std::collections::BTreeSet;
/// let f = FormulaFactory::new();
///
/// let formula = "~a & (b | ~a)".to_formula(&f);
///
/// let expected = BTreeSet::from([
///     FormulaType::Not,
///     FormulaType::Binary(BinaryOp::And),
///     FormulaType::Binary(BinaryOp::Or),
/// ]);
/// assert_eq!(operators(formula, &f), expected);
/// ```
pub fn operators(formula: EncodedFormula, f: &FormulaFactory) -> BTreeSet<FormulaType> {
    let mut result = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![formula];
    seen.insert(formula);

    while let Some(current) = stack.pop() {
        if !current.is_variable() {
            result.insert(current.formula_type());
        }
        match current.unpack(f) {
            Formula::True | Formula::False | Formula::Var(_) => {}
            Formula::Not(op) => {
                if seen.insert(op) {
                    stack.push(op);
                }
            }
            Formula::Binary(_, left, right) => {
                for op in [left, right] {
                    if seen.insert(op) {
                        stack.push(op);
                    }
                }
            }
        }
    }
    result
}
