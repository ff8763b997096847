use std::collections::{BTreeSet, HashSet};

use crate::formulas::{EncodedFormula, Formula, FormulaFactory, Variable};

/// Returns the set of all variables in the given formula.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::functions::variables;
/// # use std::collections::BTreeSet;
/// let f = FormulaFactory::new();
///
/// let a = f.var("a");
/// let b = f.var("b");
/// let formula = "(a => b) & a".to_formula(&f);
///
/// assert_eq!(variables(formula, &f), BTreeSet::from([a, b]));
/// ```
pub fn variables(formula: EncodedFormula, f: &FormulaFactory) -> BTreeSet<Variable> {
    let mut result = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![formula];
    seen.insert(formula);

    while let Some(current) = stack.pop() {
        match current.unpack(f) {
            Formula::True | Formula::False => {}
            Formula::Var(var) => {
                result.insert(var);
            }
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
