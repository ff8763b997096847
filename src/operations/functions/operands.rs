use crate::formulas::{EncodedFormula, Formula, FormulaFactory};

/// Returns a vector of all operands of this formula.
///
/// Binary operators return their `left` and `right` operands, `Not` returns
/// a vector with only its inner formula, and all other formulas return an
/// empty vector.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::functions::operands;
/// let f = FormulaFactory::new();
///
/// let a = f.variable("a");
/// let b = f.variable("b");
///
/// let formula1 = "a => b".to_formula(&f);
/// let formula2 = f.not(formula1);
///
/// assert_eq!(operands(a, &f), vec![]);
/// assert_eq!(operands(formula1, &f), vec![a, b]);
/// assert_eq!(operands(formula2, &f), vec![formula1]);
/// ```
pub fn operands(formula: EncodedFormula, f: &FormulaFactory) -> Vec<EncodedFormula> {
    match formula.unpack(f) {
        Formula::True | Formula::False | Formula::Var(_) => vec![],
        Formula::Not(op) => vec![op],
        Formula::Binary(_, left, right) => vec![left, right],
    }
}
