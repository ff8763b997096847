use crate::formulas::{EncodedFormula, FormulaFactory};

pub fn panic_unexpected_formula_type(formula: EncodedFormula, f: &FormulaFactory) -> ! {
    panic!("Unexpected formula type: {}", formula.to_string(f));
}
