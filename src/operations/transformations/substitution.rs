use std::collections::HashMap;

use crate::formulas::{EncodedFormula, Formula, FormulaFactory, Variable};

/// A `Substitution` maps variables to formulas.
pub type Substitution = HashMap<Variable, EncodedFormula>;

/// Substitutes variables of the given formula with specified formulas.
///
/// Variables without an entry in the substitution are left unchanged, and
/// subformulas not containing any substituted variable are shared between
/// input and output.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::substitute;
/// # use std::collections::HashMap;
///
/// let f = FormulaFactory::new();
///
/// let formula = "a & b".to_formula(&f);
///
/// let mut substitutions = HashMap::new();
/// substitutions.insert(f.var("a"), "c => d".to_formula(&f));
///
/// let substituted = substitute(formula, &substitutions, &f);
///
/// assert_eq!(substituted.to_string(&f), "(c => d) & b");
/// ```
pub fn substitute(formula: EncodedFormula, substitution: &Substitution, f: &FormulaFactory) -> EncodedFormula {
    match formula.unpack(f) {
        Formula::True | Formula::False => formula,
        Formula::Var(var) => *substitution.get(&var).unwrap_or(&formula),
        Formula::Not(op) => {
            let new_op = substitute(op, substitution, f);
            f.not(new_op)
        }
        Formula::Binary(op, left, right) => {
            let new_left = substitute(left, substitution, f);
            let new_right = substitute(right, substitution, f);
            f.binary(op, new_left, new_right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::ToFormula;
    use crate::util::test_util::F;

    fn create_substitution(ff: &F) -> Substitution {
        let mut subst = HashMap::new();
        subst.insert(ff.A.as_variable().unwrap(), ff.NA);
        subst.insert(ff.B.as_variable().unwrap(), ff.OR1);
        subst.insert(ff.X.as_variable().unwrap(), ff.AND1);
        subst
    }

    #[test]
    fn test_constant() {
        let ff = F::new();
        let subst = create_substitution(&ff);
        let f = &ff.f;
        assert_eq!(f.verum(), f.substitute(ff.TRUE, &subst));
        assert_eq!(f.falsum(), f.substitute(ff.FALSE, &subst));
    }

    #[test]
    fn test_variable() {
        let ff = F::new();
        let subst = create_substitution(&ff);
        let f = &ff.f;
        assert_eq!(ff.C, f.substitute(ff.C, &subst));
        assert_eq!(ff.NA, f.substitute(ff.A, &subst));
        assert_eq!(ff.OR1, f.substitute(ff.B, &subst));
        assert_eq!(ff.AND1, f.substitute(ff.X, &subst));
    }

    #[test]
    fn test_not() {
        let ff = F::new();
        let subst = create_substitution(&ff);
        let f = &ff.f;
        assert_eq!("~(~a & (x | y))".to_formula(f), f.substitute(ff.NOT1, &subst));
        assert_eq!("~((a & b) | y)".to_formula(f), f.substitute(ff.NOT2, &subst));
    }

    #[test]
    fn test_binary() {
        let ff = F::new();
        let subst = create_substitution(&ff);
        let f = &ff.f;
        assert_eq!("~a => (x | y)".to_formula(f), f.substitute(ff.IMP1, &subst));
        assert_eq!("~a <=> (x | y)".to_formula(f), f.substitute(ff.EQ1, &subst));
        assert_eq!("(~a & (x | y)) ^ ((a & b) | y)".to_formula(f), f.substitute(ff.XOR1, &subst));
        assert_eq!("~a ~& (x | y)".to_formula(f), f.substitute(ff.NAND1, &subst));
    }

    #[test]
    fn test_untouched_sharing() {
        let ff = F::new();
        let f = &ff.f;
        let subst: Substitution = HashMap::from([(f.var("unused"), ff.A)]);
        assert_eq!(ff.IMP3, f.substitute(ff.IMP3, &subst));
    }
}
