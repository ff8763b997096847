use crate::formulas::{BinaryOp, EncodedFormula, Formula, FormulaFactory, FormulaType};
use crate::operations::transformations::{substitute_operators, OperatorSubstitution, FIRST_OPERAND, SECOND_OPERAND};
use crate::util::exceptions::panic_unexpected_formula_type;

/// Converts the given formula to an equivalent formula that contains no
/// constants or operators beyond `~`, `&`, and `|`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::to_not_and_or;
/// let f = FormulaFactory::new();
///
/// let formula = "a => b".to_formula(&f);
///
/// assert_eq!(to_not_and_or(formula, &f).to_string(&f), "~a | b");
/// ```
pub fn to_not_and_or(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
    let p = f.variable(FIRST_OPERAND);
    let q = f.variable(SECOND_OPERAND);
    let np = f.not(p);
    let nq = f.not(q);
    let substitution = OperatorSubstitution::from([
        (FormulaType::True, f.or(p, np)),
        (FormulaType::False, f.and(p, np)),
        (FormulaType::Binary(BinaryOp::Impl), f.or(np, q)),
        (FormulaType::Binary(BinaryOp::Xor), f.or(f.and(p, nq), f.and(np, q))),
        (FormulaType::Binary(BinaryOp::Equiv), f.or(f.and(p, q), f.and(np, nq))),
        (FormulaType::Binary(BinaryOp::Nand), f.not(f.and(p, q))),
        (FormulaType::Binary(BinaryOp::Nor), f.not(f.or(p, q))),
    ]);
    substitute_operators(formula, &substitution, f)
}

/// Converts the given formula to an equivalent formula that contains no
/// constants or operators beyond `~` and `&`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::to_not_and;
/// let f = FormulaFactory::new();
///
/// let formula = "a | b".to_formula(&f);
///
/// assert_eq!(to_not_and(formula, &f).to_string(&f), "~(~a & ~b)");
/// ```
pub fn to_not_and(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
    let reduced = to_not_and_or(formula, f);
    let np = f.not(f.variable(FIRST_OPERAND));
    let nq = f.not(f.variable(SECOND_OPERAND));
    let substitution = OperatorSubstitution::from([(FormulaType::Binary(BinaryOp::Or), f.not(f.and(np, nq)))]);
    substitute_operators(reduced, &substitution, f)
}

/// Converts the given formula to an equivalent formula that contains no
/// constants or operators beyond `~&`.
///
/// This is not a plain template substitution: the encodings of `~x` as
/// `x ~& x` and of `x & y` as `(x ~& y) ~& (x ~& y)` each use one converted
/// subresult twice, and a template would convert the operand once per
/// placeholder occurrence. A structural recursion over the `~`/`&` form
/// computes each converted operand exactly once and shares it.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::to_nand;
/// let f = FormulaFactory::new();
///
/// let formula = "~a".to_formula(&f);
///
/// assert_eq!(to_nand(formula, &f).to_string(&f), "a ~& a");
/// ```
pub fn to_nand(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
    fn recurse(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
        match formula.unpack(f) {
            Formula::Var(_) => formula,
            Formula::Not(op) => {
                let a = recurse(op, f);
                f.nand(a, a)
            }
            Formula::Binary(BinaryOp::And, left, right) => {
                let a = recurse(left, f);
                let b = recurse(right, f);
                let nand_ab = f.nand(a, b);
                f.nand(nand_ab, nand_ab)
            }
            _ => panic_unexpected_formula_type(formula, f),
        }
    }
    recurse(to_not_and(formula, f), f)
}

/// Converts the given formula to an equivalent formula that contains no
/// constants or operators beyond `=>` and `~`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::to_implies_not;
/// let f = FormulaFactory::new();
///
/// let formula = "a | b".to_formula(&f);
///
/// assert_eq!(to_implies_not(formula, &f).to_string(&f), "~a => b");
/// ```
pub fn to_implies_not(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
    let reduced = to_not_and_or(formula, f);
    let p = f.variable(FIRST_OPERAND);
    let q = f.variable(SECOND_OPERAND);
    let substitution = OperatorSubstitution::from([
        (FormulaType::Binary(BinaryOp::Or), f.implication(f.not(p), q)),
        (FormulaType::Binary(BinaryOp::And), f.not(f.implication(p, f.not(q)))),
        (FormulaType::True, f.implication(p, p)),
        (FormulaType::False, f.not(f.implication(p, p))),
    ]);
    substitute_operators(reduced, &substitution, f)
}

/// Converts the given formula to an equivalent formula that contains no
/// constants or operators beyond `=>` and `$false`.
///
/// As with [`to_nand`], the final step is a structural recursion: `~x` must
/// become `x' => $false` over the converted operand `x'`, and an already
/// present `$false` must stay untouched instead of being expanded again.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{FormulaFactory, ToFormula};
/// # use opbasis::operations::transformations::to_implies_false;
/// let f = FormulaFactory::new();
///
/// let formula = "~a".to_formula(&f);
///
/// assert_eq!(to_implies_false(formula, &f).to_string(&f), "a => $false");
/// ```
pub fn to_implies_false(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
    fn recurse(formula: EncodedFormula, f: &FormulaFactory) -> EncodedFormula {
        match formula.unpack(f) {
            Formula::Var(_) | Formula::False => formula,
            Formula::True => f.implication(f.falsum(), f.falsum()),
            Formula::Not(op) => f.implication(recurse(op, f), f.falsum()),
            Formula::Binary(BinaryOp::Impl, left, right) => {
                let a = recurse(left, f);
                let b = recurse(right, f);
                f.implication(a, b)
            }
            _ => panic_unexpected_formula_type(formula, f),
        }
    }
    recurse(to_implies_not(formula, f), f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::ToFormula;
    use crate::operations::predicates::{in_basis, IMPLIES_FALSE, IMPLIES_NOT, NAND_ONLY, NOT_AND, NOT_AND_OR};
    use crate::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
    use crate::util::test_util::assert_equivalent;

    #[test]
    fn test_to_not_and_or() {
        let f = FormulaFactory::new();
        let formula = "p => q".to_formula(&f);
        let converted = to_not_and_or(formula, &f);
        assert!(in_basis(converted, NOT_AND_OR, &f));
        assert_eq!(converted, "~p | q".to_formula(&f));
        assert_equivalent(formula, converted, &f);
    }

    #[test]
    fn test_to_not_and() {
        let f = FormulaFactory::new();
        let formula = "p ^ q".to_formula(&f);
        let converted = to_not_and(formula, &f);
        assert!(in_basis(converted, NOT_AND, &f));
        assert_eq!(converted, "~(~(p & ~q) & ~(~p & q))".to_formula(&f));
        assert_equivalent(formula, converted, &f);
    }

    #[test]
    fn test_to_nand() {
        let f = FormulaFactory::new();
        let formula = "~p".to_formula(&f);
        let converted = to_nand(formula, &f);
        assert!(in_basis(converted, NAND_ONLY, &f));
        assert_eq!(converted, "p ~& p".to_formula(&f));
        assert_equivalent(formula, converted, &f);

        let and = "p & q".to_formula(&f);
        let converted = to_nand(and, &f);
        assert!(in_basis(converted, NAND_ONLY, &f));
        assert_eq!(converted, "(p ~& q) ~& (p ~& q)".to_formula(&f));
        assert_equivalent(and, converted, &f);
    }

    #[test]
    fn test_to_implies_not() {
        let f = FormulaFactory::new();
        let formula = "p <=> q".to_formula(&f);
        let converted = to_implies_not(formula, &f);
        assert!(in_basis(converted, IMPLIES_NOT, &f));
        assert_equivalent(formula, converted, &f);
    }

    #[test]
    fn test_to_implies_false() {
        let f = FormulaFactory::new();
        let formula = "~(p & q)".to_formula(&f);
        let converted = to_implies_false(formula, &f);
        assert!(in_basis(converted, IMPLIES_FALSE, &f));
        assert_equivalent(formula, converted, &f);
        assert_equivalent("p ~& q".to_formula(&f), converted, &f);
    }

    #[test]
    fn test_constants() {
        let f = FormulaFactory::new();
        for constant in [f.verum(), f.falsum()] {
            for (conversion, basis) in [
                (to_not_and_or as fn(EncodedFormula, &FormulaFactory) -> EncodedFormula, NOT_AND_OR),
                (to_not_and, NOT_AND),
                (to_nand, NAND_ONLY),
                (to_implies_not, IMPLIES_NOT),
                (to_implies_false, IMPLIES_FALSE),
            ] {
                let converted = conversion(constant, &f);
                assert!(in_basis(converted, basis, &f));
                assert_equivalent(constant, converted, &f);
            }
        }
    }

    #[test]
    fn test_idempotence_on_reduced_input() {
        let f = FormulaFactory::new();
        let formula = "~(~a & ~b) & ~c".to_formula(&f);
        let converted = to_not_and(formula, &f);
        assert!(in_basis(converted, NOT_AND, &f));
        assert_equivalent(formula, converted, &f);

        let nand = "(a ~& b) ~& a".to_formula(&f);
        let converted = to_nand(nand, &f);
        assert!(in_basis(converted, NAND_ONLY, &f));
        assert_equivalent(nand, converted, &f);
    }

    #[test]
    fn test_input_not_mutated() {
        let f = FormulaFactory::new();
        let formula = "(a ^ b) <=> ~(c ~| d)".to_formula(&f);
        let before = formula.to_string(&f);
        let _ = to_nand(formula, &f);
        let _ = to_implies_false(formula, &f);
        assert_eq!(before, formula.to_string(&f));
        assert_eq!(formula, before.as_str().to_formula(&f));
    }

    #[test]
    fn test_random_formulas() {
        let f = FormulaFactory::new();
        let config = FormulaRandomizerConfig::default_with_num_vars(4).seed(42);
        let mut randomizer = FormulaRandomizer::new(config);
        for _ in 0..50 {
            let formula = randomizer.formula(&f, 3);
            for (conversion, basis) in [
                (to_not_and_or as fn(EncodedFormula, &FormulaFactory) -> EncodedFormula, NOT_AND_OR),
                (to_not_and, NOT_AND),
                (to_nand, NAND_ONLY),
                (to_implies_not, IMPLIES_NOT),
                (to_implies_false, IMPLIES_FALSE),
            ] {
                let converted = conversion(formula, &f);
                assert!(in_basis(converted, basis, &f), "{} not in basis", converted.to_string(&f));
                assert_equivalent(formula, converted, &f);
            }
        }
    }
}
