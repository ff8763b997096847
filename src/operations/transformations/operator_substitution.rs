use std::collections::HashMap;

use crate::formulas::{EncodedFormula, Formula, FormulaFactory, FormulaType};
use crate::operations::transformations::{substitute, Substitution};

/// An `OperatorSubstitution` maps operator or constant symbols to template
/// formulas.
///
/// A template is an ordinary formula over the two reserved placeholder
/// variables [`FIRST_OPERAND`] and [`SECOND_OPERAND`]: the template of a
/// unary operator uses only the first placeholder, the template of a binary
/// operator uses both, and the template of a constant uses neither. A
/// template may itself contain mapped operators; those are expanded through
/// the same substitution. The mapping must therefore be acyclic: no
/// template may contain its own symbol, directly or through other mapped
/// templates. This is a caller contract and not checked at runtime.
///
/// [`FormulaType::Var`] is not an operator symbol and must not be a key.
pub type OperatorSubstitution = HashMap<FormulaType, EncodedFormula>;

/// The placeholder variable name standing for the first (or only) operand
/// of a substituted operator.
pub const FIRST_OPERAND: &str = "p";

/// The placeholder variable name standing for the second operand of a
/// substituted binary operator.
pub const SECOND_OPERAND: &str = "q";

/// Substitutes operators of the given formula with the template formulas
/// given in `substitution`.
///
/// The formula is rewritten bottom-up: wherever a mapped operator occurs,
/// it is replaced by its template with the placeholders bound to the
/// operator's (already rewritten) operands. The result contains no
/// occurrence of any mapped symbol.
///
/// Input formulas may freely contain variables named like the placeholders;
/// placeholder binding happens only inside freshly instantiated templates.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::{BinaryOp, FormulaFactory, FormulaType, ToFormula};
/// # use opbasis::operations::transformations::substitute_operators;
/// # use std::collections::HashMap;
///
/// let f = FormulaFactory::new();
///
/// let formula = "a => (b => c)".to_formula(&f);
///
/// let mut substitution = HashMap::new();
/// substitution.insert(FormulaType::Binary(BinaryOp::Impl), "~p | q".to_formula(&f));
///
/// let substituted = substitute_operators(formula, &substitution, &f);
///
/// assert_eq!(substituted.to_string(&f), "~a | (~b | c)");
/// ```
pub fn substitute_operators(formula: EncodedFormula, substitution: &OperatorSubstitution, f: &FormulaFactory) -> EncodedFormula {
    debug_assert!(!substitution.contains_key(&FormulaType::Var), "Variables are not operator symbols");

    match formula.unpack(f) {
        Formula::Var(_) => formula,
        Formula::True | Formula::False => substitution
            .get(&formula.formula_type())
            .map_or(formula, |&template| substitute_operators(template, substitution, f)),
        Formula::Not(op) => {
            let new_op = substitute_operators(op, substitution, f);
            substitution
                .get(&FormulaType::Not)
                .map_or_else(|| f.not(new_op), |&template| instantiate(template, new_op, None, substitution, f))
        }
        Formula::Binary(op, left, right) => {
            let new_left = substitute_operators(left, substitution, f);
            let new_right = substitute_operators(right, substitution, f);
            substitution.get(&FormulaType::Binary(op)).map_or_else(
                || f.binary(op, new_left, new_right),
                |&template| instantiate(template, new_left, Some(new_right), substitution, f),
            )
        }
    }
}

// Expands the template through the substitution itself before binding the
// placeholders, so templates may reference other mapped symbols
// transitively. The operands are already fully rewritten at this point.
fn instantiate(
    template: EncodedFormula,
    first: EncodedFormula,
    second: Option<EncodedFormula>,
    substitution: &OperatorSubstitution,
    f: &FormulaFactory,
) -> EncodedFormula {
    let expanded = substitute_operators(template, substitution, f);
    let mut operands = Substitution::new();
    operands.insert(f.var(FIRST_OPERAND), first);
    if let Some(second) = second {
        operands.insert(f.var(SECOND_OPERAND), second);
    }
    substitute(expanded, &operands, f)
}
