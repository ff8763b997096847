use std::borrow::Cow;

use crate::datastructures::Assignment;
use crate::formulas::formula_cache::simple_cache::SimpleCache;
use crate::formulas::formula_cache::var_cache::VariableCache;
use crate::formulas::{BinaryOp, EncodedFormula, Formula, FormulaType, Variable};
use crate::operations::transformations::{
    substitute, substitute_operators, to_implies_false, to_implies_not, to_nand, to_not_and, to_not_and_or, OperatorSubstitution,
    Substitution,
};
use crate::parser::propositional_parser::{parse, Rule};

use super::formula_cache::formula_encoding::FormulaEncoding;

type BinaryCache = SimpleCache<(EncodedFormula, EncodedFormula)>;

/// The formula factory. It holds the structure of all formulas created in
/// it, such that a formula itself is only a small reference
/// ([`EncodedFormula`]) into the factory.
///
/// Nodes are interned: constructing the same formula twice yields the same
/// reference, and structural equality of two formulas from the same factory
/// is reference equality. A factory never mutates or removes a node, so
/// formulas can be shared freely (also across threads).
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::formulas::FormulaFactory;
/// let f = FormulaFactory::new();
///
/// let a = f.variable("a");
/// let b = f.variable("b");
/// let and1 = f.and(a, b);
/// let and2 = f.and(a, b);
///
/// assert_eq!(and1, and2);
/// ```
pub struct FormulaFactory {
    pub(crate) vars: VariableCache,
    pub(crate) nots: SimpleCache<EncodedFormula>,
    ands: BinaryCache,
    ors: BinaryCache,
    impls: BinaryCache,
    xors: BinaryCache,
    equivs: BinaryCache,
    nands: BinaryCache,
    nors: BinaryCache,
}

impl FormulaFactory {
    /// Creates a new empty formula factory.
    pub fn new() -> Self {
        Self {
            vars: VariableCache::new(),
            nots: SimpleCache::new(),
            ands: SimpleCache::new(),
            ors: SimpleCache::new(),
            impls: SimpleCache::new(),
            xors: SimpleCache::new(),
            equivs: SimpleCache::new(),
            nands: SimpleCache::new(),
            nors: SimpleCache::new(),
        }
    }

    /// Returns the constant `$true`.
    pub const fn verum(&self) -> EncodedFormula {
        EncodedFormula::constant(true)
    }

    /// Returns the constant `$false`.
    pub const fn falsum(&self) -> EncodedFormula {
        EncodedFormula::constant(false)
    }

    /// Returns `$true` or `$false` based on `value`.
    pub const fn constant(&self, value: bool) -> EncodedFormula {
        EncodedFormula::constant(value)
    }

    /// Creates a variable with the given name and returns it as a formula.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.variable("a");
    ///
    /// assert!(a.is_variable());
    /// ```
    pub fn variable(&self, name: &str) -> EncodedFormula {
        EncodedFormula::from(self.vars.get_or_insert(Cow::Borrowed(name)))
    }

    /// Creates a variable with the given name and returns it as a
    /// [`Variable`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.var("a");
    ///
    /// assert_eq!(a.name(&f), "a");
    /// ```
    pub fn var(&self, name: &str) -> Variable {
        Variable::try_from(self.vars.get_or_insert(Cow::Borrowed(name))).unwrap()
    }

    /// Creates the negation of `operand`.
    ///
    /// No simplification is performed: negating a negation yields a new
    /// `Not` node, not the inner operand.
    pub fn not(&self, operand: EncodedFormula) -> EncodedFormula {
        EncodedFormula::from(self.nots.get_or_insert(operand, FormulaType::Not))
    }

    /// Creates a binary node with operator `op` over `left` and `right`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{BinaryOp, FormulaFactory};
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.variable("a");
    /// let b = f.variable("b");
    ///
    /// assert_eq!(f.binary(BinaryOp::And, a, b), f.and(a, b));
    /// assert_eq!(f.binary(BinaryOp::Impl, a, b), f.implication(a, b));
    /// ```
    pub fn binary(&self, op: BinaryOp, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        EncodedFormula::from(self.binary_cache(op).get_or_insert((left, right), FormulaType::Binary(op)))
    }

    /// Creates the conjunction of `left` and `right`.
    pub fn and(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::And, left, right)
    }

    /// Creates the disjunction of `left` and `right`.
    pub fn or(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Or, left, right)
    }

    /// Creates the implication `left => right`.
    pub fn implication(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Impl, left, right)
    }

    /// Creates the exclusive or of `left` and `right`.
    pub fn xor(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Xor, left, right)
    }

    /// Creates the equivalence `left <=> right`.
    pub fn equivalence(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Equiv, left, right)
    }

    /// Creates the negated conjunction `left ~& right`.
    pub fn nand(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Nand, left, right)
    }

    /// Creates the negated disjunction `left ~| right`.
    pub fn nor(&self, left: EncodedFormula, right: EncodedFormula) -> EncodedFormula {
        self.binary(BinaryOp::Nor, left, right)
    }

    /// Parses a string into a formula.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.variable("a");
    /// let b = f.variable("b");
    ///
    /// assert_eq!(f.parse("a ^ b").unwrap(), f.xor(a, b));
    /// assert!(f.parse("a &").is_err());
    /// ```
    pub fn parse(&self, input: &str) -> Result<EncodedFormula, Box<pest::error::Error<Rule>>> {
        parse(self, input)
    }

    /// Evaluates `formula` under `assignment`.
    ///
    /// Variables not contained in the assignment evaluate to `false`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::datastructures::Assignment;
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "a & ~b".to_formula(&f);
    /// let assignment = Assignment::from_variables(&[f.var("a")], &[f.var("b")]);
    ///
    /// assert!(f.evaluate(formula, &assignment));
    /// ```
    pub fn evaluate(&self, formula: EncodedFormula, assignment: &Assignment) -> bool {
        match formula.unpack(self) {
            Formula::True => true,
            Formula::False => false,
            Formula::Var(var) => assignment.evaluate_var(var),
            Formula::Not(op) => !self.evaluate(op, assignment),
            Formula::Binary(op, left, right) => {
                let l = self.evaluate(left, assignment);
                let r = self.evaluate(right, assignment);
                match op {
                    BinaryOp::And => l && r,
                    BinaryOp::Or => l || r,
                    BinaryOp::Impl => !l || r,
                    BinaryOp::Xor => l != r,
                    BinaryOp::Equiv => l == r,
                    BinaryOp::Nand => !(l && r),
                    BinaryOp::Nor => !(l || r),
                }
            }
        }
    }

    /// Substitutes variables of `formula` with the formulas given in
    /// `substitution`. See [`substitute`].
    pub fn substitute(&self, formula: EncodedFormula, substitution: &Substitution) -> EncodedFormula {
        substitute(formula, substitution, self)
    }

    /// Substitutes operators of `formula` with the templates given in
    /// `substitution`. See [`substitute_operators`].
    pub fn substitute_operators(&self, formula: EncodedFormula, substitution: &OperatorSubstitution) -> EncodedFormula {
        substitute_operators(formula, substitution, self)
    }

    /// Converts `formula` to an equivalent formula over `~`, `&`, `|` only.
    /// See [`to_not_and_or`].
    pub fn to_not_and_or(&self, formula: EncodedFormula) -> EncodedFormula {
        to_not_and_or(formula, self)
    }

    /// Converts `formula` to an equivalent formula over `~`, `&` only.
    /// See [`to_not_and`].
    pub fn to_not_and(&self, formula: EncodedFormula) -> EncodedFormula {
        to_not_and(formula, self)
    }

    /// Converts `formula` to an equivalent formula over `~&` only.
    /// See [`to_nand`].
    pub fn to_nand(&self, formula: EncodedFormula) -> EncodedFormula {
        to_nand(formula, self)
    }

    /// Converts `formula` to an equivalent formula over `=>`, `~` only.
    /// See [`to_implies_not`].
    pub fn to_implies_not(&self, formula: EncodedFormula) -> EncodedFormula {
        to_implies_not(formula, self)
    }

    /// Converts `formula` to an equivalent formula over `=>`, `$false` only.
    /// See [`to_implies_false`].
    pub fn to_implies_false(&self, formula: EncodedFormula) -> EncodedFormula {
        to_implies_false(formula, self)
    }

    pub(crate) fn var_name(&self, encoding: FormulaEncoding) -> String {
        self.vars.get(encoding)
    }

    pub(crate) const fn binary_cache(&self, op: BinaryOp) -> &BinaryCache {
        match op {
            BinaryOp::And => &self.ands,
            BinaryOp::Or => &self.ors,
            BinaryOp::Impl => &self.impls,
            BinaryOp::Xor => &self.xors,
            BinaryOp::Equiv => &self.equivs,
            BinaryOp::Nand => &self.nands,
            BinaryOp::Nor => &self.nors,
        }
    }
}

impl Default for FormulaFactory {
    fn default() -> Self {
        Self::new()
    }
}
