use crate::formulas::{FormulaFactory, Variable};
use crate::operations::{functions, predicates};

use super::formula_cache::formula_encoding::FormulaEncoding;

use std::collections::BTreeSet;

/// The binary operators a formula node can carry.
///
/// All binary operators are strict pairs: a node has exactly a first and a
/// second operand, and operand order is significant.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum BinaryOp {
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Impl,
    /// Exclusive or
    Xor,
    /// Equivalence
    Equiv,
    /// Negated conjunction
    Nand,
    /// Negated disjunction
    Nor,
}

impl BinaryOp {
    /// All binary operators, in parser precedence order (weakest first).
    pub const VALUES: [Self; 7] = [Self::Equiv, Self::Impl, Self::Or, Self::Nor, Self::Xor, Self::And, Self::Nand];

    /// Returns the textual symbol of this operator as understood by the
    /// parser and produced by [`EncodedFormula::to_string`].
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Impl => "=>",
            Self::Xor => "^",
            Self::Equiv => "<=>",
            Self::Nand => "~&",
            Self::Nor => "~|",
        }
    }
}

/// Specifies all types an [`EncodedFormula`] can have.
///
/// You can get the type of an `EncodedFormula` by calling
/// [`EncodedFormula::formula_type()`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum FormulaType {
    /// Constant true
    True,
    /// Constant false
    False,
    /// Variable
    Var,
    /// Negation
    Not,
    /// Binary operator and which one
    Binary(BinaryOp),
}

/// An unpacked representation of an [`EncodedFormula`]. Allows access to the
/// operands of the formula.
///
/// You can obtain a `Formula` from an `EncodedFormula` by calling
/// [`EncodedFormula::unpack()`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum Formula {
    /// Constant true
    True,
    /// Constant false
    False,
    /// Variable
    Var(Variable),
    /// Operand of a negation
    Not(EncodedFormula),
    /// Operator and operands of a binary node
    Binary(BinaryOp, EncodedFormula, EncodedFormula),
}

/// `EncodedFormula` represents a logical formula.
///
/// An `EncodedFormula` instance does not itself contain much information. It
/// is instead a reference into a [`FormulaFactory`] which stores the
/// structure of the formula. This means that **an `EncodedFormula` is only
/// useful in the context of the `FormulaFactory` it was created in.**
///
/// Since formulas are interned in their factory, two structurally equal
/// formulas are represented by the same `EncodedFormula`, and unchanged
/// subformulas are shared between input and output of a conversion rather
/// than copied. Formulas are immutable: every operation producing a formula
/// builds new nodes and never modifies existing ones.
///
/// Since an `EncodedFormula` is technically only a fancy pointer, it also
/// implements the [`Copy`] trait.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub struct EncodedFormula {
    pub(super) encoding: FormulaEncoding,
}

impl EncodedFormula {
    /// Creates a new constant `true` or `false` based on `value`.
    ///
    /// Note that a constant is the only type of formula that does not need
    /// a [`FormulaFactory`].
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{EncodedFormula, FormulaType};
    ///
    /// let verum = EncodedFormula::constant(true);
    /// let falsum = EncodedFormula::constant(false);
    ///
    /// assert_eq!(verum.formula_type(), FormulaType::True);
    /// assert_eq!(falsum.formula_type(), FormulaType::False);
    /// ```
    pub const fn constant(value: bool) -> Self {
        let ty = if value { FormulaType::True } else { FormulaType::False };
        Self { encoding: FormulaEncoding::encode_type(ty) }
    }

    /// Returns the type of the formula as a [`FormulaType`] enum.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{BinaryOp, FormulaFactory, FormulaType, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula1 = "$true".to_formula(&f);
    /// let formula2 = "a & b".to_formula(&f);
    ///
    /// assert_eq!(formula1.formula_type(), FormulaType::True);
    /// assert_eq!(formula2.formula_type(), FormulaType::Binary(BinaryOp::And));
    /// ```
    pub fn formula_type(self) -> FormulaType {
        self.encoding.formula_type()
    }

    /// Unpacks an `EncodedFormula` into a [`Formula`] enum, providing access
    /// to the structure of the formula.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, Formula, ToFormula};
    /// # let f = FormulaFactory::new();
    /// # let formula = "$true".to_formula(&f);
    ///
    /// match formula.unpack(&f) {
    ///     Formula::True => {},
    ///     Formula::False => {},
    ///     Formula::Var(variable) => {},
    ///     Formula::Not(operand) => {},
    ///     Formula::Binary(op, left, right) => {},
    /// }
    /// ```
    pub fn unpack(self, f: &FormulaFactory) -> Formula {
        match self.formula_type() {
            FormulaType::True => Formula::True,
            FormulaType::False => Formula::False,
            FormulaType::Var => Formula::Var(Variable::try_from(self.encoding).unwrap()),
            FormulaType::Not => Formula::Not(f.nots.get(self.encoding)),
            FormulaType::Binary(op) => {
                let (left, right) = f.binary_cache(op).get(self.encoding);
                Formula::Binary(op, left, right)
            }
        }
    }

    /// Returns `true` if this formula is the constant `False`.
    pub fn is_falsum(self) -> bool {
        matches!(self.formula_type(), FormulaType::False)
    }

    /// Returns `true` if this formula is the constant `True`.
    pub fn is_verum(self) -> bool {
        matches!(self.formula_type(), FormulaType::True)
    }

    /// Returns `true` if this formula is a constant (`True` or `False`).
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::EncodedFormula;
    ///
    /// let formula1 = EncodedFormula::constant(true);
    /// let formula2 = EncodedFormula::constant(false);
    ///
    /// assert!(formula1.is_constant());
    /// assert!(formula2.is_constant());
    /// ```
    pub fn is_constant(self) -> bool {
        self.is_falsum() || self.is_verum()
    }

    /// Returns `true` if this formula is a variable.
    pub fn is_variable(self) -> bool {
        matches!(self.formula_type(), FormulaType::Var)
    }

    /// Returns `true` if this formula is a negation.
    pub fn is_not(self) -> bool {
        matches!(self.formula_type(), FormulaType::Not)
    }

    /// Returns `true` if this formula is a binary operator node.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let formula1 = "a <=> b".to_formula(&f);
    /// let formula2 = "~a".to_formula(&f);
    ///
    /// assert!(formula1.is_binary_operator());
    /// assert!(!formula2.is_binary_operator());
    /// ```
    pub fn is_binary_operator(self) -> bool {
        matches!(self.formula_type(), FormulaType::Binary(_))
    }

    /// Returns a vector of all operands of this formula.
    ///
    /// Binary operators return their `left` and `right` operands, `Not`
    /// returns a vector with only its inner formula, and all other formulas
    /// return an empty vector.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.variable("a");
    /// let b = f.variable("b");
    ///
    /// let formula1 = "a => b".to_formula(&f);
    /// let formula2 = f.not(formula1);
    ///
    /// assert_eq!(a.operands(&f), vec![]);
    /// assert_eq!(formula1.operands(&f), vec![a, b]);
    /// assert_eq!(formula2.operands(&f), vec![formula1]);
    /// ```
    pub fn operands(self, f: &FormulaFactory) -> Vec<Self> {
        functions::operands(self, f)
    }

    /// Returns a set with all variables in this formula.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// # use std::collections::BTreeSet;
    /// let f = FormulaFactory::new();
    ///
    /// let a = f.var("a");
    /// let b = f.var("b");
    /// let c = f.var("c");
    /// let formula = "(a => b) & c".to_formula(&f);
    ///
    /// let expected = BTreeSet::from([a, b, c]);
    /// assert_eq!(formula.variables(&f), expected);
    /// ```
    pub fn variables(self, f: &FormulaFactory) -> BTreeSet<Variable> {
        functions::variables(self, f)
    }

    /// Returns the set of distinct operator and constant symbols appearing
    /// in this formula. Variables do not count as operators.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{BinaryOp, FormulaFactory, FormulaType, ToFormula};
    /// # use std::collections::BTreeSet;
    /// let f = FormulaFactory::new();
    ///
    /// let formula = "~a | $true".to_formula(&f);
    ///
    /// let expected = BTreeSet::from([
    ///     FormulaType::True,
    ///     FormulaType::Not,
    ///     FormulaType::Binary(BinaryOp::Or),
    /// ]);
    /// assert_eq!(formula.operators(&f), expected);
    /// ```
    pub fn operators(self, f: &FormulaFactory) -> BTreeSet<FormulaType> {
        functions::operators(self, f)
    }

    /// Returns `true` if every operator and constant in this formula belongs
    /// to `basis`. Variables are always allowed.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// # use opbasis::operations::predicates::NOT_AND_OR;
    /// let f = FormulaFactory::new();
    ///
    /// let formula1 = "~a | (b & c)".to_formula(&f);
    /// let formula2 = "a => b".to_formula(&f);
    ///
    /// assert!(formula1.in_basis(NOT_AND_OR, &f));
    /// assert!(!formula2.in_basis(NOT_AND_OR, &f));
    /// ```
    pub fn in_basis(self, basis: &[FormulaType], f: &FormulaFactory) -> bool {
        predicates::in_basis(self, basis, f)
    }

    /// Returns this formula as the explicit variable type. If the formula
    /// isn't a variable, it will return `None`.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let formula1 = f.variable("a");
    /// let formula2 = f.verum();
    ///
    /// let var1 = f.var("a");
    ///
    /// assert_eq!(formula1.as_variable(), Some(var1));
    /// assert_eq!(formula2.as_variable(), None);
    /// ```
    pub fn as_variable(self) -> Option<Variable> {
        Variable::try_from(self.encoding).ok()
    }

    /// Returns the left operand of a binary operator. If the formula isn't a
    /// binary operator, it will return `None`.
    pub fn left(self, f: &FormulaFactory) -> Option<Self> {
        match self.unpack(f) {
            Formula::Binary(_, left, _) => Some(left),
            _ => None,
        }
    }

    /// Returns the right operand of a binary operator. If the formula isn't
    /// a binary operator, it will return `None`.
    pub fn right(self, f: &FormulaFactory) -> Option<Self> {
        match self.unpack(f) {
            Formula::Binary(_, _, right) => Some(right),
            _ => None,
        }
    }

    /// Returns the operand of a `Not`-node. If the formula isn't a
    /// `Not`-node, it will return `None`.
    pub fn not_operand(self, f: &FormulaFactory) -> Option<Self> {
        match self.unpack(f) {
            Formula::Not(op) => Some(op),
            _ => None,
        }
    }

    /// Converts this formula into a string representation.
    ///
    /// Strings obtained by this function can also be parsed back again, and
    /// re-parsing yields the identical formula.
    ///
    /// # Example
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, ToFormula};
    /// let f = FormulaFactory::new();
    ///
    /// let str1 = "$true";
    /// let str2 = "~(a => b)";
    /// let str3 = "(a | b) ~& c";
    ///
    /// assert_eq!(str1.to_formula(&f).to_string(&f), str1);
    /// assert_eq!(str2.to_formula(&f).to_string(&f), str2);
    /// assert_eq!(str3.to_formula(&f).to_string(&f), str3);
    /// ```
    pub fn to_string(self, f: &FormulaFactory) -> String {
        match self.unpack(f) {
            Formula::True => "$true".to_string(),
            Formula::False => "$false".to_string(),
            Formula::Var(var) => var.name(f),
            Formula::Not(op) => {
                // negation chains print without parentheses: `~~a`
                if op.is_binary_operator() {
                    format!("~({})", op.to_string(f))
                } else {
                    format!("~{}", op.to_string(f))
                }
            }
            Formula::Binary(op, left, right) => {
                let lhs = self.operand_to_string(left, f);
                let rhs = self.operand_to_string(right, f);
                format!("{} {} {}", lhs, op.symbol(), rhs)
            }
        }
    }

    pub(crate) fn precedence(self) -> u8 {
        use FormulaType::{Binary, False, Not, True, Var};
        match self.formula_type() {
            Binary(BinaryOp::Equiv) => 2_u8,
            Binary(BinaryOp::Impl) => 3_u8,
            Binary(BinaryOp::Or | BinaryOp::Nor) => 4_u8,
            Binary(BinaryOp::Xor) => 5_u8,
            Binary(BinaryOp::And | BinaryOp::Nand) => 6_u8,
            Not => 7_u8,
            Var => 8_u8,
            True | False => 9_u8,
        }
    }

    // Binary nodes are strict pairs, so an operand of the same precedence is
    // parenthesized as well. That keeps the printed string unambiguous.
    fn operand_to_string(self, op: Self, f: &FormulaFactory) -> String {
        if op.precedence() > self.precedence() {
            op.to_string(f)
        } else {
            format!("({})", op.to_string(f))
        }
    }
}

impl From<FormulaEncoding> for EncodedFormula {
    fn from(encoding: FormulaEncoding) -> Self {
        Self { encoding }
    }
}

/// Trait for converting a type into a formula of the given [`FormulaFactory`].
pub trait ToFormula {
    /// Converts `self` into a formula of `f`.
    fn to_formula(&self, f: &FormulaFactory) -> EncodedFormula;
}

impl ToFormula for str {
    /// Parses a string into a formula.
    ///
    /// # Panic
    ///
    /// This function panics if the input string is not a valid formula. If
    /// you are not sure whether the input is valid, use
    /// [`FormulaFactory::parse`] instead.
    fn to_formula(&self, f: &FormulaFactory) -> EncodedFormula {
        f.parse(self).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::FormulaFactory;

    #[test]
    fn test_formula_interning() {
        let f = FormulaFactory::new();
        let a = f.variable("a");
        let b = f.variable("b");
        let ab1 = f.and(a, b);
        let ab2 = f.and(a, b);
        let ba = f.and(b, a);
        assert_eq!(ab1, ab2);
        assert_ne!(ab1, ba);
        assert_eq!(f.not(ab1), f.not(ab2));
        assert_eq!(f.verum(), EncodedFormula::constant(true));
        assert_eq!(f.falsum(), EncodedFormula::constant(false));
    }

    #[test]
    fn test_unpack() {
        let f = FormulaFactory::new();
        let a = f.variable("a");
        let b = f.variable("b");
        let impl1 = f.implication(a, b);
        match impl1.unpack(&f) {
            Formula::Binary(BinaryOp::Impl, left, right) => {
                assert_eq!(left, a);
                assert_eq!(right, b);
            }
            _ => panic!("Unexpected formula structure"),
        }
        assert_eq!(f.not(a).unpack(&f), Formula::Not(a));
        assert_eq!(a.unpack(&f), Formula::Var(f.var("a")));
    }

    #[test]
    fn test_to_string() {
        let f = FormulaFactory::new();
        let a = f.variable("a");
        let b = f.variable("b");
        let c = f.variable("c");
        let and1 = f.and(a, b);
        let or1 = f.or(and1, c);
        assert_eq!(or1.to_string(&f), "a & b | c");
        assert_eq!(f.not(a).to_string(&f), "~a");
        assert_eq!(f.not(f.not(a)).to_string(&f), "~~a");
        assert_eq!(f.not(and1).to_string(&f), "~(a & b)");
        assert_eq!(f.nand(a, b).to_string(&f), "a ~& b");
        assert_eq!(f.nor(f.or(a, b), c).to_string(&f), "(a | b) ~| c");
        assert_eq!(f.xor(a, b).to_string(&f), "a ^ b");
        assert_eq!(f.equivalence(a, f.implication(b, c)).to_string(&f), "a <=> b => c");
        assert_eq!(f.and(a, f.and(b, c)).to_string(&f), "a & (b & c)");
    }

    #[test]
    fn test_from_string() {
        let f = FormulaFactory::new();
        let formula1 = String::from("a & b => ~c").to_formula(&f);
        let formula2 = "a & b => ~c".to_formula(&f);

        assert_eq!(formula1, f.parse("a & b => ~c").unwrap());
        assert_eq!(formula2, f.parse("a & b => ~c").unwrap());
    }
}
