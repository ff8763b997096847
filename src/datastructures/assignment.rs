use std::collections::HashSet;

use crate::formulas::Variable;

/// An `Assignment` stores a set of positive and negative [`Variable`]s.
///
/// It is the input of formula evaluation
/// ([`FormulaFactory::evaluate`](crate::formulas::FormulaFactory::evaluate)):
/// positive variables evaluate to `true`, all other variables to `false`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use opbasis::datastructures::Assignment;
/// # use opbasis::formulas::FormulaFactory;
/// let f = FormulaFactory::new();
///
/// let a = f.var("a");
/// let b = f.var("b");
///
/// let assignment = Assignment::from_variables(&[a], &[b]);
///
/// assert!(assignment.contains_pos(a));
/// assert!(assignment.contains_neg(b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    /// Set of all positive variables of this assignment.
    pub pos: HashSet<Variable>,
    /// Set of all negative variables of this assignment.
    pub neg: HashSet<Variable>,
}

impl Assignment {
    /// Creates a new assignment.
    pub const fn new(pos: HashSet<Variable>, neg: HashSet<Variable>) -> Self {
        Self { pos, neg }
    }

    /// Creates a new assignment from slices.
    pub fn from_variables(pos: &[Variable], neg: &[Variable]) -> Self {
        Self { pos: pos.iter().copied().collect(), neg: neg.iter().copied().collect() }
    }

    /// Returns all positive variables of this assignment.
    pub const fn pos(&self) -> &HashSet<Variable> {
        &self.pos
    }

    /// Returns all negative variables of this assignment.
    pub const fn neg(&self) -> &HashSet<Variable> {
        &self.neg
    }

    /// Returns the overall number of positive and negative variables.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Returns `true` if there is no variable in this assignment.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Returns `true` if the given variable is a positive variable in this
    /// assignment.
    pub fn contains_pos(&self, var: Variable) -> bool {
        self.pos.contains(&var)
    }

    /// Returns `true` if the given variable is a negative variable in this
    /// assignment.
    pub fn contains_neg(&self, var: Variable) -> bool {
        self.neg.contains(&var)
    }

    /// Evaluates the given variable: `true` if it is positive in this
    /// assignment, `false` if it is negative or not contained at all.
    pub fn evaluate_var(&self, var: Variable) -> bool {
        self.pos.contains(&var)
    }
}
