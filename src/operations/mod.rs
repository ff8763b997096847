/// A transformation takes a formula as input and returns another formula,
/// thus transforming the input formula. Examples for transformations are the
/// operator-basis conversions or variable substitution.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula only uses the operators of a certain
/// basis.
pub mod predicates;

/// A function takes a formula as input and computes some value on that
/// formula. This value can be a simple result type, like the list of
/// operands, or a more complex one, like the set of operators used.
pub mod functions;
