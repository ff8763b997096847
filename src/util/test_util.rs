#![allow(non_snake_case)]
#![allow(dead_code)]

use itertools::Itertools;

use crate::datastructures::Assignment;
use crate::formulas::{EncodedFormula, FormulaFactory, Variable};

/// Asserts that both formulas evaluate to the same truth value under every
/// assignment to the union of their variables.
pub fn assert_equivalent(lhs: EncodedFormula, rhs: EncodedFormula, f: &FormulaFactory) {
    let variables: Vec<Variable> = lhs.variables(f).union(&rhs.variables(f)).copied().collect();
    for pos in variables.iter().copied().powerset() {
        let assignment = Assignment::from_variables(&pos, &[]);
        assert_eq!(
            f.evaluate(lhs, &assignment),
            f.evaluate(rhs, &assignment),
            "{} and {} differ for positive variables {:?}",
            lhs.to_string(f),
            rhs.to_string(f),
            pos.iter().map(|v| v.name(f)).collect::<Vec<_>>(),
        );
    }
}

pub struct F {
    pub(crate) f: FormulaFactory,

    // Constants
    pub(crate) TRUE: EncodedFormula,
    pub(crate) FALSE: EncodedFormula,

    // Variables
    pub(crate) A: EncodedFormula,
    pub(crate) B: EncodedFormula,
    pub(crate) C: EncodedFormula,
    pub(crate) D: EncodedFormula,
    pub(crate) X: EncodedFormula,
    pub(crate) Y: EncodedFormula,

    // Negated variables
    pub(crate) NA: EncodedFormula,
    pub(crate) NB: EncodedFormula,
    pub(crate) NX: EncodedFormula,
    pub(crate) NY: EncodedFormula,

    // Disjunctions
    pub(crate) OR1: EncodedFormula,
    pub(crate) OR2: EncodedFormula,

    // Conjunctions
    pub(crate) AND1: EncodedFormula,
    pub(crate) AND2: EncodedFormula,

    // Negations
    pub(crate) NOT1: EncodedFormula,
    pub(crate) NOT2: EncodedFormula,

    // Implications
    pub(crate) IMP1: EncodedFormula,
    pub(crate) IMP2: EncodedFormula,
    pub(crate) IMP3: EncodedFormula,

    // Equivalences
    pub(crate) EQ1: EncodedFormula,

    // Exclusive ors
    pub(crate) XOR1: EncodedFormula,

    // Negated conjunctions/disjunctions
    pub(crate) NAND1: EncodedFormula,
    pub(crate) NOR1: EncodedFormula,
}

impl F {
    pub(crate) fn new() -> Self {
        let f = FormulaFactory::new();

        let TRUE = f.verum();
        let FALSE = f.falsum();

        let A = f.variable("a");
        let B = f.variable("b");
        let C = f.variable("c");
        let D = f.variable("d");
        let X = f.variable("x");
        let Y = f.variable("y");
        let NA = f.not(A);
        let NB = f.not(B);
        let NX = f.not(X);
        let NY = f.not(Y);

        let OR1 = f.or(X, Y);
        let OR2 = f.or(NX, NY);
        let AND1 = f.and(A, B);
        let AND2 = f.and(NA, NB);

        let NOT1 = f.not(AND1);
        let NOT2 = f.not(OR1);

        let IMP1 = f.implication(A, B);
        let IMP2 = f.implication(NA, NB);
        let IMP3 = f.implication(AND1, OR1);

        let EQ1 = f.equivalence(A, B);
        let XOR1 = f.xor(AND1, OR1);
        let NAND1 = f.nand(A, B);
        let NOR1 = f.nor(A, B);

        Self {
            f,
            TRUE,
            FALSE,
            A,
            B,
            C,
            D,
            X,
            Y,
            NA,
            NB,
            NX,
            NY,
            OR1,
            OR2,
            AND1,
            AND2,
            NOT1,
            NOT2,
            IMP1,
            IMP2,
            IMP3,
            EQ1,
            XOR1,
            NAND1,
            NOR1,
        }
    }
}
