use fastrand::Rng;

use crate::formulas::{BinaryOp, EncodedFormula, FormulaFactory};

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed -- use a value `!= 0` to get deterministic results
/// - the variables -- this list of variables will be used. The probabilities
///   of being chosen are the same for all variables.
/// - weights for different formula types, defining how often a formula type
///   is generated compared to other types.
///
/// Note that the weights can only be applied for inner nodes of the generated
/// formula, since the leaves of a formula are always constants or variables.
/// So the weights of constants and variables will effectively be higher and
/// the weights of all operators will be lower.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) weight_constant: f32,
    pub(crate) weight_variable: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_and: f32,
    pub(crate) weight_or: f32,
    pub(crate) weight_impl: f32,
    pub(crate) weight_xor: f32,
    pub(crate) weight_equiv: f32,
    pub(crate) weight_nand: f32,
    pub(crate) weight_nor: f32,
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given variables and with default
    /// settings.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![String::from("A"), String::from("B")];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub fn default_with_variables(variables: Vec<String>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            weight_constant: 0.1,
            weight_variable: 8.0,
            weight_not: 4.0,
            weight_and: 8.0,
            weight_or: 8.0,
            weight_impl: 2.0,
            weight_xor: 1.0,
            weight_equiv: 2.0,
            weight_nand: 1.0,
            weight_nor: 1.0,
        }
    }

    /// Builds a basic configuration with default settings. Additionally, it
    /// generates `num_vars` variables and adds them to the configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(2);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        Self::default_with_variables((0..num_vars).map(|n| format!("v{n}")).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the relative weight of a constant.
    #[must_use]
    pub const fn weight_constant(mut self, weight_constant: f32) -> Self {
        self.weight_constant = weight_constant;
        self
    }

    /// Sets the relative weight of a variable.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of a conjunction.
    #[must_use]
    pub const fn weight_and(mut self, weight_and: f32) -> Self {
        self.weight_and = weight_and;
        self
    }

    /// Sets the relative weight of a disjunction.
    #[must_use]
    pub const fn weight_or(mut self, weight_or: f32) -> Self {
        self.weight_or = weight_or;
        self
    }

    /// Sets the relative weight of an implication.
    #[must_use]
    pub const fn weight_impl(mut self, weight_impl: f32) -> Self {
        self.weight_impl = weight_impl;
        self
    }

    /// Sets the relative weight of an exclusive or.
    #[must_use]
    pub const fn weight_xor(mut self, weight_xor: f32) -> Self {
        self.weight_xor = weight_xor;
        self
    }

    /// Sets the relative weight of an equivalence.
    #[must_use]
    pub const fn weight_equiv(mut self, weight_equiv: f32) -> Self {
        self.weight_equiv = weight_equiv;
        self
    }

    /// Sets the relative weight of a negated conjunction.
    #[must_use]
    pub const fn weight_nand(mut self, weight_nand: f32) -> Self {
        self.weight_nand = weight_nand;
        self
    }

    /// Sets the relative weight of a negated disjunction.
    #[must_use]
    pub const fn weight_nor(mut self, weight_nor: f32) -> Self {
        self.weight_nor = weight_nor;
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_constant
            + self.weight_variable
            + self.weight_not
            + self.weight_and
            + self.weight_or
            + self.weight_impl
            + self.weight_xor
            + self.weight_equiv
            + self.weight_nand
            + self.weight_nor;
        let constant = self.weight_constant / total;
        let variable = constant + self.weight_variable / total;
        let not = variable + self.weight_not / total;
        let and = not + self.weight_and / total;
        let or = and + self.weight_or / total;
        let implication = or + self.weight_impl / total;
        let xor = implication + self.weight_xor / total;
        let equivalence = xor + self.weight_equiv / total;
        let nand = equivalence + self.weight_nand / total;
        let nor = nand + self.weight_nor / total;
        FormulaTypeProbabilities { constant, variable, not, and, or, implication, xor, equivalence, nand, _nor: nor }
    }
}

struct FormulaTypeProbabilities {
    constant: f32,
    variable: f32,
    not: f32,
    and: f32,
    or: f32,
    implication: f32,
    xor: f32,
    equivalence: f32,
    nand: f32,
    _nor: f32,
}

/// A generator for random formulas.
///
/// The formula types included in the generated formulas can be configured
/// with a [`FormulaRandomizerConfig`].
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
    /// let config = FormulaRandomizerConfig::default_with_num_vars(5);
    /// let mut randomizer = FormulaRandomizer::new(config);
    /// ```
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        let seed = config.seed;
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random: Rng::with_seed(seed), formula_probs }
    }

    /// Returns a random constant.
    pub fn constant(&mut self, f: &FormulaFactory) -> EncodedFormula {
        f.constant(self.random.bool())
    }

    /// Returns a random name of a variable as a string.
    pub fn var_string(&mut self) -> &str {
        &self.config.variables[self.random.usize(0..self.config.variables.len())]
    }

    /// Returns a random variable.
    pub fn variable(&mut self, f: &FormulaFactory) -> EncodedFormula {
        f.variable(self.var_string())
    }

    /// Returns a random atom, which is either a constant or a variable.
    pub fn atom(&mut self, f: &FormulaFactory) -> EncodedFormula {
        let n = self.random.f32() * self.formula_probs.variable;
        if n < self.formula_probs.constant {
            self.constant(f)
        } else {
            self.variable(f)
        }
    }

    /// Returns a random negation with a given maximal depth.
    pub fn not(&mut self, f: &FormulaFactory, max_depth: u32) -> EncodedFormula {
        if max_depth == 0 {
            self.atom(f)
        } else {
            let inner = self.formula(f, max_depth - 1);
            f.not(inner)
        }
    }

    /// Returns a random binary node with the given operator and a given
    /// maximal depth.
    pub fn binary(&mut self, op: BinaryOp, f: &FormulaFactory, max_depth: u32) -> EncodedFormula {
        if max_depth == 0 {
            self.atom(f)
        } else {
            let left = self.formula(f, max_depth - 1);
            let right = self.formula(f, max_depth - 1);
            f.binary(op, left, right)
        }
    }

    /// Returns a random formula with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
    /// # use opbasis::formulas::FormulaFactory;
    /// # let f = FormulaFactory::new();
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let formula = randomizer.formula(&f, 2);
    /// ```
    pub fn formula(&mut self, f: &FormulaFactory, max_depth: u32) -> EncodedFormula {
        if max_depth == 0 {
            self.atom(f)
        } else {
            let n = self.random.f32();
            if n < self.formula_probs.constant {
                self.constant(f)
            } else if n < self.formula_probs.variable {
                self.variable(f)
            } else if n < self.formula_probs.not {
                self.not(f, max_depth)
            } else if n < self.formula_probs.and {
                self.binary(BinaryOp::And, f, max_depth)
            } else if n < self.formula_probs.or {
                self.binary(BinaryOp::Or, f, max_depth)
            } else if n < self.formula_probs.implication {
                self.binary(BinaryOp::Impl, f, max_depth)
            } else if n < self.formula_probs.xor {
                self.binary(BinaryOp::Xor, f, max_depth)
            } else if n < self.formula_probs.equivalence {
                self.binary(BinaryOp::Equiv, f, max_depth)
            } else if n < self.formula_probs.nand {
                self.binary(BinaryOp::Nand, f, max_depth)
            } else {
                self.binary(BinaryOp::Nor, f, max_depth)
            }
        }
    }

    /// Returns a list of `num_formulas` random formulas with a given maximal
    /// depth.
    pub fn formulas(&mut self, f: &FormulaFactory, num_formulas: u32, max_depth: u32) -> Vec<EncodedFormula> {
        (0..num_formulas).map(|_| self.formula(f, max_depth)).collect()
    }
}
