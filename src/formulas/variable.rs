use crate::formulas::{EncodedFormula, FormulaFactory, FormulaType};

use super::formula::ToFormula;
use super::formula_cache::formula_encoding::FormulaEncoding;

/// A Boolean variable.
///
/// Like [`EncodedFormula`], a `Variable` is only a reference into the
/// [`FormulaFactory`] it was created in; its name can be recovered with
/// [`Variable::name`].
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Variable(pub(super) FormulaEncoding);

impl Variable {
    /// Constructs a variable based on an index in a [`FormulaFactory`].
    ///
    /// Note that this variable will not be registered in any `FormulaFactory`.
    /// So if you pass an invalid index and use the yielded variable, it will
    /// end in undefined behavior.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::formulas::{FormulaFactory, Variable};
    /// let f = FormulaFactory::new();
    ///
    /// let var1 = f.var("A");
    /// let var2 = Variable::from_index(0);
    ///
    /// assert_eq!(var1, var2);
    /// ```
    pub fn from_index(index: u64) -> Self {
        Self(FormulaEncoding::encode(index, FormulaType::Var))
    }

    /// Returns the name of the variable.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use opbasis::formulas::FormulaFactory;
    /// let f = FormulaFactory::new();
    ///
    /// let var = f.var("A");
    ///
    /// assert_eq!(var.name(&f), "A");
    /// ```
    pub fn name(&self, f: &FormulaFactory) -> String {
        f.var_name(self.0)
    }

    pub(super) const fn encoding(self) -> FormulaEncoding {
        self.0
    }
}

impl From<Variable> for EncodedFormula {
    fn from(var: Variable) -> Self {
        Self { encoding: var.0 }
    }
}

impl ToFormula for Variable {
    fn to_formula(&self, _: &FormulaFactory) -> EncodedFormula {
        (*self).into()
    }
}

impl TryFrom<FormulaEncoding> for Variable {
    type Error = String;

    fn try_from(enc: FormulaEncoding) -> Result<Self, Self::Error> {
        match enc.formula_type() {
            FormulaType::Var => Ok(Self(enc)),
            ty => Err(format!("Cannot convert {ty:?} to a variable!")),
        }
    }
}
