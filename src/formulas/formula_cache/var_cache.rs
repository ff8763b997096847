use std::borrow::Cow;
use std::sync::RwLock;

use dashmap::DashMap;

use crate::formulas::formula_cache::CACHE_INITIAL_CAPACITY;
use crate::formulas::FormulaType;

use super::formula_encoding::FormulaEncoding;

/// Intern cache for variable names.
pub struct VariableCache {
    vec: RwLock<Vec<String>>,
    reverse_map: DashMap<String, FormulaEncoding>,
}

impl VariableCache {
    pub fn new() -> Self {
        Self { vec: RwLock::new(Vec::new()), reverse_map: DashMap::with_capacity(CACHE_INITIAL_CAPACITY) }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, index: FormulaEncoding) -> String {
        self.vec.read().unwrap()[index.index() as usize].clone()
    }

    pub fn get_or_insert(&self, element: Cow<'_, str>) -> FormulaEncoding {
        // first a fast check whether the element is already there.
        if let Some(v) = self.reverse_map.get(element.as_ref()) {
            return *v;
        }

        // If we need to add the element, we have to check again if the element
        // is there, but in a more expensive thread-safe way.
        let name = element.into_owned();
        *self.reverse_map.entry(name.clone()).or_insert_with(|| {
            let mut vec = self.vec.write().unwrap();
            vec.push(name);
            FormulaEncoding::encode((vec.len() - 1) as u64, FormulaType::Var)
        })
    }

    pub fn lookup(&self, element: &str) -> Option<FormulaEncoding> {
        self.reverse_map.get(element).map(|v| *v)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.vec.read().unwrap().len(), self.reverse_map.len());
        self.reverse_map.len()
    }
}
