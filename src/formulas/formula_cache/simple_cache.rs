use std::fmt::Debug;
use std::hash::Hash;
use std::sync::RwLock;

use dashmap::DashMap;

use crate::formulas::formula_cache::CACHE_INITIAL_CAPACITY;
use crate::formulas::FormulaType;

use super::formula_encoding::FormulaEncoding;

/// An insert-only intern cache. Elements are stored once and addressed by
/// the index packed into their [`FormulaEncoding`].
pub struct SimpleCache<T: Hash + Eq + Clone + Debug> {
    vec: RwLock<Vec<T>>,
    reverse_map: DashMap<T, FormulaEncoding>,
}

impl<T: Hash + Eq + Clone + Debug> SimpleCache<T> {
    pub fn new() -> Self {
        Self { vec: RwLock::new(Vec::new()), reverse_map: DashMap::with_capacity(CACHE_INITIAL_CAPACITY) }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn get(&self, index: FormulaEncoding) -> T {
        self.vec.read().unwrap()[index.index() as usize].clone()
    }

    pub fn get_or_insert(&self, element: T, ty: FormulaType) -> FormulaEncoding {
        // first a fast check whether the element is already there.
        if let Some(v) = self.reverse_map.get(&element) {
            return *v;
        }

        // If we need to add the element, we have to check again if the element
        // is there, but in a more expensive thread-safe way.
        *self.reverse_map.entry(element.clone()).or_insert_with(|| {
            let mut vec = self.vec.write().unwrap();
            vec.push(element);
            FormulaEncoding::encode((vec.len() - 1) as u64, ty)
        })
    }

    pub fn lookup(&self, element: &T) -> Option<FormulaEncoding> {
        self.reverse_map.get(element).map(|v| *v)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.vec.read().unwrap().len(), self.reverse_map.len());
        self.reverse_map.len()
    }
}
