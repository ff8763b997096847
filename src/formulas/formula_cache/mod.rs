pub mod formula_encoding;
pub mod simple_cache;
pub mod var_cache;

const CACHE_INITIAL_CAPACITY: usize = 10;
