//! Combination cache
//!
//! Memoizes the result of combining two skills so the same pair never has to
//! be generated twice. Pairs are unordered: combining A with B and B with A
//! resolve to the same entry.

mod canonical_key;
mod combination_cache;

pub use canonical_key::{KEY_SEPARATOR, canonical_key};
pub use combination_cache::{CACHE_STORAGE_KEY, CombinationCache, CombinationMap};
