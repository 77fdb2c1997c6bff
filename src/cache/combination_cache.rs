use std::collections::BTreeMap;

use super::canonical_key::canonical_key;
use crate::error::Result;
use crate::skill::Skill;
use crate::storage::{self, KeyValueStore};

pub const CACHE_STORAGE_KEY: &str = "opencraft/cachedcombinations";

/// Canonical key to memoized result, exactly as persisted
pub type CombinationMap = BTreeMap<String, Skill>;

/// Write-through memoization cache for skill combinations.
///
/// The mapping is read from `store` once on `open`. Every `put` and `reset`
/// persists the whole mapping before returning; if that write fails the
/// in-memory mapping is rolled back and the error is returned.
///
/// Entries are never evicted. Concurrent logical requests for the same pair
/// may both miss and both `put`; the last write wins.
#[derive(Debug)]
pub struct CombinationCache<S: KeyValueStore> {
    store: S,
    entries: CombinationMap,
}

impl<S: KeyValueStore> CombinationCache<S> {
    /// Loads the persisted mapping. Absent or malformed data opens empty.
    pub fn open(store: S) -> Result<Self> {
        let entries = storage::load_or_default(&store, CACHE_STORAGE_KEY, CombinationMap::new)?;
        log::debug!("Loaded {} cached combinations", entries.len());
        Ok(CombinationCache { store, entries })
    }

    /// Returns the memoized result for the pair, in either order
    pub fn get(&self, first: &Skill, second: &Skill) -> Option<&Skill> {
        self.entries.get(&canonical_key(&first.title, &second.title))
    }

    pub fn put(&mut self, first: &Skill, second: &Skill, result: Skill) -> Result<()> {
        let key = canonical_key(&first.title, &second.title);
        let previous = self.entries.insert(key.clone(), result);

        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.entries.insert(key, old),
                None => self.entries.remove(&key),
            };
            return Err(e);
        }

        log::debug!("Cached combination {}", key);
        Ok(())
    }

    /// Empties the cache, in memory and on storage
    pub fn reset(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.entries);

        if let Err(e) = self.save() {
            self.entries = previous;
            return Err(e);
        }

        log::debug!("Cleared {} cached combinations", previous.len());
        Ok(())
    }

    pub fn entries(&self) -> &CombinationMap {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> Result<()> {
        storage::save(&self.store, CACHE_STORAGE_KEY, &self.entries)
    }
}

#[cfg(test)]
#[path = "combination_cache_tests.rs"]
mod combination_cache_tests;
