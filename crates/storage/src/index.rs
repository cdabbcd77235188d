//! Secondary indices
//!
//! Each index maps a key to the set of event ids carrying it. Keys are kept
//! in a BTreeMap so distinct-value listings come out sorted for free, and id
//! sets are BTreeSets so lookups come out in insertion order.

use spanlog_core::EventId;
use std::collections::{BTreeMap, BTreeSet};

/// Key -> event ids
#[derive(Debug, Clone)]
pub struct SecondaryIndex<K: Ord> {
    entries: BTreeMap<K, BTreeSet<EventId>>,
}

impl<K: Ord + Clone> SecondaryIndex<K> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record that `id` carries `key`
    pub fn insert(&mut self, key: K, id: EventId) {
        self.entries.entry(key).or_default().insert(id);
    }

    /// Forget `id` under `key`, dropping the key once no ids remain
    pub fn remove(&mut self, key: &K, id: EventId) {
        if let Some(ids) = self.entries.get_mut(key) {
            ids.remove(&id);
            if ids.is_empty() {
                self.entries.remove(key);
            }
        }
    }

    /// Ids carrying `key`, ascending
    pub fn get(&self, key: &K) -> impl Iterator<Item = EventId> + '_ {
        self.entries
            .get(key)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    /// Distinct keys, ascending
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    /// Distinct keys from `start` onward, ascending
    pub fn keys_from<'a>(&'a self, start: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.entries.range(start.clone()..).map(|(k, _)| k)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord + Clone> Default for SecondaryIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
