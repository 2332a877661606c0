//! Cache handle
//!
//! A CacheHandle is a wrapper over a named key-value mapping hosted by an
//! instance. Resolving the same (instance, name) pair again returns a new
//! wrapper sharing the same underlying mapping, so writes through one handle
//! are visible through every other.

use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Handle to a named key-value mapping.
pub struct CacheHandle<K, V>
where
    K: Eq + Hash,
{
    name: String,
    entries: Arc<DashMap<K, V>>,
}

impl<K, V> Clone for CacheHandle<K, V>
where
    K: Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> CacheHandle<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new(name: impl Into<String>, entries: Arc<DashMap<K, V>>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Name of the underlying mapping.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Insert or replace, returning the previous value if any.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Remove, returning the removed value if any.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry from the underlying mapping.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<K, V> std::fmt::Debug for CacheHandle<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheHandle")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .finish()
    }
}
