//! Embedded grid node
//!
//! A GridNode owns the named key-value mappings of one instance. Each named
//! cache is a typed [`DashMap<K, V>`] stored type-erased; the dashmap entry
//! API makes first-time creation atomic, so concurrent get-or-create calls
//! for the same name yield exactly one underlying mapping.

use crate::error::{RegistryError, Result};
use dashmap::DashMap;
use std::any::Any;
use std::hash::Hash;
use std::sync::Arc;

type ErasedCache = Arc<dyn Any + Send + Sync>;

/// The named key-value mappings hosted by one instance.
#[derive(Default)]
pub struct GridNode {
    caches: DashMap<String, ErasedCache>,
}

impl GridNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or atomically create the mapping named `name`.
    ///
    /// Re-requesting an existing name with different `K`/`V` parameters
    /// fails with [`RegistryError::CacheTypeMismatch`] rather than silently
    /// forking the mapping.
    pub fn get_or_create_cache<K, V>(&self, name: &str) -> Result<Arc<DashMap<K, V>>>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let slot = self
            .caches
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(cache = name, "creating cache");
                Arc::new(DashMap::<K, V>::new()) as ErasedCache
            })
            .clone();

        slot.downcast::<DashMap<K, V>>()
            .map_err(|_| RegistryError::CacheTypeMismatch(name.to_string()))
    }

    /// Number of caches created on this node.
    pub fn cache_count(&self) -> usize {
        self.caches.len()
    }
}

impl std::fmt::Debug for GridNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridNode")
            .field("caches", &self.caches.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let node = GridNode::new();
        let first = node.get_or_create_cache::<i64, String>("orders").unwrap();
        let second = node.get_or_create_cache::<i64, String>("orders").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(node.cache_count(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_caches() {
        let node = GridNode::new();
        node.get_or_create_cache::<i64, String>("orders").unwrap();
        node.get_or_create_cache::<i64, String>("payments").unwrap();
        assert_eq!(node.cache_count(), 2);
    }

    #[test]
    fn type_mismatch_is_an_error() {
        let node = GridNode::new();
        node.get_or_create_cache::<i64, String>("orders").unwrap();

        let err = node.get_or_create_cache::<String, String>("orders");
        assert!(matches!(err, Err(RegistryError::CacheTypeMismatch(name)) if name == "orders"));
        assert_eq!(node.cache_count(), 1);
    }

    #[test]
    fn concurrent_creation_yields_one_mapping() {
        let node = Arc::new(GridNode::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let node = node.clone();
                std::thread::spawn(move || {
                    node.get_or_create_cache::<i64, String>("orders").unwrap()
                })
            })
            .collect();

        let caches: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(caches.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(node.cache_count(), 1);
    }
}
