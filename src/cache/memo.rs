//! Single-flight memo bound to one loader

use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use moka::sync::Cache;
use tracing::debug;

use crate::cache::id::CacheId;
use crate::error::RegistryError;

/// Computes the value of a missing key; `C` is the context the loader runs in
pub type Loader<C, K, V> = fn(&C, &K) -> Result<V, RegistryError>;

/// Type-erased view of a memo, used to clear caches by id
pub trait Clearable: Send + Sync {
    fn id(&self) -> CacheId;

    fn clear(&self);
}

/// Lazily populated key/value memo
///
/// A miss runs the loader on the calling thread. Concurrent misses for the
/// same key wait for that single load and share its result. A failed load is
/// handed to every waiter and never stored, so the next call retries.
pub struct Memo<C, K, V> {
    id: CacheId,
    loader: Loader<C, K, V>,
    // Replaced wholesale on clear so loads still in flight land in the
    // discarded generation
    entries: RwLock<Cache<K, V>>,
}

impl<C, K, V> Memo<C, K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(id: CacheId, loader: Loader<C, K, V>) -> Self {
        Self {
            id,
            loader,
            entries: RwLock::new(Self::new_entries(id)),
        }
    }

    fn new_entries(id: CacheId) -> Cache<K, V> {
        Cache::builder().name(id.as_str()).build()
    }

    /// Current generation; cloning a moka cache only bumps a reference count
    fn entries(&self) -> Cache<K, V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, context: &C, key: &K) -> Result<V, RegistryError> {
        self.entries()
            .try_get_with_by_ref(key, || {
                debug!("{} cache miss, loading", self.id);
                (self.loader)(context, key)
            })
            .map_err(Arc::unwrap_or_clone)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries().contains_key(key)
    }
}

impl<C, K, V> Clearable for Memo<C, K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn id(&self) -> CacheId {
        self.id
    }

    fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries = Self::new_entries(self.id);
        debug!("{} cache cleared", self.id);
    }
}
