//! Per-entity critical sections.
//!
//! Mutations to a single tournament, game, or player must never interleave,
//! while unrelated entities proceed in parallel. `EntityLocks` keeps one
//! async mutex per entity id and hands out owned guards that can be held
//! across await points.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Registry of per-key async mutexes.
///
/// Keys are created on first use and kept for the registry's lifetime; the
/// guard returned by [`acquire`](Self::acquire) is the entity's exclusive
/// section.
pub struct EntityLocks<K> {
    inner: RwLock<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K> EntityLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Acquire the exclusive section for `key`, waiting if another task
    /// holds it.
    pub async fn acquire(&self, key: K) -> OwnedMutexGuard<()> {
        let handle = {
            let locks = self.inner.read().await;
            locks.get(&key).cloned()
        };

        let handle = match handle {
            Some(handle) => handle,
            None => {
                let mut locks = self.inner.write().await;
                locks
                    .entry(key)
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .clone()
            }
        };

        handle.lock_owned().await
    }

    /// Acquire several keys at once in a canonical order.
    ///
    /// Keys are sorted and deduplicated before locking, so two tasks locking
    /// overlapping sets cannot deadlock.
    pub async fn acquire_many(&self, mut keys: Vec<K>) -> Vec<OwnedMutexGuard<()>>
    where
        K: Ord,
    {
        keys.sort();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        for key in keys {
            guards.push(self.acquire(key).await);
        }
        guards
    }
}

impl<K> Default for EntityLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::task::JoinSet;

    #[tokio::test(flavor = "multi_thread")]
    async fn exclusive_section_serializes_same_key() {
        let locks = Arc::new(EntityLocks::new());
        let counter = Arc::new(AtomicU64::new(0));
        let max_seen = Arc::new(AtomicU64::new(0));

        let mut tasks = JoinSet::new();
        for _ in 0..32 {
            let locks = locks.clone();
            let counter = counter.clone();
            let max_seen = max_seen.clone();
            tasks.spawn(async move {
                let _guard = locks.acquire(7u64).await;
                let inside = counter.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(inside, Ordering::SeqCst);
                tokio::task::yield_now().await;
                counter.fetch_sub(1, Ordering::SeqCst);
            });
        }
        while tasks.join_next().await.is_some() {}

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn overlapping_sets_do_not_deadlock() {
        let locks = Arc::new(EntityLocks::new());

        let mut tasks = JoinSet::new();
        for i in 0..16u64 {
            let locks = locks.clone();
            // Alternate lock order in the input; acquire_many canonicalizes it.
            let keys = if i % 2 == 0 { vec![1u64, 2] } else { vec![2u64, 1] };
            tasks.spawn(async move {
                let _guards = locks.acquire_many(keys).await;
                tokio::task::yield_now().await;
            });
        }
        while tasks.join_next().await.is_some() {}
    }
}
