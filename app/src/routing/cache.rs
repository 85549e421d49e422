//! Loader result cache with staleness windows.
//!
//! Entries younger than the stale time are served without calling the
//! loader. [`LoaderCache::invalidate`] clears everything and bumps a
//! generation counter; a load that started before the bump still answers
//! its own request but is not stored.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::debug;

struct Entry<V> {
    value: V,
    loaded_at: DateTime<Utc>,
}

struct CacheState<K, V> {
    generation: u64,
    entries: HashMap<K, Entry<V>>,
}

/// Keyed cache for one route's loader.
pub struct LoaderCache<K, V> {
    name: &'static str,
    stale_time: TimeDelta,
    clock: Arc<dyn Clock>,
    state: Mutex<CacheState<K, V>>,
}

impl<K, V> LoaderCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Cache whose entries stay fresh for `stale_time`. Zero disables
    /// caching.
    pub fn new(name: &'static str, stale_time: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            stale_time: TimeDelta::from_std(stale_time).unwrap_or(TimeDelta::MAX),
            clock,
            state: Mutex::new(CacheState {
                generation: 0,
                entries: HashMap::new(),
            }),
        }
    }

    // A panic mid-update leaves at worst a stale entry; keep serving.
    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh(&self, key: &K) -> Result<V, u64> {
        let state = self.lock();
        let now = self.clock.utc();
        match state.entries.get(key) {
            Some(entry) if now - entry.loaded_at < self.stale_time => Ok(entry.value.clone()),
            _ => Err(state.generation),
        }
    }

    /// Serve `key` from cache while fresh, otherwise run `load`.
    ///
    /// Failed loads are never cached.
    pub async fn get_or_load<E, F, Fut>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let generation = match self.fresh(&key) {
            Ok(value) => {
                debug!(cache = self.name, "serving fresh loader data");
                return Ok(value);
            }
            Err(generation) => generation,
        };

        let value = load().await?;

        if self.stale_time > TimeDelta::zero() {
            let mut state = self.lock();
            if state.generation == generation {
                let loaded_at = self.clock.utc();
                state.entries.insert(
                    key,
                    Entry {
                        value: value.clone(),
                        loaded_at,
                    },
                );
            } else {
                debug!(cache = self.name, "discarding superseded load");
            }
        }
        Ok(value)
    }

    /// Drop every entry and supersede loads in flight.
    pub fn invalidate(&self) {
        let mut state = self.lock();
        state.generation = state.generation.wrapping_add(1);
        state.entries.clear();
    }

    /// Current generation; bumps on every invalidation.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}
