//! Bounded, time-expiring key/value cache.
//!
//! Entries expire a fixed time after insertion. When an insert pushes the
//! cache past capacity, expired entries are purged first and then the least
//! recently used entry is evicted. Timestamps come from `tokio::time`, so
//! expiry follows a paused test clock.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
    /// Recency stamp; larger is more recent
    last_used: u64,
}

struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys ordered by recency stamp, oldest first
    recency: BTreeMap<u64, String>,
    clock: u64,
}

impl<V> CacheState<V> {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn insert(&mut self, key: String, value: V) {
        let stamp = self.tick();
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
            last_used: stamp,
        };
        self.recency.insert(stamp, key.clone());
        if let Some(replaced) = self.entries.insert(key, entry) {
            self.recency.remove(&replaced.last_used);
        }
    }

    fn touch(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let stamp = self.tick();
        let entry = self.entries.get_mut(key)?;
        let previous = std::mem::replace(&mut entry.last_used, stamp);
        if let Some(recent) = self.recency.remove(&previous) {
            self.recency.insert(stamp, recent);
        }
        self.entries.get(key)
    }

    fn remove(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.last_used);
        Some(entry)
    }

    fn purge_expired(&mut self, ttl: Duration) {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.inserted_at.elapsed() >= ttl)
            .map(|(key, _)| key.clone())
            .collect();
        for key in expired {
            self.remove(&key);
        }
    }

    fn evict_least_recently_used(&mut self) -> Option<String> {
        let (_, key) = self.recency.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }
}

/// Thread-safe LRU cache with a fixed time-to-live per entry
pub struct TtlCache<V> {
    name: &'static str,
    capacity: usize,
    ttl: Duration,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(name: &'static str, capacity: usize, ttl: Duration) -> Self {
        Self {
            name,
            capacity: capacity.max(1),
            ttl,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                recency: BTreeMap::new(),
                clock: 0,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a live entry, marking it as most recently used
    pub fn get(&self, key: &str) -> Option<V> {
        let mut state = self.lock();
        if !self.is_live(&mut state, key) {
            return None;
        }

        state.touch(key).map(|entry| entry.value.clone())
    }

    /// Check for a live entry without touching its recency
    pub fn has(&self, key: &str) -> bool {
        let mut state = self.lock();
        self.is_live(&mut state, key)
    }

    /// Drops the entry if it has expired
    fn is_live(&self, state: &mut CacheState<V>, key: &str) -> bool {
        let Some(fresh) = state
            .entries
            .get(key)
            .map(|entry| entry.inserted_at.elapsed() < self.ttl)
        else {
            return false;
        };

        if !fresh {
            state.remove(key);
            log::trace!("{} cache entry {} expired", self.name, key);
        }
        fresh
    }

    /// Insert or replace an entry; a replaced entry gets a fresh TTL
    pub fn set(&self, key: impl Into<String>, value: V) {
        let mut state = self.lock();
        state.insert(key.into(), value);

        if state.entries.len() > self.capacity {
            state.purge_expired(self.ttl);
        }
        while state.entries.len() > self.capacity {
            match state.evict_least_recently_used() {
                Some(evicted) => log::trace!("{} cache evicted {}", self.name, evicted),
                None => break,
            }
        }
    }

    /// Remove an entry, returning whether a live one was present
    pub fn delete(&self, key: &str) -> bool {
        let mut state = self.lock();
        state
            .remove(key)
            .is_some_and(|entry| entry.inserted_at.elapsed() < self.ttl)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let mut state = self.lock();
        state.purge_expired(self.ttl);
        state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}
