//! Time-bounded content cache.
//!
//! [`ContentCache`] maps a string key to a value that stays valid for a fixed
//! time-to-live. Lookups go through [`ContentCache::get_or_fetch`], which
//! takes the supplier of a fresh value as an explicit closure. The cache
//! itself knows nothing about URLs or networking.
//!
//! # Concurrency
//!
//! Every key owns its own slot lock. The map of slots is only locked long
//! enough to find or create a slot, so a slow fetch for one key never delays
//! lookups of another key. Concurrent misses on the *same* key queue on that
//! key's slot: the first caller fetches, later callers find the fresh value
//! and return it without fetching again.
//!
//! # Examples
//!
//! ```
//! use respath::ContentCache;
//! use std::time::Duration;
//!
//! let cache = ContentCache::new(Duration::from_secs(60));
//! let value: Result<u32, ()> = cache.get_or_fetch("answer", || Ok(42));
//! assert_eq!(value, Ok(42));
//!
//! // Fresh entries are returned without calling the supplier
//! let again: Result<u32, ()> = cache.get_or_fetch("answer", || unreachable!());
//! assert_eq!(again, Ok(42));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::time::{Duration, Instant};

/// A cached value together with the time it was stored.
#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    created: Instant,
}

impl<V> Entry<V> {
    fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created) <= ttl
    }
}

type Slot<V> = Arc<Mutex<Option<Entry<V>>>>;

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// Entries are only ever replaced wholesale after a successful fetch, so a
/// panic inside a supplier leaves the slot in its previous consistent state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A thread-safe key/value cache with time-based invalidation.
///
/// There is no size bound and no LRU policy; an entry is replaced by the
/// next successful fetch once it is older than the time-to-live. Stale
/// entries are never returned. Call [`purge_expired`](Self::purge_expired)
/// to release memory held by stale entries.
#[derive(Debug)]
pub struct ContentCache<V> {
    ttl: Duration,
    slots: Mutex<HashMap<String, Slot<V>>>,
}

impl<V: Clone> ContentCache<V> {
    /// Create an empty cache whose entries stay valid for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The time-to-live applied to every entry.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value for `key`, fetching it if missing or stale.
    ///
    /// `fetch` runs at most once per call and only when there is no fresh
    /// entry. A successful result is stored with the current time before it
    /// is returned. A failed fetch stores nothing, so the next call for the
    /// same key fetches again.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetch` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ContentCache;
    /// use std::time::Duration;
    ///
    /// let cache: ContentCache<String> = ContentCache::new(Duration::from_secs(1));
    /// let failed: Result<String, &str> = cache.get_or_fetch("k", || Err("offline"));
    /// assert_eq!(failed, Err("offline"));
    /// assert!(cache.is_empty());
    /// ```
    pub fn get_or_fetch<E, F>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let slot = self.slot(key);
        let mut entry = lock(&slot);

        if let Some(cached) = entry
            .as_ref()
            .filter(|cached| cached.is_fresh(self.ttl, Instant::now()))
        {
            log::trace!("Cache hit for {key}");
            return Ok(cached.value.clone());
        }

        log::trace!("Cache miss for {key}");
        match fetch() {
            Ok(value) => {
                *entry = Some(Entry {
                    value: value.clone(),
                    created: Instant::now(),
                });
                Ok(value)
            }
            Err(e) => {
                *entry = None;
                drop(entry);
                self.release_empty_slot(key, &slot);
                Err(e)
            }
        }
    }

    /// Return the fresh cached value for `key` without fetching.
    ///
    /// Waits for an in-flight fetch of the same key to finish.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        let slot = lock(&self.slots).get(key).map(Arc::clone)?;
        let entry = lock(&slot);
        entry
            .as_ref()
            .filter(|cached| cached.is_fresh(self.ttl, Instant::now()))
            .map(|cached| cached.value.clone())
    }

    /// Forget the entry for `key`. Returns `true` if a value was cached.
    pub fn invalidate(&self, key: &str) -> bool {
        let Some(slot) = lock(&self.slots).remove(key) else {
            return false;
        };
        let had_value = lock(&slot).is_some();
        had_value
    }

    /// Forget every entry.
    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    /// Number of keys currently holding a value, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        let slots: Vec<Slot<V>> = lock(&self.slots).values().map(Arc::clone).collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    /// Check whether no key holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop stale and empty entries, returning how many were removed.
    ///
    /// Slots with a fetch in flight are left alone.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let keep = |entry: &Option<Entry<V>>| entry.as_ref().is_some_and(|e| e.is_fresh(ttl, now));

        let mut slots = lock(&self.slots);
        let before = slots.len();
        slots.retain(|_, slot| match slot.try_lock() {
            Ok(entry) => keep(&entry),
            Err(TryLockError::WouldBlock) => true,
            Err(TryLockError::Poisoned(poisoned)) => keep(&poisoned.into_inner()),
        });
        let removed = before - slots.len();
        if removed > 0 {
            log::debug!("Purged {removed} expired cache entries");
        }
        removed
    }

    fn slot(&self, key: &str) -> Slot<V> {
        let mut slots = lock(&self.slots);
        Arc::clone(slots.entry(key.to_string()).or_default())
    }

    /// Remove the emptied `slot` from the map unless another caller holds it.
    ///
    /// Slot handles are only cloned under the map lock, so a strong count of
    /// two (the map and `slot`) means nobody is waiting on it.
    fn release_empty_slot(&self, key: &str, slot: &Slot<V>) {
        let mut slots = lock(&self.slots);
        let unshared = slots
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
        if unshared {
            slots.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    const SHORT_TTL: Duration = Duration::from_millis(50);

    /// Supplier returning 1, 2, 3, ... on successive calls.
    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Result<usize, String>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let fetch = move || Ok(counted.fetch_add(1, Ordering::SeqCst) + 1);
        (calls, fetch)
    }

    #[test]
    fn test_fresh_entry_reused_within_ttl() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let (calls, fetch) = counter();

        let first = cache.get_or_fetch("key", &fetch).unwrap();
        let second = cache.get_or_fetch("key", &fetch).unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stale_entry_refetched_after_ttl() {
        let cache = ContentCache::new(SHORT_TTL);
        let (calls, fetch) = counter();

        let first = cache.get_or_fetch("key", &fetch).unwrap();
        let second = cache.get_or_fetch("key", &fetch).unwrap();
        assert_eq!(first, second);

        thread::sleep(SHORT_TTL * 3);
        let third = cache.get_or_fetch("key", &fetch).unwrap();

        assert_ne!(third, first);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        // Replaced, not accumulated
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let cache: ContentCache<Vec<u8>> = ContentCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);
        let failing = || -> Result<Vec<u8>, String> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("unreachable host".to_string())
        };

        assert!(cache.get_or_fetch("url", failing).is_err());
        assert!(cache.get_or_fetch("url", failing).is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.get("url"), None);
    }

    #[test]
    fn test_failed_fetches_leave_no_slots_behind() {
        let cache: ContentCache<u32> = ContentCache::new(Duration::from_secs(60));
        for i in 0..100 {
            let key = format!("http://unreachable/{i}.bob");
            assert!(cache.get_or_fetch(&key, || Err::<u32, _>(())).is_err());
        }
        assert_eq!(lock(&cache.slots).len(), 0);

        cache.get_or_fetch("kept", || Ok::<_, ()>(1)).unwrap();
        assert!(cache.get_or_fetch("gone", || Err::<u32, _>(())).is_err());
        assert_eq!(lock(&cache.slots).len(), 1);
        assert_eq!(cache.purge_expired(), 0);
    }

    #[test]
    fn test_stale_entry_dropped_on_failed_refetch() {
        let cache = ContentCache::new(SHORT_TTL);
        cache.get_or_fetch("key", || Ok::<_, ()>(1)).unwrap();
        thread::sleep(SHORT_TTL * 3);

        assert!(cache.get_or_fetch("key", || Err::<u32, _>(())).is_err());
        assert_eq!(cache.len(), 0);
        assert_eq!(lock(&cache.slots).len(), 0);
    }

    #[test]
    fn test_failure_after_success_keeps_nothing_stale_visible() {
        let cache = ContentCache::new(SHORT_TTL);
        cache
            .get_or_fetch("key", || Ok::<_, String>("old".to_string()))
            .unwrap();
        thread::sleep(SHORT_TTL * 3);

        let result = cache.get_or_fetch("key", || Err::<String, _>("down".to_string()));
        assert_eq!(result, Err("down".to_string()));
        assert_eq!(cache.get("key"), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = ContentCache::new(Duration::from_secs(60));
        let a = cache.get_or_fetch("a", || Ok::<_, ()>(1)).unwrap();
        let b = cache.get_or_fetch("b", || Ok::<_, ()>(2)).unwrap();

        assert_eq!((a, b), (1, 2));
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = ContentCache::new(Duration::from_secs(60));
        cache.get_or_fetch("a", || Ok::<_, ()>(1)).unwrap();
        cache.get_or_fetch("b", || Ok::<_, ()>(2)).unwrap();

        assert!(cache.invalidate("a"));
        assert!(!cache.invalidate("a"));
        assert_eq!(cache.get("a"), None);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let cache = ContentCache::new(SHORT_TTL);
        cache.get_or_fetch("old", || Ok::<_, ()>(1)).unwrap();
        thread::sleep(SHORT_TTL * 3);
        cache.get_or_fetch("new", || Ok::<_, ()>(2)).unwrap();

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("new"), Some(2));
    }

    #[test]
    fn test_ttl_accessor() {
        let cache: ContentCache<u8> = ContentCache::new(Duration::from_secs(7));
        assert_eq!(cache.ttl(), Duration::from_secs(7));
    }

    #[test]
    fn test_concurrent_misses_on_same_key_fetch_once() {
        let cache = Arc::new(ContentCache::new(Duration::from_secs(60)));
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_fetch("shared", || {
                            thread::sleep(Duration::from_millis(20));
                            Ok::<_, ()>(calls.fetch_add(1, Ordering::SeqCst))
                        })
                        .unwrap()
                })
            })
            .collect();

        let values: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(values.iter().all(|v| *v == values[0]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slow_fetch_does_not_block_other_keys() {
        let cache = Arc::new(ContentCache::new(Duration::from_secs(60)));
        let started = Arc::new(Barrier::new(2));

        let slow = {
            let cache = Arc::clone(&cache);
            let started = Arc::clone(&started);
            thread::spawn(move || {
                cache.get_or_fetch("slow", || {
                    started.wait();
                    thread::sleep(Duration::from_millis(500));
                    Ok::<_, ()>(1)
                })
            })
        };

        started.wait();
        let begin = Instant::now();
        let fast = cache.get_or_fetch("fast", || Ok::<_, ()>(2)).unwrap();
        assert_eq!(fast, 2);
        assert!(begin.elapsed() < Duration::from_millis(400));

        assert_eq!(slow.join().unwrap(), Ok(1));
    }

    #[test]
    fn test_panicking_fetch_does_not_poison_cache() {
        let cache = Arc::new(ContentCache::new(Duration::from_secs(60)));
        let worker = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let _ = cache.get_or_fetch("key", || -> Result<u32, ()> { panic!("supplier failed") });
            })
        };
        assert!(worker.join().is_err());

        assert_eq!(cache.get_or_fetch("key", || Ok::<_, ()>(5)), Ok(5));
    }
}
