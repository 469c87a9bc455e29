use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Minimal cache interface: lookups count as uses, insertions may evict.
///
/// Instances are meant to be used from one logical thread; wrap them in a
/// mutex externally if they have to be shared.
pub trait Cache<K, V> {
    fn get<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq;

    fn set(&mut self, key: K, value: V);

    fn delete<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    recency: u64,
}

/// Cache with a hard size limit and batch eviction.
///
/// Every read and write stamps the entry with a fresh value of a
/// monotonically increasing counter. When an insertion pushes the size past
/// `max_size`, everything older than the newest `keep_ratio * max_size`
/// counter values is discarded in one sweep. Compared to true LRU this keeps
/// no ordered structure at all; the price is that a purge may retain
/// somewhat fewer entries than `keep_ratio * max_size`.
///
/// A `max_size` of 0 disables caching: `get` always misses and `set` keeps
/// nothing (but still advances the counter).
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    next_recency: u64,
    max_size: usize,
    keep_ratio: f64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new(max_size: usize, keep_ratio: f64) -> BoundedCache<K, V> {
        BoundedCache {
            entries: HashMap::new(),
            next_recency: 0,
            max_size,
            keep_ratio: clamp_ratio(keep_ratio),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Change the capacity. Setting it to 0 drops all entries and resets
    /// the recency counter; any other value takes effect immediately and
    /// may trigger a purge.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        if max_size == 0 {
            self.entries.clear();
            self.next_recency = 0;
        } else {
            self.purge();
        }
    }

    pub fn keep_ratio(&self) -> f64 {
        self.keep_ratio
    }

    pub fn set_keep_ratio(&mut self, keep_ratio: f64) {
        self.keep_ratio = clamp_ratio(keep_ratio);
    }

    fn purge(&mut self) {
        if self.entries.len() <= self.max_size {
            return;
        }
        // next_recency is at least 1 here: the cache holds an entry, and
        // every entry was stamped.
        let newest = self.next_recency - 1;
        let threshold = newest as f64 - self.keep_ratio * self.max_size as f64;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.recency as f64 > threshold);
        debug!("cache purge: {} -> {} entries", before, self.entries.len());
    }

    fn stamp(&mut self) -> u64 {
        let recency = self.next_recency;
        self.next_recency += 1;
        recency
    }
}

impl<K, V> Cache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn get<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let recency = self.next_recency;
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.recency = recency;
                self.next_recency += 1;
                Some(entry.value.clone())
            }
            None => None,
        }
    }

    fn set(&mut self, key: K, value: V) {
        let recency = self.stamp();
        self.entries.insert(key, Entry { value, recency });
        self.purge();
    }

    fn delete<Q: ?Sized>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.entries.remove(key);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    ratio.max(0.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(keys: &[&str], max_size: usize, keep_ratio: f64) -> BoundedCache<String, String> {
        let mut cache = BoundedCache::new(max_size, keep_ratio);
        for key in keys {
            cache.set(key.to_string(), format!("{}-stem", key));
        }
        cache
    }

    #[test]
    fn get_and_set() {
        let mut cache = BoundedCache::new(10, 0.75);
        assert!(cache.is_empty());
        cache.set("running".to_string(), "run".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("running"), Some("run".to_string()));
        assert_eq!(cache.get("jumping"), None);
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let mut cache = BoundedCache::new(10, 0.75);
        cache.set("key".to_string(), "old".to_string());
        cache.set("key".to_string(), "new".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key"), Some("new".to_string()));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut cache = BoundedCache::new(10, 0.75);
        cache.set("key".to_string(), "value".to_string());
        cache.delete("key");
        assert_eq!(cache.get("key"), None);
        cache.delete("key");
        assert!(cache.is_empty());
    }

    #[test]
    fn size_never_exceeds_max() {
        let mut cache = BoundedCache::new(8, 0.75);
        for i in 0..100 {
            cache.set(format!("word{}", i), format!("stem{}", i));
            assert!(cache.len() <= 8);
        }
    }

    #[test]
    fn purge_keeps_newest_cohort() {
        // Capacity 4, keep ratio 0.5: inserting a..e assigns recencies
        // 0..4; the fifth insert purges with threshold 4 - 0.5*4 = 2, so
        // only d (3) and e (4) survive.
        let mut cache = filled(&["a", "b", "c", "d", "e"], 4, 0.5);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), None);
        assert_eq!(cache.get("d"), Some("d-stem".to_string()));
        assert_eq!(cache.get("e"), Some("e-stem".to_string()));
    }

    #[test]
    fn read_refreshes_recency() {
        let mut cache = filled(&["a", "b", "c", "d"], 4, 0.5);
        // "a" is the oldest entry, but reading it makes it the newest.
        assert!(cache.get("a").is_some());
        cache.set("e".to_string(), "e-stem".to_string());
        assert!(cache.get("a").is_some());
        // "b" was never re-read and falls below the threshold.
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn keep_ratio_zero_purges_everything() {
        let cache = filled(&["a", "b", "c"], 2, 0.0);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn keep_ratio_one_still_bounds_size() {
        let mut cache = BoundedCache::new(4, 1.0);
        for i in 0..50 {
            cache.set(format!("word{}", i), "stem".to_string());
            assert!(cache.len() <= 4);
        }
    }

    #[test]
    fn zero_max_size_disables_caching() {
        let mut cache = BoundedCache::new(0, 0.75);
        cache.set("word".to_string(), "stem".to_string());
        assert!(cache.is_empty());
        assert_eq!(cache.get("word"), None);
        // The counter still advances, so later stamps stay unique.
        assert!(cache.next_recency > 0);
    }

    #[test]
    fn shrinking_max_size_purges() {
        let mut cache = filled(&["a", "b", "c", "d", "e", "f"], 10, 0.5);
        assert_eq!(cache.len(), 6);
        cache.set_max_size(4);
        assert!(cache.len() <= 4);
        // Survivors are the newest ones.
        assert!(cache.get("f").is_some());
    }

    #[test]
    fn set_max_size_zero_clears_and_resets() {
        let mut cache = filled(&["a", "b", "c"], 10, 0.75);
        cache.set_max_size(0);
        assert!(cache.is_empty());
        assert_eq!(cache.next_recency, 0);
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn recency_values_are_unique_and_increasing() {
        let mut cache = BoundedCache::new(10, 0.75);
        cache.set("a".to_string(), "1".to_string());
        cache.set("b".to_string(), "2".to_string());
        cache.get("a");
        let recencies: Vec<u64> = cache.entries.values().map(|e| e.recency).collect();
        let mut sorted = recencies.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), recencies.len());
        assert_eq!(cache.next_recency, 3);
    }
}
