//! Memoized comparisons keyed on the pair of document snapshots.
//!
//! Callers that recompare on every edit (or render many scenes at once) can
//! share one [`ComparisonCache`] across threads instead of re-running the
//! quadratic diffs for text pairs they have already seen.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use scn_parse::{parse_scenes, ContentHasher};
use scn_types::SceneHash;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::{compare_scenes_with, CompareConfig, SceneComparison};
use crate::error::DiffResult;

/// Sizing for [`ComparisonCache`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of text pairs held. When full, the cache is cleared
    /// before the next insert. Zero disables caching.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Hit and miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

type PairKey = (SceneHash, SceneHash);

/// Thread-safe memo of `(old_text, new_text) -> comparisons`.
///
/// Keys are domain-separated BLAKE3 digests of the raw texts, so the cache
/// never holds the documents themselves.
pub struct ComparisonCache {
    config: CacheConfig,
    compare: CompareConfig,
    entries: RwLock<HashMap<PairKey, Arc<Vec<SceneComparison>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ComparisonCache {
    pub fn new(config: CacheConfig, compare: CompareConfig) -> Self {
        Self {
            config,
            compare,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Comparisons for the text pair, computed at most once per pair while
    /// it stays cached.
    pub fn compare(&self, old_text: &str, new_text: &str) -> DiffResult<Arc<Vec<SceneComparison>>> {
        let key = (
            ContentHasher::DOCUMENT.hash(old_text.as_bytes()),
            ContentHasher::DOCUMENT.hash(new_text.as_bytes()),
        );

        if let Some(hit) = self.entries.read().expect("lock poisoned").get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(old = %key.0.short_hex(), new = %key.1.short_hex(), "comparison cache hit");
            return Ok(Arc::clone(hit));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(compare_scenes_with(
            &parse_scenes(old_text),
            &parse_scenes(new_text),
            &self.compare,
        )?);

        if self.config.capacity > 0 {
            let mut entries = self.entries.write().expect("lock poisoned");
            if entries.len() >= self.config.capacity && !entries.contains_key(&key) {
                debug!(evicted = entries.len(), "comparison cache full; clearing");
                entries.clear();
            }
            entries.insert(key, Arc::clone(&result));
        }

        Ok(result)
    }

    /// Number of cached text pairs.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Drop every cached pair. Counters are kept.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ComparisonCache {
    fn default() -> Self {
        Self::new(CacheConfig::default(), CompareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{compare_texts, DuplicatePolicy};
    use crate::error::DiffError;

    const OLD: &str = "#1. A\nalpha\n#2. B\nbeta";
    const NEW: &str = "#1. A\nalpha\n#3. B\nbeta";

    #[test]
    fn second_lookup_is_a_hit_and_shares_the_result() {
        let cache = ComparisonCache::default();
        let first = cache.compare(OLD, NEW).unwrap();
        let second = cache.compare(OLD, NEW).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, compare_texts(OLD, NEW));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn pair_order_matters() {
        let cache = ComparisonCache::default();
        cache.compare(OLD, NEW).unwrap();
        cache.compare(NEW, OLD).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn full_cache_is_cleared_before_insert() {
        let cache = ComparisonCache::new(CacheConfig { capacity: 2 }, CompareConfig::default());
        cache.compare("#1. A\na", "#1. A\nb").unwrap();
        cache.compare("#1. A\na", "#1. A\nc").unwrap();
        assert_eq!(cache.len(), 2);
        cache.compare("#1. A\na", "#1. A\nd").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_never_stores() {
        let cache = ComparisonCache::new(CacheConfig { capacity: 0 }, CompareConfig::default());
        cache.compare(OLD, NEW).unwrap();
        cache.compare(OLD, NEW).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
    }

    #[test]
    fn errors_are_not_cached() {
        let strict = CompareConfig {
            duplicates: DuplicatePolicy::Reject,
            ..Default::default()
        };
        let cache = ComparisonCache::new(CacheConfig::default(), strict);
        let dup = "#1. A\nx\n#1. B\ny";
        assert!(matches!(
            cache.compare(dup, NEW),
            Err(DiffError::DuplicateSceneNumber { .. })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_keeps_counters() {
        let cache = ComparisonCache::default();
        cache.compare(OLD, NEW).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(ComparisonCache::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.compare(OLD, NEW).unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(cache.len(), 1);
        let stats = cache.stats();
        assert_eq!(stats.hits + stats.misses, 4);
    }
}
