//! In-memory embedding cache using moka.
//!
//! TinyLFU admission policy, size-aware eviction, idle TTL.
//! Keys are blake3 hashes of the encoded text.

use std::time::Duration;

use moka::sync::Cache;

/// Cache of single-text encodes.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a new cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();

        Self { cache }
    }

    /// Cache key for a text.
    pub fn key_for(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = EmbeddingCache::new(100);
        let key = EmbeddingCache::key_for("credit score");
        cache.insert(key.clone(), vec![0.6, 0.8]);
        assert_eq!(cache.get(&key), Some(vec![0.6, 0.8]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(100);
        assert_eq!(cache.get(&EmbeddingCache::key_for("absent")), None);
    }

    #[test]
    fn keys_differ_per_text() {
        assert_ne!(
            EmbeddingCache::key_for("bureau score"),
            EmbeddingCache::key_for("bureau  score")
        );
    }

    #[test]
    fn clear_empties_cache() {
        let cache = EmbeddingCache::new(100);
        cache.insert("a".to_string(), vec![1.0]);
        cache.insert("b".to_string(), vec![1.0]);
        cache.clear();
        // moka may not immediately reflect invalidation in entry_count,
        // but get should return None.
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
