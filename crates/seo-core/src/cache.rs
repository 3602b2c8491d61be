//! Suggestion Cache
//!
//! Process-local TTL map from input text to a previously computed
//! suggestion. Entries are keyed by the exact input text (case-sensitive,
//! unnormalized). Stale entries are never proactively evicted; they are
//! ignored on read and overwritten on the next write for the same key.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::suggestion::Suggestion;

/// How long a cached suggestion stays fresh
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(60 * 60);

/// A cached suggestion with its creation time
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub suggestion: Suggestion,
    pub created_at: Instant,
}

/// Unbounded in-memory suggestion cache.
///
/// Owned by whoever constructs it (the generator, in production) rather
/// than living in module-global state, so tests get isolated instances.
#[derive(Debug)]
pub struct SuggestionCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionCache {
    /// Create a cache with the standard one-hour freshness window
    pub fn new() -> Self {
        Self::with_ttl(FRESHNESS_WINDOW)
    }

    /// Create a cache with a custom freshness window
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Return a clone of the cached suggestion if the entry is still fresh
    pub fn get(&self, text: &str) -> Option<Suggestion> {
        self.entries.get(text).and_then(|entry| {
            if entry.created_at.elapsed() < self.ttl {
                Some(entry.suggestion.clone())
            } else {
                None
            }
        })
    }

    /// Store a suggestion, unconditionally overwriting any prior entry
    pub fn insert(&mut self, text: &str, suggestion: Suggestion) {
        self.entries.insert(
            text.to_string(),
            CacheEntry {
                suggestion,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of entries, fresh or stale
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str) -> Suggestion {
        Suggestion::from_model_output(text, "Use more keywords")
    }

    #[tokio::test]
    async fn test_fresh_entry_is_returned() {
        let mut cache = SuggestionCache::new();
        cache.insert("hello", sample("hello"));

        assert_eq!(cache.get("hello"), Some(sample("hello")));
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let mut cache = SuggestionCache::new();
        cache.insert("Hello", sample("Hello"));

        assert!(cache.get("hello").is_none());
        assert!(cache.get("Hello").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_is_ignored_not_evicted() {
        let mut cache = SuggestionCache::new();
        cache.insert("hello", sample("hello"));

        tokio::time::advance(FRESHNESS_WINDOW + Duration::from_secs(1)).await;

        assert!(cache.get("hello").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_refreshes_timestamp() {
        let mut cache = SuggestionCache::new();
        cache.insert("hello", sample("hello"));

        tokio::time::advance(FRESHNESS_WINDOW + Duration::from_secs(1)).await;
        cache.insert("hello", sample("hello"));

        assert!(cache.get("hello").is_some());
        assert_eq!(cache.len(), 1);
    }
}
