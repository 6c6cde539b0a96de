// ABOUTME: Concurrent memo of image search outcomes keyed by normalized query text
// ABOUTME: Stores found URLs and explicit not-found markers; first write wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::utils::text::normalize_query;

/// Outcome of one image search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "url", rename_all = "snake_case")]
pub enum CachedImage {
    /// The provider returned a usable image
    Found(String),
    /// The provider returned nothing or failed; do not ask again
    NotFound,
}

impl CachedImage {
    /// Build from an optional URL, treating blank URLs as not found
    #[must_use]
    pub fn from_option(url: Option<String>) -> Self {
        url.filter(|u| !u.trim().is_empty())
            .map_or(Self::NotFound, Self::Found)
    }

    /// URL if one was found
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImageCacheStats {
    /// Stored entries
    pub entries: usize,
    /// `get` calls answered from the cache
    pub hits: u64,
    /// `get` calls that found nothing
    pub misses: u64,
}

/// Shared image lookup cache
///
/// Cloning is cheap and every clone sees the same entries. Reads and writes
/// go through an async `RwLock`, so concurrent `get`/`put` pairs never see a
/// half-written map. Two concurrent misses for the same key may both reach
/// the provider; the first `put` wins and the second is discarded.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: Arc<RwLock<HashMap<String, CachedImage>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl ImageCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a query
    pub async fn get(&self, query: &str) -> Option<CachedImage> {
        let key = normalize_query(query);
        let cached = self.entries.read().await.get(&key).cloned();
        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        cached
    }

    /// Store an outcome unless one is already stored
    ///
    /// Returns the value that is in the cache afterwards, which is the earlier
    /// one when two writers race.
    pub async fn put(&self, query: &str, outcome: CachedImage) -> CachedImage {
        let key = normalize_query(query);
        let mut entries = self.entries.write().await;
        match entries.entry(key) {
            Entry::Occupied(existing) => {
                debug!(query = %existing.key(), "Image cache entry already present");
                existing.get().clone()
            }
            Entry::Vacant(slot) => slot.insert(outcome).clone(),
        }
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Current counters
    pub async fn stats(&self) -> ImageCacheStats {
        ImageCacheStats {
            entries: self.len().await,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop all entries and reset counters (useful for testing)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_not_found() {
        assert_eq!(CachedImage::from_option(Some(" ".to_owned())), CachedImage::NotFound);
        assert_eq!(CachedImage::from_option(None), CachedImage::NotFound);
        assert_eq!(
            CachedImage::from_option(Some("u".to_owned())).url(),
            Some("u")
        );
    }

    #[tokio::test]
    async fn test_keys_are_normalized() {
        let cache = ImageCache::new();
        cache
            .put("  Bench   Press ", CachedImage::Found("u".to_owned()))
            .await;
        assert_eq!(
            cache.get("bench press").await,
            Some(CachedImage::Found("u".to_owned()))
        );
        assert_eq!(cache.len().await, 1);
    }
}
