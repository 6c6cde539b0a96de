// ABOUTME: Cache-checked image lookup in front of the optional secondary provider
// ABOUTME: Disabled lookups answer immediately; provider calls are bounded and memoized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::cache::{CachedImage, ImageCache};
use crate::constants::aggregation::DEFAULT_FAN_OUT_WIDTH;
use crate::providers::ImageSource;

/// Where a lookup answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOrigin {
    /// No image provider configured; nothing was consulted
    Disabled,
    /// Answered from the cache
    CacheHit,
    /// Cache miss; the provider was called and the cache populated
    Provider,
}

/// Image lookup shared by all aggregations of one process
///
/// Provider calls hold a permit from a semaphore owned by the lookup, so the
/// image provider has its own concurrency bound independent of the primary.
/// Clones share the cache and the permits.
#[derive(Clone)]
pub struct ImageLookup {
    source: Option<Arc<dyn ImageSource>>,
    cache: ImageCache,
    request_timeout: Duration,
    permits: Arc<Semaphore>,
}

impl ImageLookup {
    /// Lookup backed by a provider and a cache
    #[must_use]
    pub fn new(
        source: Option<Arc<dyn ImageSource>>,
        cache: ImageCache,
        request_timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            request_timeout,
            permits: Arc::new(Semaphore::new(DEFAULT_FAN_OUT_WIDTH)),
        }
    }

    /// Bound the number of provider calls in flight at once (minimum 1)
    #[must_use]
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.permits = Arc::new(Semaphore::new(max_in_flight.max(1)));
        self
    }

    /// Lookup that never calls anything
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, ImageCache::new(), Duration::ZERO)
    }

    /// Whether a provider is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.source.is_some()
    }

    /// The backing cache
    #[must_use]
    pub const fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Best image for a query, if any
    pub async fn lookup(&self, query: &str) -> Option<String> {
        self.resolve(query).await.0
    }

    /// Best image for a query, plus where the answer came from
    pub async fn resolve(&self, query: &str) -> (Option<String>, LookupOrigin) {
        let Some(source) = &self.source else {
            return (None, LookupOrigin::Disabled);
        };

        if let Some(cached) = self.cache.get(query).await {
            debug!(query, "Image cache hit");
            return (cached.url().map(str::to_owned), LookupOrigin::CacheHit);
        }

        let called = {
            // The semaphore is never closed, so a permit is always granted
            let _permit = self.permits.acquire().await.ok();
            timeout(self.request_timeout, source.first_image(query)).await
        };
        let outcome = match called {
            Ok(Ok(url)) => CachedImage::from_option(url),
            Ok(Err(e)) => {
                warn!(query, provider = source.name(), error = %e, "Image lookup failed");
                CachedImage::NotFound
            }
            Err(_) => {
                warn!(
                    query,
                    provider = source.name(),
                    timeout_ms = self.request_timeout.as_millis(),
                    "Image lookup timed out"
                );
                CachedImage::NotFound
            }
        };

        let stored = self.cache.put(query, outcome).await;
        (stored.url().map(str::to_owned), LookupOrigin::Provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::SyntheticImageSource;

    #[tokio::test]
    async fn test_disabled_lookup_leaves_cache_untouched() {
        let lookup = ImageLookup::disabled();
        assert_eq!(lookup.resolve("bench press").await, (None, LookupOrigin::Disabled));
        assert!(lookup.cache().is_empty().await);
        assert_eq!(lookup.cache().stats().await.misses, 0);
    }

    #[tokio::test]
    async fn test_failure_is_cached_as_not_found() {
        let source = Arc::new(SyntheticImageSource::new().failing());
        let lookup = ImageLookup::new(
            Some(source.clone()),
            ImageCache::new(),
            Duration::from_secs(1),
        );

        assert_eq!(lookup.lookup("Dips").await, None);
        assert_eq!(lookup.resolve("dips").await, (None, LookupOrigin::CacheHit));
        assert_eq!(source.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_provider_calls_respect_max_in_flight() {
        let source = Arc::new(SyntheticImageSource::new().with_delay(Duration::from_millis(20)));
        let lookup = ImageLookup::new(
            Some(source.clone()),
            ImageCache::new(),
            Duration::from_secs(1),
        )
        .with_max_in_flight(2);

        let queries: Vec<String> = (0..6).map(|i| format!("row {i}")).collect();
        futures_util::future::join_all(queries.iter().map(|q| lookup.lookup(q))).await;

        assert_eq!(source.total_calls(), 6);
        assert_eq!(source.peak_in_flight(), 2);
    }
}
