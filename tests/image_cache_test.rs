// ABOUTME: Integration tests for the image lookup cache and cache-checked lookups
// ABOUTME: Tests idempotence, cached not-found outcomes, concurrency, and disabled lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use fitforge::aggregator::{ImageLookup, LookupOrigin};
use fitforge::cache::{CachedImage, ImageCache};
use fitforge::providers::{ImageSource, SyntheticImageSource};
use futures_util::future::join_all;

/// Helper: lookup over a synthetic image source with a fresh cache
fn lookup_over(source: &Arc<SyntheticImageSource>) -> ImageLookup {
    ImageLookup::new(
        Some(Arc::clone(source) as Arc<dyn ImageSource>),
        ImageCache::new(),
        Duration::from_millis(250),
    )
}

#[tokio::test]
async fn test_repeated_lookups_hit_provider_once() -> Result<()> {
    let source = Arc::new(SyntheticImageSource::new().with_image("dips", "https://img.test/dips.jpg"));
    let lookup = lookup_over(&source);

    let first = lookup.resolve("Dips").await;
    let second = lookup.resolve("  dips ").await;
    let third = lookup.resolve("DIPS").await;

    assert_eq!(first, (Some("https://img.test/dips.jpg".to_owned()), LookupOrigin::Provider));
    assert_eq!(second, (Some("https://img.test/dips.jpg".to_owned()), LookupOrigin::CacheHit));
    assert_eq!(third.1, LookupOrigin::CacheHit);
    assert_eq!(source.total_calls(), 1);

    let stats = lookup.cache().stats().await;
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    Ok(())
}

#[tokio::test]
async fn test_no_image_outcome_is_cached() -> Result<()> {
    let source = Arc::new(SyntheticImageSource::new());
    let lookup = lookup_over(&source);

    assert_eq!(lookup.lookup("zercher squat").await, None);
    assert_eq!(lookup.lookup("zercher squat").await, None);
    assert_eq!(source.total_calls(), 1);
    assert_eq!(
        lookup.cache().get("zercher squat").await,
        Some(CachedImage::NotFound)
    );
    Ok(())
}

#[tokio::test]
async fn test_timed_out_lookup_is_cached_as_not_found() -> Result<()> {
    let source = Arc::new(
        SyntheticImageSource::new()
            .with_image("plank", "https://img.test/plank.jpg")
            .with_delay(Duration::from_secs(2)),
    );
    let lookup = lookup_over(&source);

    assert_eq!(lookup.lookup("plank").await, None);
    assert_eq!(lookup.resolve("plank").await, (None, LookupOrigin::CacheHit));
    assert_eq!(source.total_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_first_put_wins() -> Result<()> {
    let cache = ImageCache::new();
    let stored = cache
        .put("curl", CachedImage::Found("https://img.test/a.jpg".to_owned()))
        .await;
    assert_eq!(stored.url(), Some("https://img.test/a.jpg"));

    let kept = cache.put("Curl", CachedImage::NotFound).await;
    assert_eq!(kept.url(), Some("https://img.test/a.jpg"));
    assert_eq!(cache.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_lookups_converge() -> Result<()> {
    let source = Arc::new(
        SyntheticImageSource::new()
            .with_image("row", "https://img.test/row.jpg")
            .with_delay(Duration::from_millis(20)),
    );
    let lookup = lookup_over(&source);

    let results = join_all((0..16).map(|_| lookup.lookup("row"))).await;
    assert!(results
        .iter()
        .all(|url| url.as_deref() == Some("https://img.test/row.jpg")));

    // Racing misses may each reach the provider, but the cache ends with one entry
    assert!(source.total_calls() >= 1);
    assert_eq!(lookup.cache().len().await, 1);

    let calls_after_race = source.total_calls();
    lookup.lookup("row").await;
    assert_eq!(source.total_calls(), calls_after_race);
    Ok(())
}

#[tokio::test]
async fn test_cache_is_shared_between_clones() -> Result<()> {
    let cache = ImageCache::new();
    let clone = cache.clone();
    clone
        .put("lunge", CachedImage::Found("https://img.test/lunge.jpg".to_owned()))
        .await;
    assert!(cache.get("lunge").await.is_some());

    cache.clear().await;
    assert!(clone.is_empty().await);
    assert_eq!(clone.stats().await.hits, 0);
    Ok(())
}

#[tokio::test]
async fn test_disabled_lookup_never_touches_cache() -> Result<()> {
    let lookup = ImageLookup::disabled();
    assert!(!lookup.is_enabled());

    for _ in 0..3 {
        assert_eq!(lookup.resolve("bench press").await, (None, LookupOrigin::Disabled));
    }
    let stats = lookup.cache().stats().await;
    assert_eq!((stats.entries, stats.hits, stats.misses), (0, 0, 0));
    Ok(())
}
