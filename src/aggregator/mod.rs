// ABOUTME: Two-phase fan-out/fan-in aggregation across category listings and exercise details
// ABOUTME: Deduplicates identifiers, unions category tags, enriches images, sorts the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation orchestrator
//!
//! One call runs through these stages:
//!
//! 1. **Category fan-out**: one `list_minimal` per distinct category key,
//!    at most `fan_out_width` in flight.
//! 2. **Category join**: every listing is merged into a fresh
//!    [`CategoryIndex`]. Nothing from phase 2 starts before this barrier.
//! 3. **Detail fan-out**: exactly one `fetch_detail` per unique identifier.
//!    Every identifier gets its own task; a per-call semaphore keeps at most
//!    `fan_out_width` detail calls in flight. The permit is released before
//!    the task resolves its image, and image calls are bounded separately by
//!    [`ImageLookup`], so a slow image provider only delays its own record.
//! 4. **Detail join**: every task yields a record, degraded or not.
//! 5. **Sort** by case-insensitive name, then id.
//!
//! Every provider call is bounded by `request_timeout` and every failure
//! degrades the affected unit of work: a failed listing contributes nothing,
//! a failed detail yields a placeholder record. `aggregate` has no error path.
//!
//! The only state shared between calls is the image cache inside
//! [`ImageLookup`].

/// Identifier index built at the category barrier
pub mod index;
/// Cache-checked image lookup
pub mod lookup;
/// Per-call counters
pub mod report;

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, StreamExt};
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, info_span, warn, Instrument};

pub use index::{CategoryIndex, IndexEntry};
pub use lookup::{ImageLookup, LookupOrigin};
pub use report::AggregationReport;

use crate::cache::ImageCache;
use crate::config::{AggregatorConfig, PrimaryProviderKind, ServerConfig};
use crate::models::{sort_records, ExerciseId, MinimalExercise, Record};
use crate::providers::{
    initialize_shared_client, shared_client, ExerciseSource, ImageSource, NinjasClient,
    PexelsClient, WgerClient,
};
use crate::utils::text::{display_name, strip_html};

/// How one record's image was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageSettlement {
    /// The primary detail carried an image
    FromPrimary,
    /// Looked up through [`ImageLookup`]
    Lookup(LookupOrigin),
    /// No lookup attempted (degraded record or blank name)
    NotAttempted,
}

/// Result of one detail task
struct DetailOutcome {
    record: Record,
    degraded: bool,
    image: ImageSettlement,
}

/// Aggregation orchestrator
///
/// Holds no per-call state; concurrent calls on one instance are independent
/// apart from sharing the image cache.
#[derive(Clone)]
pub struct Aggregator {
    primary: Arc<dyn ExerciseSource>,
    images: ImageLookup,
    config: AggregatorConfig,
}

impl Aggregator {
    /// Create an orchestrator over explicit providers
    #[must_use]
    pub fn new(
        primary: Arc<dyn ExerciseSource>,
        images: ImageLookup,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            primary,
            images,
            config,
        }
    }

    /// Wire the real provider adapters from configuration
    ///
    /// The image provider is only constructed when its key is present, so a
    /// missing key disables enrichment before any fan-out happens.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        initialize_shared_client(
            config.aggregator.request_timeout,
            config.aggregator.connect_timeout,
        );
        let client = shared_client().clone();

        let primary: Arc<dyn ExerciseSource> = match config.primary {
            PrimaryProviderKind::Wger => Arc::new(WgerClient::with_config(
                client.clone(),
                config.wger_base_url.clone(),
                config.credentials.primary_api_key.clone(),
                config.language,
            )),
            PrimaryProviderKind::Ninjas => Arc::new(NinjasClient::with_config(
                client.clone(),
                config.ninjas_base_url.clone(),
                config.credentials.primary_api_key.clone().unwrap_or_default(),
            )),
        };

        let image_source = PexelsClient::with_config(
            client,
            config.pexels_base_url.clone(),
            config.credentials.image_api_key.clone(),
        )
        .map(|pexels| Arc::new(pexels) as Arc<dyn ImageSource>);

        info!(
            primary = primary.name(),
            image_enrichment = image_source.is_some(),
            "Aggregator configured"
        );

        let images = ImageLookup::new(
            image_source,
            ImageCache::new(),
            config.aggregator.request_timeout,
        )
        .with_max_in_flight(config.aggregator.fan_out_width);
        Self::new(primary, images, config.aggregator.clone())
    }

    /// Tuning in effect
    #[must_use]
    pub const fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// The image lookup (and its cache)
    #[must_use]
    pub const fn images(&self) -> &ImageLookup {
        &self.images
    }

    /// Aggregate records for the given category keys
    ///
    /// Always completes. Blank and duplicate keys are ignored; zero keys or a
    /// zero limit complete with an empty result and no provider calls.
    pub async fn aggregate(&self, category_keys: &[String], per_category_limit: usize) -> Vec<Record> {
        self.aggregate_with_report(category_keys, per_category_limit)
            .await
            .0
    }

    /// Aggregate and return the per-call counters alongside the records
    pub async fn aggregate_with_report(
        &self,
        category_keys: &[String],
        per_category_limit: usize,
    ) -> (Vec<Record>, AggregationReport) {
        let categories = distinct_categories(category_keys);
        let report = AggregationReport::new(categories.len());
        if categories.is_empty() || per_category_limit == 0 {
            debug!(
                categories = categories.len(),
                per_category_limit, "Nothing to aggregate"
            );
            return (Vec::new(), report);
        }

        let span = info_span!(
            "aggregate",
            provider = self.primary.name(),
            categories = categories.len(),
            per_category_limit
        );
        self.run(categories, per_category_limit, report)
            .instrument(span)
            .await
    }

    /// Aggregate unless `shutdown` resolves first
    ///
    /// Returns `None` on shutdown. In-flight provider calls are owned by the
    /// aggregation future and are dropped with it.
    pub async fn aggregate_until<F>(
        &self,
        category_keys: &[String],
        per_category_limit: usize,
        shutdown: F,
    ) -> Option<Vec<Record>>
    where
        F: Future<Output = ()>,
    {
        self.aggregate_with_report_until(category_keys, per_category_limit, shutdown)
            .await
            .map(|(records, _)| records)
    }

    /// [`Self::aggregate_with_report`] unless `shutdown` resolves first
    pub async fn aggregate_with_report_until<F>(
        &self,
        category_keys: &[String],
        per_category_limit: usize,
        shutdown: F,
    ) -> Option<(Vec<Record>, AggregationReport)>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            outcome = self.aggregate_with_report(category_keys, per_category_limit) => Some(outcome),
            () = shutdown => {
                info!("Aggregation cancelled before completion");
                None
            }
        }
    }

    async fn run(
        &self,
        categories: Vec<String>,
        limit: usize,
        mut report: AggregationReport,
    ) -> (Vec<Record>, AggregationReport) {
        let started = Instant::now();
        let width = self.config.fan_out_width.max(1);

        debug!("Fanning out category listings");
        let listings: Vec<(String, Option<Vec<MinimalExercise>>)> = stream::iter(categories)
            .map(|category| async move {
                let listing = self.list_category(&category, limit).await;
                (category, listing)
            })
            .buffer_unordered(width)
            .collect()
            .await;

        let mut index = CategoryIndex::new();
        for (category, listing) in &listings {
            match listing {
                Some(entries) => index.merge(category, entries),
                None => report.categories_failed += 1,
            }
        }
        report.unique_ids = index.len();
        debug!(unique_ids = index.len(), "Category join complete");

        let detail_permits = Semaphore::new(width);
        let outcomes: Vec<DetailOutcome> = stream::iter(index.into_entries())
            .map(|(id, entry)| self.build_record(id, entry, &detail_permits))
            .buffer_unordered(report.unique_ids.max(1))
            .collect()
            .await;
        debug!(records = outcomes.len(), "Detail join complete");

        let mut records = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            if outcome.degraded {
                report.detail_failures += 1;
            }
            match outcome.image {
                ImageSettlement::FromPrimary => report.image_lookups_skipped += 1,
                ImageSettlement::Lookup(LookupOrigin::CacheHit) => report.image_cache_hits += 1,
                ImageSettlement::Lookup(LookupOrigin::Provider) => report.image_cache_misses += 1,
                ImageSettlement::Lookup(LookupOrigin::Disabled) | ImageSettlement::NotAttempted => {}
            }
            if outcome.record.image_url().is_some() {
                report.records_with_image += 1;
            }
            records.push(outcome.record);
        }
        sort_records(&mut records);

        report.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            records = records.len(),
            categories_failed = report.categories_failed,
            degraded = report.detail_failures,
            cache_hits = report.image_cache_hits,
            cache_misses = report.image_cache_misses,
            elapsed_ms = report.elapsed_ms,
            "Aggregation complete"
        );
        (records, report)
    }

    /// Phase 1 unit of work; `None` means the category failed softly
    async fn list_category(&self, category: &str, limit: usize) -> Option<Vec<MinimalExercise>> {
        match timeout(self.config.request_timeout, self.primary.list_minimal(category, limit)).await
        {
            Ok(Ok(entries)) => {
                debug!(category, count = entries.len(), "Category listed");
                Some(entries)
            }
            Ok(Err(e)) => {
                warn!(category, error = %e, "Category listing failed; contributing nothing");
                None
            }
            Err(_) => {
                warn!(
                    category,
                    timeout_ms = self.config.request_timeout.as_millis(),
                    "Category listing timed out; contributing nothing"
                );
                None
            }
        }
    }

    /// Phase 2 unit of work: detail, cleanup, image
    ///
    /// `detail_permits` is held for the primary call only.
    async fn build_record(
        &self,
        id: ExerciseId,
        entry: IndexEntry,
        detail_permits: &Semaphore,
    ) -> DetailOutcome {
        let fetched = {
            // Never closed, so a permit is always granted
            let _permit = detail_permits.acquire().await.ok();
            timeout(self.config.request_timeout, self.primary.fetch_detail(id)).await
        };
        let detail = match fetched {
            Ok(Ok(Some(detail))) => Some(detail),
            Ok(Ok(None)) => {
                warn!(%id, "No detail available; using placeholder");
                None
            }
            Ok(Err(e)) => {
                warn!(%id, error = %e, "Detail fetch failed; using placeholder");
                None
            }
            Err(_) => {
                warn!(
                    %id,
                    timeout_ms = self.config.request_timeout.as_millis(),
                    "Detail fetch timed out; using placeholder"
                );
                None
            }
        };

        let Some(detail) = detail else {
            return DetailOutcome {
                record: Record::placeholder(id)
                    .with_tags(entry.tags)
                    .with_hints(entry.hints),
                degraded: true,
                image: ImageSettlement::NotAttempted,
            };
        };

        let has_usable_name = !strip_html(&detail.name).is_empty();
        let mut record = Record::new(
            id,
            display_name(&detail.name, id),
            strip_html(&detail.description),
        )
        .with_tags(entry.tags)
        .with_hints(entry.hints);

        let image = if detail
            .image_url
            .is_some_and(|url| record.attach_image(url))
        {
            ImageSettlement::FromPrimary
        } else if has_usable_name {
            let (url, origin) = self.images.resolve(&record.name).await;
            if let Some(url) = url {
                record.attach_image(url);
            }
            ImageSettlement::Lookup(origin)
        } else {
            ImageSettlement::NotAttempted
        };

        DetailOutcome {
            record,
            degraded: false,
            image,
        }
    }
}

/// Trimmed, lowercased, non-blank keys in first-seen order
fn distinct_categories(keys: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.iter()
        .map(|key| key.trim().to_lowercase())
        .filter(|key| !key.is_empty())
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_categories() {
        let keys = vec![
            " Chest".to_owned(),
            "biceps".to_owned(),
            "chest".to_owned(),
            "   ".to_owned(),
        ];
        assert_eq!(distinct_categories(&keys), vec!["chest", "biceps"]);
    }
}
