// ABOUTME: In-memory exercise and image providers with scripted latency and failures
// ABOUTME: Used by tests, benchmarks, and the offline CLI mode; counts every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic providers
//!
//! Both providers are configured with a consuming builder and are then shared
//! behind an `Arc`. Call counters use `DashMap`/atomics so concurrent fan-out
//! can be asserted on afterwards.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::constants::providers::names;
use crate::core::{ExerciseSource, ImageSource};
use crate::errors::{ProviderError, ProviderResult};
use crate::models::{ExerciseDetail, ExerciseId, MinimalExercise};

fn key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Concurrent call counter that remembers its high-water mark
#[derive(Debug, Default)]
struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlight {
    fn enter(&self) -> InFlightGuard<'_> {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        InFlightGuard(self)
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct InFlightGuard<'a>(&'a InFlight);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.current.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Scripted primary provider
#[derive(Debug, Default)]
pub struct SyntheticExerciseSource {
    listings: HashMap<String, Vec<MinimalExercise>>,
    details: HashMap<ExerciseId, ExerciseDetail>,
    failing_categories: HashSet<String>,
    failing_details: HashSet<ExerciseId>,
    listing_delays: HashMap<String, Duration>,
    detail_delays: HashMap<ExerciseId, Duration>,
    listing_calls: DashMap<String, usize>,
    detail_calls: DashMap<ExerciseId, usize>,
    details_in_flight: InFlight,
}

impl SyntheticExerciseSource {
    /// Empty provider: every category lists nothing, every id has no detail
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listing returned for a category
    #[must_use]
    pub fn with_listing<I>(mut self, category: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = MinimalExercise>,
    {
        self.listings
            .insert(key(category), entries.into_iter().collect());
        self
    }

    /// Listing of bare identifiers for a category
    #[must_use]
    pub fn with_ids(self, category: &str, ids: &[u64]) -> Self {
        let entries = ids
            .iter()
            .map(|id| MinimalExercise::new(ExerciseId::new(*id)));
        self.with_listing(category, entries)
    }

    /// Detail returned for an identifier
    #[must_use]
    pub fn with_detail(mut self, id: u64, detail: ExerciseDetail) -> Self {
        self.details.insert(ExerciseId::new(id), detail);
        self
    }

    /// Detail with a name and description and no image
    #[must_use]
    pub fn with_text(self, id: u64, name: &str, description: &str) -> Self {
        self.with_detail(
            id,
            ExerciseDetail {
                name: name.to_owned(),
                description: description.to_owned(),
                image_url: None,
            },
        )
    }

    /// Listing calls for this category fail with a transport error
    #[must_use]
    pub fn failing_category(mut self, category: &str) -> Self {
        self.failing_categories.insert(key(category));
        self
    }

    /// Detail calls for this identifier fail with a transport error
    #[must_use]
    pub fn failing_detail(mut self, id: u64) -> Self {
        self.failing_details.insert(ExerciseId::new(id));
        self
    }

    /// Delay before a category listing responds
    #[must_use]
    pub fn listing_delay(mut self, category: &str, delay: Duration) -> Self {
        self.listing_delays.insert(key(category), delay);
        self
    }

    /// Delay before a detail call responds
    #[must_use]
    pub fn detail_delay(mut self, id: u64, delay: Duration) -> Self {
        self.detail_delays.insert(ExerciseId::new(id), delay);
        self
    }

    /// Listing calls made for a category
    #[must_use]
    pub fn listing_calls(&self, category: &str) -> usize {
        self.listing_calls.get(&key(category)).map_or(0, |c| *c)
    }

    /// Listing calls made across all categories
    #[must_use]
    pub fn total_listing_calls(&self) -> usize {
        self.listing_calls.iter().map(|c| *c.value()).sum()
    }

    /// Detail calls made for an identifier
    #[must_use]
    pub fn detail_calls(&self, id: u64) -> usize {
        self.detail_calls
            .get(&ExerciseId::new(id))
            .map_or(0, |c| *c)
    }

    /// Detail calls made across all identifiers
    #[must_use]
    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.iter().map(|c| *c.value()).sum()
    }

    /// Highest number of detail calls observed in flight at once
    #[must_use]
    pub fn peak_details_in_flight(&self) -> usize {
        self.details_in_flight.peak()
    }

    /// Small offline catalog with overlapping muscle groups
    #[must_use]
    pub fn demo() -> Self {
        Self::new()
            .with_ids("chest", &[101, 102, 104, 107])
            .with_ids("biceps", &[102, 103, 105])
            .with_ids("triceps", &[104, 106])
            .with_ids("shoulders", &[107, 108])
            .with_ids("quads", &[109, 110])
            .with_text(101, "Bench Press", "<p>Lower the bar to your chest, then press it back up.</p>")
            .with_text(102, "chin-up", "Pull yourself up with an <b>underhand</b> grip.")
            .with_text(103, "Hammer Curl", "Curl the dumbbells with a neutral grip.")
            .with_text(104, "Dips", "Lower your body between parallel bars and push back up.")
            .with_text(105, "Concentration Curl", "Seated single-arm curl with the elbow braced.")
            .with_text(106, "Skull Crusher", "Lower the bar towards your forehead, then extend.")
            .with_text(107, "Incline Dumbbell Press", "Press from a bench set at 30 degrees.")
            .with_text(108, "Lateral Raise", "Raise the dumbbells out to the side to shoulder height.")
            .with_text(109, "Back Squat", "Squat below parallel with the bar on your upper back.")
            .with_detail(
                110,
                ExerciseDetail {
                    name: "Leg Press".to_owned(),
                    description: "Push the sled away until your legs are nearly straight.".to_owned(),
                    image_url: Some("https://images.example.org/leg-press.jpg".to_owned()),
                },
            )
    }

    fn record_call<K>(calls: &DashMap<K, usize>, call: K)
    where
        K: Eq + std::hash::Hash,
    {
        *calls.entry(call).or_insert(0) += 1;
    }
}

#[async_trait]
impl ExerciseSource for SyntheticExerciseSource {
    fn name(&self) -> &'static str {
        names::SYNTHETIC
    }

    async fn list_minimal(
        &self,
        category: &str,
        limit: usize,
    ) -> ProviderResult<Vec<MinimalExercise>> {
        let category = key(category);
        Self::record_call(&self.listing_calls, category.clone());

        if let Some(delay) = self.listing_delays.get(&category) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_categories.contains(&category) {
            return Err(ProviderError::Transport {
                provider: names::SYNTHETIC,
                context: format!("listing {category}"),
                message: "scripted failure".to_owned(),
            });
        }

        Ok(self
            .listings
            .get(&category)
            .map(|entries| entries.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_detail(&self, id: ExerciseId) -> ProviderResult<Option<ExerciseDetail>> {
        Self::record_call(&self.detail_calls, id);
        let _in_flight = self.details_in_flight.enter();

        if let Some(delay) = self.detail_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_details.contains(&id) {
            return Err(ProviderError::Transport {
                provider: names::SYNTHETIC,
                context: format!("detail {id}"),
                message: "scripted failure".to_owned(),
            });
        }

        Ok(self.details.get(&id).cloned())
    }
}

/// Scripted image provider
#[derive(Debug, Default)]
pub struct SyntheticImageSource {
    images: HashMap<String, String>,
    failing: bool,
    delay: Option<Duration>,
    calls: DashMap<String, usize>,
    total_calls: AtomicUsize,
    in_flight: InFlight,
}

impl SyntheticImageSource {
    /// Provider that finds nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image returned for a query (matched case-insensitively)
    #[must_use]
    pub fn with_image(mut self, query: &str, url: &str) -> Self {
        self.images.insert(key(query), url.to_owned());
        self
    }

    /// Every call fails with a transport error
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Delay before every response
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls made for one query
    #[must_use]
    pub fn calls_for(&self, query: &str) -> usize {
        self.calls.get(&key(query)).map_or(0, |c| *c)
    }

    /// Calls made across all queries
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }

    /// Highest number of searches observed in flight at once
    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.in_flight.peak()
    }

    /// Images for part of the offline catalog
    #[must_use]
    pub fn demo() -> Self {
        Self::new()
            .with_image("bench press", "https://images.example.org/bench-press.jpg")
            .with_image("hammer curl", "https://images.example.org/hammer-curl.jpg")
            .with_image("back squat", "https://images.example.org/back-squat.jpg")
    }
}

#[async_trait]
impl ImageSource for SyntheticImageSource {
    fn name(&self) -> &'static str {
        names::SYNTHETIC
    }

    async fn first_image(&self, query: &str) -> ProviderResult<Option<String>> {
        let query = key(query);
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self.calls.entry(query.clone()).or_insert(0) += 1;
        let _in_flight = self.in_flight.enter();

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(ProviderError::Transport {
                provider: names::SYNTHETIC,
                context: format!("image search '{query}'"),
                message: "scripted failure".to_owned(),
            });
        }

        Ok(self.images.get(&query).cloned())
    }
}
