// ABOUTME: Per-call aggregation summary counters
// ABOUTME: Reports soft failures and image cache behaviour alongside the records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Counters collected during one aggregation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Distinct, non-blank category keys requested
    pub categories_requested: usize,
    /// Category listings that failed softly (error or timeout)
    pub categories_failed: usize,
    /// Unique identifiers after the category join
    pub unique_ids: usize,
    /// Records built from a placeholder because the detail was unavailable
    pub detail_failures: usize,
    /// Image lookups answered from the cache
    pub image_cache_hits: usize,
    /// Image lookups that went to the provider
    pub image_cache_misses: usize,
    /// Image lookups skipped because the primary detail carried an image
    pub image_lookups_skipped: usize,
    /// Records carrying an image
    pub records_with_image: usize,
    /// Wall-clock duration in milliseconds
    pub elapsed_ms: u64,
}

impl AggregationReport {
    pub(crate) fn new(categories_requested: usize) -> Self {
        Self {
            categories_requested,
            ..Self::default()
        }
    }

    /// Whether any unit of work degraded
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.categories_failed > 0 || self.detail_failures > 0
    }
}
