// ABOUTME: Cache module for memoizing secondary provider lookups
// ABOUTME: Process-wide, never evicted, shared by concurrent aggregations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Caching layer
//!
//! The image cache is the only state shared across aggregation calls. Its key
//! space is bounded by the exercise-name vocabulary, so there is no TTL and no
//! eviction.

/// Image lookup memo keyed by normalized query text
pub mod image;

pub use image::{CachedImage, ImageCache, ImageCacheStats};
