// ABOUTME: Core provider traits for exercise listings, details, and image search
// ABOUTME: Defines the seams the aggregator fans out over
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Traits
//!
//! Two request/response contracts cover every provider:
//!
//! - [`ExerciseSource`]: the primary provider. A category listing returns
//!   minimal entries (identifier plus taxonomy hints), and a detail call
//!   returns text and an image reference for one identifier.
//! - [`ImageSource`]: the optional secondary provider that turns free text
//!   into the best available image URL.
//!
//! Implementations return [`ProviderResult`] and never retry. The aggregator
//! applies the per-request timeout and turns every error into its documented
//! soft outcome.

use async_trait::async_trait;

use crate::errors::ProviderResult;
use crate::models::{ExerciseDetail, ExerciseId, MinimalExercise};

/// Primary exercise provider
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// List up to `limit` exercises for one category key
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status, or decode failures, or when the
    /// category key cannot be expressed for this provider.
    async fn list_minimal(
        &self,
        category: &str,
        limit: usize,
    ) -> ProviderResult<Vec<MinimalExercise>>;

    /// Fetch the detail payload for one identifier
    ///
    /// `Ok(None)` means the provider has no detail for the identifier.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status, or decode failures.
    async fn fetch_detail(&self, id: ExerciseId) -> ProviderResult<Option<ExerciseDetail>>;
}

/// Secondary image provider
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// Best available image for a free-text query, or `None` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error on transport, status, or decode failures.
    async fn first_image(&self, query: &str) -> ProviderResult<Option<String>>;
}
