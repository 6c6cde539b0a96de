// ABOUTME: API Ninjas exercises provider with synthesized identifiers
// ABOUTME: Listing payloads already carry full text, so details are served from a memo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! API Ninjas adapter
//!
//! `GET /exercises?muscle={category}` returns a bare JSON array of exercises
//! with name, muscle, and instructions but no identifier and no paging
//! parameter. Identifiers are derived with [`ExerciseId::synthesize`] from the
//! `(name, muscle)` tuple and results are sliced locally to the requested
//! limit.
//!
//! Because the listing already contains everything a detail call needs,
//! listed entries are memoized and `fetch_detail` never touches the network.

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::constants::providers::{names, ninjas};
use crate::core::ExerciseSource;
use crate::errors::ProviderResult;
use crate::http_client::get_json;
use crate::models::{ExerciseDetail, ExerciseId, MinimalExercise};

#[derive(Debug, Deserialize)]
struct NinjasExercise {
    name: String,
    #[serde(default)]
    muscle: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
}

/// API Ninjas exercise provider
pub struct NinjasClient {
    client: Client,
    base_url: String,
    api_key: String,
    details: DashMap<ExerciseId, ExerciseDetail>,
}

impl NinjasClient {
    /// Create a client with an explicit HTTP client and base URL
    #[must_use]
    pub fn with_config(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
            details: DashMap::new(),
        }
    }

    /// Number of memoized listing entries
    #[must_use]
    pub fn memoized(&self) -> usize {
        self.details.len()
    }
}

/// Keep non-blank names, slice to `limit`, and derive identifiers
fn to_entries(
    exercises: Vec<NinjasExercise>,
    category: &str,
    limit: usize,
) -> Vec<(MinimalExercise, ExerciseDetail)> {
    exercises
        .into_iter()
        .filter(|exercise| !exercise.name.trim().is_empty())
        .take(limit)
        .map(|exercise| {
            let muscle = exercise
                .muscle
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| category.to_owned());
            let id = ExerciseId::synthesize(&exercise.name, &muscle);
            let minimal = MinimalExercise::new(id).with_hints([muscle.to_lowercase()]);
            let detail = ExerciseDetail {
                name: exercise.name,
                description: exercise.instructions.unwrap_or_default(),
                image_url: None,
            };
            (minimal, detail)
        })
        .collect()
}

#[async_trait]
impl ExerciseSource for NinjasClient {
    fn name(&self) -> &'static str {
        names::NINJAS
    }

    #[instrument(skip(self), fields(provider = names::NINJAS))]
    async fn list_minimal(
        &self,
        category: &str,
        limit: usize,
    ) -> ProviderResult<Vec<MinimalExercise>> {
        let request = self
            .client
            .get(format!("{}/exercises", self.base_url))
            .header(ninjas::API_KEY_HEADER, &self.api_key)
            .query(&[("muscle", category.trim().to_lowercase())]);
        let context = format!("exercises for muscle {category}");
        let exercises: Option<Vec<NinjasExercise>> =
            get_json(request, names::NINJAS, &context).await?;

        let entries = to_entries(exercises.unwrap_or_default(), category, limit);
        debug!(count = entries.len(), "API Ninjas listing decoded");

        Ok(entries
            .into_iter()
            .map(|(minimal, detail)| {
                self.details.entry(minimal.id).or_insert(detail);
                minimal
            })
            .collect())
    }

    async fn fetch_detail(&self, id: ExerciseId) -> ProviderResult<Option<ExerciseDetail>> {
        Ok(self.details.get(&id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(name: &str, muscle: Option<&str>) -> NinjasExercise {
        NinjasExercise {
            name: name.to_owned(),
            muscle: muscle.map(str::to_owned),
            instructions: Some(format!("Do the {name}.")),
        }
    }

    #[test]
    fn test_entries_skip_blank_names_and_respect_limit() {
        let raw = vec![
            exercise("  ", Some("chest")),
            exercise("Push-up", Some("chest")),
            exercise("Dips", Some("chest")),
            exercise("Incline press", Some("chest")),
        ];
        let entries = to_entries(raw, "chest", 2);
        let names: Vec<&str> = entries.iter().map(|(_, d)| d.name.as_str()).collect();
        assert_eq!(names, vec!["Push-up", "Dips"]);
    }

    #[test]
    fn test_entries_fall_back_to_requested_category() {
        let entries = to_entries(vec![exercise("Curl", None)], "biceps", 5);
        let (minimal, _) = &entries[0];
        assert_eq!(minimal.id, ExerciseId::synthesize("Curl", "biceps"));
        assert_eq!(minimal.category_hints, vec!["biceps".to_owned()]);
    }

    #[tokio::test]
    async fn test_fetch_detail_for_unlisted_id_is_none() {
        let client = NinjasClient::with_config(
            Client::new(),
            "http://127.0.0.1:9".to_owned(),
            "key".to_owned(),
        );
        let detail = client.fetch_detail(ExerciseId::new(1)).await.unwrap();
        assert!(detail.is_none());
        assert_eq!(client.memoized(), 0);
    }
}
