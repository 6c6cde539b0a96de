// ABOUTME: wger exercise database provider using the exercise and exerciseinfo endpoints
// ABOUTME: Maps muscle-name category keys to wger muscle ids and picks localized details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! wger REST API adapter
//!
//! - Listing: `GET /exercise/?muscles={id}&language={lang}&limit={n}` returns
//!   `{ "results": [{ "id": 101, "muscles": [4] }] }`.
//! - Detail: `GET /exerciseinfo/{id}/?language={lang}` returns translations
//!   and images for one exercise.
//!
//! The API token is optional for read access. When present it is sent as
//! `Authorization: Token {token}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::constants::providers::names;
use crate::core::ExerciseSource;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::get_json;
use crate::models::{ExerciseDetail, ExerciseId, MinimalExercise};

/// Muscle-name category keys understood by wger, with their muscle ids
const MUSCLES: &[(&str, u32)] = &[
    ("biceps", 1),
    ("shoulders", 2),
    ("serratus", 3),
    ("chest", 4),
    ("triceps", 5),
    ("abs", 6),
    ("calves", 7),
    ("glutes", 8),
    ("traps", 9),
    ("quads", 10),
    ("hamstrings", 11),
    ("lats", 12),
    ("forearms", 13),
    ("obliques", 14),
    ("soleus", 15),
];

/// Category keys accepted by [`WgerClient`], in muscle-id order
#[must_use]
pub fn known_categories() -> Vec<&'static str> {
    MUSCLES.iter().map(|(name, _)| *name).collect()
}

/// Resolve a category key to a wger muscle id
///
/// Accepts a muscle name (case-insensitive) or a numeric id.
#[must_use]
pub fn muscle_id(category: &str) -> Option<u32> {
    let key = category.trim().to_lowercase();
    if let Ok(id) = key.parse::<u32>() {
        return (id > 0).then_some(id);
    }
    MUSCLES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, id)| *id)
}

/// Category key for a wger muscle id, or the id itself when unnamed
fn muscle_label(id: u32) -> String {
    MUSCLES
        .iter()
        .find(|(_, muscle)| *muscle == id)
        .map_or_else(|| id.to_string(), |(name, _)| (*name).to_owned())
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<ListingEntry>,
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
    id: u64,
    #[serde(default)]
    muscles: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize)]
struct InfoResponse {
    #[serde(default)]
    images: Vec<InfoImage>,
    #[serde(default)]
    translations: Vec<InfoTranslation>,
}

#[derive(Debug, Deserialize)]
struct InfoImage {
    image: String,
    #[serde(default)]
    is_main: bool,
}

#[derive(Debug, Deserialize)]
struct InfoTranslation {
    language: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

impl InfoResponse {
    /// Pick the configured-language translation (else the first) and the main
    /// image (else the first)
    fn into_detail(self, language: u32) -> ExerciseDetail {
        let mut first = None;
        let mut chosen = None;
        for translation in self.translations {
            if translation.language == language {
                chosen = Some(translation);
                break;
            }
            if first.is_none() {
                first = Some(translation);
            }
        }
        let (name, description) = chosen
            .or(first)
            .map(|t| (t.name, t.description))
            .unwrap_or_default();

        let image_url = self
            .images
            .iter()
            .find(|image| image.is_main)
            .or_else(|| self.images.first())
            .map(|image| image.image.clone())
            .filter(|url| !url.trim().is_empty());

        ExerciseDetail {
            name,
            description,
            image_url,
        }
    }
}

/// wger exercise provider
pub struct WgerClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    language: u32,
}

impl WgerClient {
    /// Create a client with an explicit HTTP client, base URL, and language id
    #[must_use]
    pub fn with_config(
        client: Client,
        base_url: String,
        token: Option<String>,
        language: u32,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.trim().is_empty()),
            language,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(format!("{}/{path}", self.base_url));
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }
}

#[async_trait]
impl ExerciseSource for WgerClient {
    fn name(&self) -> &'static str {
        names::WGER
    }

    #[instrument(skip(self), fields(provider = names::WGER))]
    async fn list_minimal(
        &self,
        category: &str,
        limit: usize,
    ) -> ProviderResult<Vec<MinimalExercise>> {
        let muscle = muscle_id(category).ok_or_else(|| ProviderError::InvalidCategory {
            provider: names::WGER,
            category: category.to_owned(),
        })?;

        let request = self.get("exercise/").query(&[
            ("muscles", muscle.to_string()),
            ("language", self.language.to_string()),
            ("limit", limit.to_string()),
        ]);
        let context = format!("exercise listing for muscle {muscle}");
        let listing: Option<ListingResponse> = get_json(request, names::WGER, &context).await?;

        let entries: Vec<MinimalExercise> = listing
            .map(|l| l.results)
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .map(|entry| {
                MinimalExercise::new(ExerciseId::new(entry.id))
                    .with_hints(entry.muscles.unwrap_or_default().into_iter().map(muscle_label))
            })
            .collect();

        debug!(count = entries.len(), "wger listing decoded");
        Ok(entries)
    }

    #[instrument(skip(self), fields(provider = names::WGER))]
    async fn fetch_detail(&self, id: ExerciseId) -> ProviderResult<Option<ExerciseDetail>> {
        let request = self
            .get(&format!("exerciseinfo/{id}/"))
            .query(&[("language", self.language.to_string())]);
        let context = format!("exerciseinfo/{id}");
        let info: Option<InfoResponse> = get_json(request, names::WGER, &context).await?;
        Ok(info.map(|info| info.into_detail(self.language)))
    }
}
