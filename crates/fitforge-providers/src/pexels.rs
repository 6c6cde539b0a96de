// ABOUTME: Pexels photo search provider returning the best variant of the first hit
// ABOUTME: Construction fails without an API key so a missing key disables image lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pexels search adapter
//!
//! One `GET /search?query=..&per_page=1&orientation=landscape` per query.
//! The first photo's `src` variants are tried in the order landscape, large,
//! medium, tiny, original and the first non-empty one wins.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::constants::providers::{names, pexels};
use crate::core::ImageSource;
use crate::errors::ProviderResult;
use crate::http_client::get_json;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSource,
}

#[derive(Debug, Default, Deserialize)]
struct PhotoSource {
    #[serde(default)]
    original: Option<String>,
    #[serde(default)]
    large: Option<String>,
    #[serde(default)]
    medium: Option<String>,
    #[serde(default)]
    landscape: Option<String>,
    #[serde(default)]
    tiny: Option<String>,
}

impl PhotoSource {
    /// First non-empty variant in preference order
    fn preferred(self) -> Option<String> {
        [
            self.landscape,
            self.large,
            self.medium,
            self.tiny,
            self.original,
        ]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
    }
}

/// Pexels image search provider
pub struct PexelsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PexelsClient {
    /// Create a client with an explicit HTTP client and base URL
    ///
    /// Returns `None` for a missing or blank key.
    #[must_use]
    pub fn with_config(client: Client, base_url: String, api_key: Option<String>) -> Option<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())?;
        Some(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    /// Search text sent to Pexels for an exercise name
    #[must_use]
    pub fn search_text(query: &str) -> String {
        format!("{} {}", query.trim(), pexels::QUERY_SUFFIX)
    }
}

#[async_trait]
impl ImageSource for PexelsClient {
    fn name(&self) -> &'static str {
        names::PEXELS
    }

    #[instrument(skip(self), fields(provider = names::PEXELS))]
    async fn first_image(&self, query: &str) -> ProviderResult<Option<String>> {
        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", Self::search_text(query)),
                ("per_page", pexels::PER_PAGE.to_string()),
                ("orientation", pexels::ORIENTATION.to_owned()),
            ]);
        let context = format!("search '{query}'");
        let response: Option<SearchResponse> = get_json(request, names::PEXELS, &context).await?;

        Ok(response
            .and_then(|r| r.photos.into_iter().next())
            .and_then(|photo| photo.src.preferred()))
    }
}
