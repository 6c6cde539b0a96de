// ABOUTME: Provider credential configuration for the primary and image providers
// ABOUTME: Blank secrets count as absent and Debug output never prints a secret
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;

use super::environment::PrimaryProviderKind;

/// Environment variable holding the optional wger API token
pub const WGER_TOKEN_ENV: &str = "WGER_API_TOKEN";
/// Environment variable holding the API Ninjas key
pub const NINJAS_KEY_ENV: &str = "NINJAS_API_KEY";
/// Environment variable holding the Pexels key
pub const PEXELS_KEY_ENV: &str = "PEXELS_API_KEY";

/// The two opaque provider secrets
///
/// A missing image key disables image enrichment entirely. That decision is
/// made once, from [`ProviderCredentials::image_enabled`], before any fan-out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// Secret for the primary exercise provider
    pub primary_api_key: Option<String>,
    /// Secret for the secondary image provider
    pub image_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Build credentials, treating blank values as absent
    #[must_use]
    pub fn new(primary_api_key: Option<String>, image_api_key: Option<String>) -> Self {
        Self {
            primary_api_key: non_blank(primary_api_key),
            image_api_key: non_blank(image_api_key),
        }
    }

    /// Load credentials for the selected primary provider from environment
    #[must_use]
    pub fn from_env(primary: PrimaryProviderKind) -> Self {
        let primary_env = match primary {
            PrimaryProviderKind::Wger => WGER_TOKEN_ENV,
            PrimaryProviderKind::Ninjas => NINJAS_KEY_ENV,
        };
        Self::new(env::var(primary_env).ok(), env::var(PEXELS_KEY_ENV).ok())
    }

    /// Whether image enrichment is enabled
    #[must_use]
    pub const fn image_enabled(&self) -> bool {
        self.image_api_key.is_some()
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("primary_api_key", &redact(self.primary_api_key.as_ref()))
            .field("image_api_key", &redact(self.image_api_key.as_ref()))
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

const fn redact(value: Option<&String>) -> &'static str {
    if value.is_some() {
        "[REDACTED]"
    } else {
        "<unset>"
    }
}
