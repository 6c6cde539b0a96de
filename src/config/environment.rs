// ABOUTME: Environment configuration for provider selection, endpoints, and locale
// ABOUTME: Assembles ServerConfig from environment variables and validates it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::aggregation::AggregatorConfig;
use super::api_providers::{ProviderCredentials, NINJAS_KEY_ENV};
use crate::constants::providers::{names, ninjas, pexels, wger};
use crate::errors::{AppError, AppResult};

/// Which primary exercise provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryProviderKind {
    /// wger exercise database (provider-supplied identifiers)
    #[default]
    Wger,
    /// API Ninjas (synthesized identifiers)
    Ninjas,
}

impl FromStr for PrimaryProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wger" => Ok(Self::Wger),
            "ninjas" | "api-ninjas" | "apininjas" => Ok(Self::Ninjas),
            other => Err(AppError::config_invalid(format!(
                "unknown primary provider '{other}' (expected wger or ninjas)"
            ))),
        }
    }
}

impl fmt::Display for PrimaryProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wger => write!(f, "{}", names::WGER),
            Self::Ninjas => write!(f, "{}", names::NINJAS),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Provider secrets
    pub credentials: ProviderCredentials,
    /// Selected primary provider
    pub primary: PrimaryProviderKind,
    /// Orchestrator tuning
    pub aggregator: AggregatorConfig,
    /// wger API base URL
    pub wger_base_url: String,
    /// API Ninjas base URL
    pub ninjas_base_url: String,
    /// Pexels API base URL
    pub pexels_base_url: String,
    /// wger language id used for listings and detail translations
    pub language: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            credentials: ProviderCredentials::default(),
            primary: PrimaryProviderKind::default(),
            aggregator: AggregatorConfig::default(),
            wger_base_url: wger::BASE_URL.to_owned(),
            ninjas_base_url: ninjas::BASE_URL.to_owned(),
            pexels_base_url: pexels::BASE_URL.to_owned(),
            language: wger::LANGUAGE_ENGLISH,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or the result fails [`Self::validate`]
    pub fn from_env() -> AppResult<Self> {
        let primary: PrimaryProviderKind =
            env_var_or("FITFORGE_PRIMARY_PROVIDER", names::WGER).parse()?;

        let config = Self {
            credentials: ProviderCredentials::from_env(primary),
            primary,
            aggregator: AggregatorConfig::from_env()?,
            wger_base_url: env_var_or("WGER_BASE_URL", wger::BASE_URL),
            ninjas_base_url: env_var_or("NINJAS_BASE_URL", ninjas::BASE_URL),
            pexels_base_url: env_var_or("PEXELS_BASE_URL", pexels::BASE_URL),
            language: env_parse_or("WGER_LANGUAGE", wger::LANGUAGE_ENGLISH)?,
        };
        config.validate()?;

        info!(
            primary = %config.primary,
            image_enrichment = config.credentials.image_enabled(),
            fan_out_width = config.aggregator.fan_out_width,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if aggregation bounds are violated, a base URL is not
    /// HTTP(S), or API Ninjas is selected without a key
    pub fn validate(&self) -> AppResult<()> {
        self.aggregator.validate()?;

        for (label, url) in [
            ("WGER_BASE_URL", &self.wger_base_url),
            ("NINJAS_BASE_URL", &self.ninjas_base_url),
            ("PEXELS_BASE_URL", &self.pexels_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::config_invalid(format!(
                    "{label} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.primary == PrimaryProviderKind::Ninjas
            && self.credentials.primary_api_key.is_none()
        {
            return Err(AppError::config_missing(NINJAS_KEY_ENV));
        }
        if self.language == 0 {
            return Err(AppError::config_invalid("WGER_LANGUAGE must be positive"));
        }
        Ok(())
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, or return the default when it is unset
pub(crate) fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("{key}: cannot parse '{raw}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}
