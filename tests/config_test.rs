// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Env-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use anyhow::Result;
use fitforge::config::{AggregatorConfig, PrimaryProviderKind, ProviderCredentials, ServerConfig};
use fitforge::errors::ErrorCode;
use serial_test::serial;

const VARS: &[&str] = &[
    "FITFORGE_PRIMARY_PROVIDER",
    "FITFORGE_FAN_OUT_WIDTH",
    "FITFORGE_REQUEST_TIMEOUT_SECS",
    "FITFORGE_CONNECT_TIMEOUT_SECS",
    "WGER_API_TOKEN",
    "NINJAS_API_KEY",
    "PEXELS_API_KEY",
    "WGER_BASE_URL",
    "NINJAS_BASE_URL",
    "PEXELS_BASE_URL",
    "WGER_LANGUAGE",
];

/// Helper: start every test from a clean environment
fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() -> Result<()> {
    clear_env();
    let config = ServerConfig::from_env()?;

    assert_eq!(config.primary, PrimaryProviderKind::Wger);
    assert_eq!(config.aggregator, AggregatorConfig::default());
    assert_eq!(config.wger_base_url, "https://wger.de/api/v2");
    assert_eq!(config.language, 2);
    assert!(!config.credentials.image_enabled());
    Ok(())
}

#[test]
#[serial]
fn test_secrets_and_overrides_are_read() -> Result<()> {
    clear_env();
    env::set_var("WGER_API_TOKEN", "wger-token");
    env::set_var("PEXELS_API_KEY", " pexels-key ");
    env::set_var("FITFORGE_FAN_OUT_WIDTH", "8");
    env::set_var("FITFORGE_REQUEST_TIMEOUT_SECS", "3");
    env::set_var("PEXELS_BASE_URL", "http://127.0.0.1:9000/v1");

    let config = ServerConfig::from_env()?;
    clear_env();

    assert_eq!(config.credentials.primary_api_key.as_deref(), Some("wger-token"));
    assert_eq!(config.credentials.image_api_key.as_deref(), Some("pexels-key"));
    assert_eq!(config.aggregator.fan_out_width, 8);
    assert_eq!(config.aggregator.request_timeout, Duration::from_secs(3));
    assert_eq!(config.pexels_base_url, "http://127.0.0.1:9000/v1");
    Ok(())
}

#[test]
#[serial]
fn test_blank_image_key_disables_enrichment() -> Result<()> {
    clear_env();
    env::set_var("PEXELS_API_KEY", "   ");
    let config = ServerConfig::from_env()?;
    clear_env();

    assert!(!config.credentials.image_enabled());
    Ok(())
}

#[test]
#[serial]
fn test_ninjas_primary_reads_its_own_key() -> Result<()> {
    clear_env();
    env::set_var("FITFORGE_PRIMARY_PROVIDER", "ninjas");
    env::set_var("WGER_API_TOKEN", "not-used");
    env::set_var("NINJAS_API_KEY", "ninjas-key");
    let config = ServerConfig::from_env()?;
    clear_env();

    assert_eq!(config.primary, PrimaryProviderKind::Ninjas);
    assert_eq!(config.credentials.primary_api_key.as_deref(), Some("ninjas-key"));
    Ok(())
}

#[test]
#[serial]
fn test_ninjas_primary_without_key_is_rejected() {
    clear_env();
    env::set_var("FITFORGE_PRIMARY_PROVIDER", "ninjas");
    let err = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains("NINJAS_API_KEY"));
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();
    env::set_var("FITFORGE_FAN_OUT_WIDTH", "many");
    let unparsable = ServerConfig::from_env().unwrap_err();
    env::set_var("FITFORGE_FAN_OUT_WIDTH", "0");
    let out_of_range = ServerConfig::from_env().unwrap_err();
    env::remove_var("FITFORGE_FAN_OUT_WIDTH");
    env::set_var("FITFORGE_PRIMARY_PROVIDER", "strava");
    let unknown_provider = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(unparsable.code, ErrorCode::ConfigInvalid);
    assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange);
    assert_eq!(unknown_provider.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_credentials_debug_never_prints_secrets() {
    let creds = ProviderCredentials::new(Some("abc123".to_owned()), Some("xyz789".to_owned()));
    let rendered = format!("{creds:?}");
    assert!(!rendered.contains("abc123"));
    assert!(!rendered.contains("xyz789"));
}
