// ABOUTME: Configuration management module for provider credentials and aggregation tuning
// ABOUTME: Loads everything from environment variables once, at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for `FitForge`
//!
//! - **Environment**: top-level `ServerConfig`, primary provider selection, validation
//! - **API providers**: the two provider secrets with redacted debug output
//! - **Aggregation**: fan-out width, per-call timeouts, default limits
//!
//! Adapters receive their configuration at construction; nothing reads the
//! environment after start-up.

/// Fan-out and timeout tuning
pub mod aggregation;
/// Provider credentials
pub mod api_providers;
/// Environment and server configuration
pub mod environment;

pub use aggregation::AggregatorConfig;
pub use api_providers::ProviderCredentials;
pub use environment::{PrimaryProviderKind, ServerConfig};
