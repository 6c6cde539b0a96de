// ABOUTME: Main library entry point for the FitForge exercise aggregator
// ABOUTME: Wires configuration, logging, the image lookup cache, and the aggregation orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # `FitForge`
//!
//! Aggregates exercise records from a primary workout provider (wger or
//! API Ninjas), enriches them with images from a secondary provider (Pexels),
//! and delivers one deduplicated, sorted result set.
//!
//! ## Architecture
//!
//! - **Providers**: adapters live in the `fitforge-providers` crate
//! - **Models**: `Record` and friends live in the `fitforge-core` crate
//! - **Aggregator**: two-phase fan-out/fan-in orchestration
//! - **Cache**: process-wide image lookup memo shared by all aggregations
//! - **Config**: environment-only configuration injected at construction
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitforge::aggregator::Aggregator;
//! use fitforge::config::ServerConfig;
//! use fitforge::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let aggregator = Aggregator::from_config(&config);
//!
//!     let keys = vec!["chest".to_owned(), "biceps".to_owned()];
//!     let records = aggregator.aggregate(&keys, 10).await;
//!     println!("{} exercises", records.len());
//!     Ok(())
//! }
//! ```

/// Two-phase aggregation orchestrator
pub mod aggregator;

/// Image lookup cache shared across aggregations
pub mod cache;

/// Environment-based configuration
pub mod config;

/// Application constants (re-exported from `fitforge-core`)
pub mod constants;

/// Unified error handling (re-exported from `fitforge-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain models (re-exported from `fitforge-core`)
pub mod models;

/// Text normalization helpers
pub mod utils;

/// Provider adapters (re-exported from `fitforge-providers`)
pub use fitforge_providers as providers;
