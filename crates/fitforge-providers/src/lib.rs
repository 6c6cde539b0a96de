// ABOUTME: Exercise and image provider implementations for wger, API Ninjas, and Pexels
// ABOUTME: Core provider traits, shared HTTP client, and in-memory synthetic providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise data and image provider adapters.
//!
//! Primary providers implement [`ExerciseSource`] (category listing plus
//! per-identifier detail). Secondary image providers implement
//! [`ImageSource`]. Adapters report failures as [`ProviderError`]; turning
//! those into soft outcomes is the aggregator's job.

// Re-export fitforge-core modules so adapters can keep `use crate::errors::*` etc.
pub use fitforge_core::constants;
pub use fitforge_core::errors;
pub use fitforge_core::models;

/// Core provider traits
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;

// Provider implementations (conditionally compiled)

/// API Ninjas exercises provider (synthesized identifiers)
#[cfg(feature = "provider-ninjas")]
pub mod ninjas;
/// Pexels photo search image provider
#[cfg(feature = "provider-pexels")]
pub mod pexels;
/// In-memory providers with scripted latency and failures
#[cfg(feature = "provider-synthetic")]
pub mod synthetic;
/// wger exercise database provider
#[cfg(feature = "provider-wger")]
pub mod wger;

// Re-export key types for convenience

pub use crate::core::{ExerciseSource, ImageSource};
pub use fitforge_core::errors::provider::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
#[cfg(feature = "provider-ninjas")]
pub use ninjas::NinjasClient;
#[cfg(feature = "provider-pexels")]
pub use pexels::PexelsClient;
#[cfg(feature = "provider-synthetic")]
pub use synthetic::{SyntheticExerciseSource, SyntheticImageSource};
#[cfg(feature = "provider-wger")]
pub use wger::WgerClient;
