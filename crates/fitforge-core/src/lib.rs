// ABOUTME: Core types and constants for the FitForge exercise aggregator
// ABOUTME: Foundation crate with error handling, constants, and the record model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitForge` Core
//!
//! Foundation crate providing shared types and constants for the `FitForge`
//! exercise aggregator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Endpoints, timeouts, and fan-out defaults organized by domain
//! - **models**: Exercise identifiers, provider payloads, and the canonical `Record`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`ExerciseId`, `Record`, `CategorySection`, provider payloads)
pub mod models;
