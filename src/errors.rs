// ABOUTME: Unified error handling re-exported from the fitforge-core crate
// ABOUTME: Keeps `crate::errors::*` import paths stable for the application modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types are defined in `fitforge-core` so the provider adapters can
//! share them. This module re-exports them for the application crate.

pub use fitforge_core::errors::{
    AppError, AppResult, ErrorCode, ProviderError, ProviderResult,
};
