// ABOUTME: Application constants re-exported from the fitforge-core crate
// ABOUTME: Endpoints, timeouts, fan-out width, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults live in `fitforge-core`; environment overrides are read
//! by [`crate::config`].

pub use fitforge_core::constants::{aggregation, providers, service_names};
