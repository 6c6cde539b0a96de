// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Provider endpoints, request timeouts, and aggregation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Fan-out width, limits, and request timeouts for aggregation
pub mod aggregation;

/// Provider names, base URLs, and request parameters
pub mod providers;

/// Service identity strings used in logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const FITFORGE: &str = "fitforge";
}
