// ABOUTME: Aggregation tuning constants for fan-out width, limits, and timeouts
// ABOUTME: Defaults keep outbound concurrency small to respect third-party rate limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default number of simultaneous outbound requests to one provider
pub const DEFAULT_FAN_OUT_WIDTH: usize = 4;

/// Upper bound accepted for the fan-out width
pub const MAX_FAN_OUT_WIDTH: usize = 16;

/// Default number of listing results requested per category
pub const DEFAULT_PER_CATEGORY_LIMIT: usize = 20;

/// Per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 12;

/// Connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Prefix of the placeholder name given to records without a usable title
pub const PLACEHOLDER_NAME_PREFIX: &str = "Exercise";
