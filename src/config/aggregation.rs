// ABOUTME: Aggregation tuning configuration: fan-out width, per-call timeouts, default limit
// ABOUTME: Parsed from environment with validated bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::environment::env_parse_or;
use crate::constants::aggregation::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FAN_OUT_WIDTH, DEFAULT_PER_CATEGORY_LIMIT,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_FAN_OUT_WIDTH,
};
use crate::errors::{AppError, AppResult};

/// Orchestrator tuning knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Maximum simultaneous outbound requests per fan-out phase
    pub fan_out_width: usize,
    /// Upper bound on any single provider call
    pub request_timeout: Duration,
    /// TCP connect timeout for the shared HTTP client
    pub connect_timeout: Duration,
    /// Limit used when the caller does not pass one
    pub default_per_category_limit: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            fan_out_width: DEFAULT_FAN_OUT_WIDTH,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            default_per_category_limit: DEFAULT_PER_CATEGORY_LIMIT,
        }
    }
}

impl AggregatorConfig {
    /// Load aggregation configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a valid number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            fan_out_width: env_parse_or("FITFORGE_FAN_OUT_WIDTH", DEFAULT_FAN_OUT_WIDTH)?,
            request_timeout: Duration::from_secs(env_parse_or(
                "FITFORGE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            connect_timeout: Duration::from_secs(env_parse_or(
                "FITFORGE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            default_per_category_limit: DEFAULT_PER_CATEGORY_LIMIT,
        })
    }

    /// Override the fan-out width
    #[must_use]
    pub const fn with_fan_out_width(mut self, width: usize) -> Self {
        self.fan_out_width = width;
        self
    }

    /// Override the per-call timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the fan-out width is outside `1..=16` or a timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_FAN_OUT_WIDTH).contains(&self.fan_out_width) {
            return Err(AppError::out_of_range(format!(
                "fan_out_width must be between 1 and {MAX_FAN_OUT_WIDTH}, got {}",
                self.fan_out_width
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::out_of_range("request_timeout must be positive"));
        }
        if self.connect_timeout.is_zero() {
            return Err(AppError::out_of_range("connect_timeout must be positive"));
        }
        Ok(())
    }
}
