// ABOUTME: Structured error types for exercise and image provider operations
// ABOUTME: Distinguishes transport, timeout, status, and decode failures per provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Errors raised by a single provider call
///
/// Every variant is a soft failure from the aggregator's point of view: the
/// affected unit of work degrades to its placeholder outcome.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Connection failure or other transport-level problem
    #[error("{provider} transport error during {context}: {message}")]
    Transport {
        /// Provider name
        provider: &'static str,
        /// Endpoint or operation being performed
        context: String,
        /// Underlying error message
        message: String,
    },

    /// The request did not complete within the configured timeout
    #[error("{provider} request timed out during {context}")]
    Timeout {
        /// Provider name
        provider: &'static str,
        /// Endpoint or operation being performed
        context: String,
    },

    /// Non-success HTTP status
    #[error("{provider} returned HTTP {status} for {context}")]
    HttpStatus {
        /// Provider name
        provider: &'static str,
        /// Endpoint or operation being performed
        context: String,
        /// HTTP status code
        status: u16,
    },

    /// Response body did not match the expected shape
    #[error("{provider} response could not be decoded for {context}: {message}")]
    Decode {
        /// Provider name
        provider: &'static str,
        /// Endpoint or operation being performed
        context: String,
        /// Decoder message
        message: String,
    },

    /// The category key cannot be expressed for this provider
    #[error("{provider} does not know category '{category}'")]
    InvalidCategory {
        /// Provider name
        provider: &'static str,
        /// Category key as supplied by the caller
        category: String,
    },
}

impl ProviderError {
    /// Name of the provider that raised the error
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Transport { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::Decode { provider, .. }
            | Self::InvalidCategory { provider, .. } => provider,
        }
    }

    /// Whether the failure was caused by a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Map a `reqwest` error into the matching variant
    #[cfg(feature = "provider-errors")]
    #[must_use]
    pub fn from_reqwest(provider: &'static str, context: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider,
                context: context.to_owned(),
            }
        } else if error.is_decode() {
            Self::Decode {
                provider,
                context: context.to_owned(),
                message: error.to_string(),
            }
        } else if let Some(status) = error.status() {
            Self::HttpStatus {
                provider,
                context: context.to_owned(),
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                provider,
                context: context.to_owned(),
                message: error.to_string(),
            }
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
