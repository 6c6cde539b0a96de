// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains free-text normalization used by records and the image cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Markup stripping, whitespace collapsing, and cache-key normalization
pub mod text;
