// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitforge-cli
// ABOUTME: Provides the aggregate and categories commands

pub mod aggregate;
pub mod categories;
