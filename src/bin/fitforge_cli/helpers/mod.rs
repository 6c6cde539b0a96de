// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for fitforge-cli
// ABOUTME: Output formatting for records and aggregation reports

pub mod display;
