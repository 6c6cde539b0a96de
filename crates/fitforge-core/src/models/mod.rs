// ABOUTME: Core data models shared between providers and the aggregator
// ABOUTME: Exercise identifiers, provider payloads, and the canonical output record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Identifiers and the raw payloads returned by primary providers
pub mod exercise;

/// Canonical output record and per-category grouping
pub mod record;

pub use exercise::{ExerciseDetail, ExerciseId, MinimalExercise};
pub use record::{group_by_category, sort_records, CategorySection, Record};
