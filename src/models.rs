// ABOUTME: Domain models re-exported from the fitforge-core crate
// ABOUTME: Exercise identifiers, provider payloads, and the canonical Record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitforge_core::models::{
    group_by_category, sort_records, CategorySection, ExerciseDetail, ExerciseId,
    MinimalExercise, Record,
};
