// ABOUTME: Identifier index built at the category join barrier
// ABOUTME: Unions category tags and listing hints per identifier, independent of arrival order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ExerciseId, MinimalExercise};

/// Accumulated metadata for one identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    /// Requested category keys that listed this identifier
    pub tags: BTreeSet<String>,
    /// Taxonomy hints from the listings
    pub hints: BTreeSet<String>,
}

/// Identifier → accumulated tags, owned by one aggregation call
///
/// Merging is a set union per identifier, so it is commutative and
/// associative: any permutation of category responses produces the same
/// index. Iteration is ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: BTreeMap<ExerciseId, IndexEntry>,
}

impl CategoryIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one category listing
    pub fn merge(&mut self, category: &str, listing: &[MinimalExercise]) {
        for exercise in listing {
            let entry = self.entries.entry(exercise.id).or_default();
            entry.tags.insert(category.to_owned());
            entry.hints.extend(
                exercise
                    .category_hints
                    .iter()
                    .map(|hint| hint.trim().to_lowercase())
                    .filter(|hint| !hint.is_empty()),
            );
        }
    }

    /// Number of unique identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifier was discovered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metadata for one identifier
    #[must_use]
    pub fn get(&self, id: ExerciseId) -> Option<&IndexEntry> {
        self.entries.get(&id)
    }

    /// Consume the index for the detail fan-out
    pub fn into_entries(self) -> impl Iterator<Item = (ExerciseId, IndexEntry)> {
        self.entries.into_iter()
    }
}
