// ABOUTME: Canonical exercise record delivered to callers and per-category grouping
// ABOUTME: Enforces write-once images and the case-insensitive display ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::exercise::ExerciseId;
use crate::constants::aggregation::PLACEHOLDER_NAME_PREFIX;

/// One deduplicated exercise in a completed aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique within one result set
    pub id: ExerciseId,
    /// Display title, never empty
    pub name: String,
    /// Markup-free description, may be empty
    pub description: String,
    /// Every requested category key under which this id was listed
    pub category_tags: BTreeSet<String>,
    /// Taxonomy hints reported by the provider listings
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub muscle_hints: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// Suggested number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_sets: Option<u32>,
    /// Suggested repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_reps: Option<u32>,
}

impl Record {
    /// Create a record with the given title and description and no image
    #[must_use]
    pub fn new(id: ExerciseId, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            category_tags: BTreeSet::new(),
            muscle_hints: BTreeSet::new(),
            image_url: None,
            recommended_sets: None,
            recommended_reps: None,
        }
    }

    /// Record for an identifier whose detail could not be fetched
    #[must_use]
    pub fn placeholder(id: ExerciseId) -> Self {
        Self::new(id, placeholder_name(id), String::new())
    }

    /// Attach category tags
    #[must_use]
    pub fn with_tags(mut self, tags: BTreeSet<String>) -> Self {
        self.category_tags = tags;
        self
    }

    /// Attach taxonomy hints
    #[must_use]
    pub fn with_hints(mut self, hints: BTreeSet<String>) -> Self {
        self.muscle_hints = hints;
        self
    }

    /// Resolved image, if any
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Set the image if none is set yet
    ///
    /// Returns `false` and leaves the record unchanged when an image is already
    /// present or the candidate is blank.
    pub fn attach_image(&mut self, url: impl Into<String>) -> bool {
        if self.image_url.is_some() {
            return false;
        }
        let url = url.into();
        if url.trim().is_empty() {
            return false;
        }
        self.image_url = Some(url);
        true
    }

    /// Key used for the final listing order
    fn sort_key(&self) -> (String, ExerciseId) {
        (self.name.to_lowercase(), self.id)
    }
}

/// Placeholder display name for an identifier
#[must_use]
pub fn placeholder_name(id: ExerciseId) -> String {
    format!("{PLACEHOLDER_NAME_PREFIX} {id}")
}

/// Sort by case-insensitive name, then id, ascending
///
/// Lowercasing uses Unicode case mapping without locale tailoring, so the
/// order is the same on every host.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(Record::sort_key);
}

/// Records listed under one requested category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    /// Normalized category key
    pub category: String,
    /// Records tagged with this category, in aggregate order
    pub records: Vec<Record>,
}

/// Group records into one section per requested category
///
/// Keys are trimmed and lowercased the same way the aggregator tags records.
/// Sections follow the order of `categories` (blank and repeated keys are
/// skipped). A record tagged with several categories appears in each of
/// those sections.
#[must_use]
pub fn group_by_category(records: &[Record], categories: &[String]) -> Vec<CategorySection> {
    let mut seen = BTreeSet::new();
    categories
        .iter()
        .map(|key| key.trim().to_lowercase())
        .filter(|key| !key.is_empty() && seen.insert(key.clone()))
        .map(|key| {
            let records = records
                .iter()
                .filter(|record| record.category_tags.contains(&key))
                .cloned()
                .collect();
            CategorySection {
                category: key,
                records,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str, tags: &[&str]) -> Record {
        Record::new(ExerciseId::new(id), name.to_owned(), String::new())
            .with_tags(tags.iter().map(|t| (*t).to_owned()).collect())
    }

    #[test]
    fn test_placeholder_uses_id() {
        let placeholder = Record::placeholder(ExerciseId::new(103));
        assert_eq!(placeholder.name, "Exercise 103");
        assert!(placeholder.description.is_empty());
        assert!(placeholder.image_url().is_none());
    }

    #[test]
    fn test_image_is_write_once() {
        let mut r = record(1, "Curl", &[]);
        assert!(!r.attach_image("   "));
        assert!(r.attach_image("https://img/first.jpg"));
        assert!(!r.attach_image("https://img/second.jpg"));
        assert_eq!(r.image_url(), Some("https://img/first.jpg"));
    }

    #[test]
    fn test_sort_is_case_insensitive_with_id_tiebreak() {
        let mut records = vec![
            record(3, "bench press", &[]),
            record(2, "Arnold Press", &[]),
            record(9, "Bench Press", &[]),
            record(1, "Bench press", &[]),
        ];
        sort_records(&mut records);
        let ids: Vec<u64> = records.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3, 9]);
    }

    #[test]
    fn test_group_by_category_follows_request_order() {
        let records = vec![
            record(101, "A", &["chest"]),
            record(102, "B", &["biceps", "chest"]),
            record(103, "C", &["biceps"]),
        ];
        let keys = vec![
            "biceps".to_owned(),
            "chest".to_owned(),
            "biceps".to_owned(),
            "legs".to_owned(),
        ];
        let sections = group_by_category(&records, &keys);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].category, "biceps");
        assert_eq!(sections[0].records.len(), 2);
        assert_eq!(sections[1].category, "chest");
        assert_eq!(sections[1].records[0].id.get(), 101);
        assert!(sections[2].records.is_empty());
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(record(5, "Squat", &["quads"])).unwrap();
        assert!(json.get("image_url").is_none());
        assert!(json.get("recommended_sets").is_none());
        assert_eq!(json["category_tags"][0], "quads");
    }
}
