// ABOUTME: Exercise identifier type and the raw listing/detail payloads from providers
// ABOUTME: Includes the documented identity function for providers without ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Canonical identifier of one logical exercise across all aggregation stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(u64);

impl ExerciseId {
    /// Wrap a provider-supplied identifier
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Derive an identifier for providers that do not supply one
    ///
    /// The key tuple is `(name, muscle)`, each trimmed and lowercased, joined
    /// with `|` and hashed with SHA-256. The first eight digest bytes are read
    /// big-endian and the top bit is cleared so the value also fits an `i64`.
    ///
    /// The result is stable across processes and platforms. Distinct tuples can
    /// still collide; two exercises that collide are merged into one record.
    /// Prefer a provider-supplied identifier whenever one exists.
    #[must_use]
    pub fn synthesize(name: &str, muscle: &str) -> Self {
        let key = format!(
            "{}|{}",
            name.trim().to_lowercase(),
            muscle.trim().to_lowercase()
        );
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0_u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(prefix) & (u64::MAX >> 1))
    }
}

impl From<u64> for ExerciseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalExercise {
    /// Exercise identifier
    pub id: ExerciseId,
    /// Taxonomy hints reported by the provider (e.g. wger muscle ids)
    #[serde(default)]
    pub category_hints: Vec<String>,
}

impl MinimalExercise {
    /// Listing entry without taxonomy hints
    #[must_use]
    pub const fn new(id: ExerciseId) -> Self {
        Self {
            id,
            category_hints: Vec::new(),
        }
    }

    /// Attach taxonomy hints
    #[must_use]
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_hints = hints.into_iter().map(Into::into).collect();
        self
    }
}

/// Detail payload for one identifier, before text cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDetail {
    /// Display title as sent by the provider (may contain markup or be blank)
    pub name: String,
    /// Free-text description as sent by the provider (may contain markup)
    pub description: String,
    /// Image reference chosen by the provider adapter
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_is_case_and_whitespace_insensitive() {
        let a = ExerciseId::synthesize("Push-Up", "chest");
        let b = ExerciseId::synthesize("  push-up ", "CHEST");
        assert_eq!(a, b);
    }

    #[test]
    fn test_synthesize_depends_on_muscle() {
        let chest = ExerciseId::synthesize("Dips", "chest");
        let triceps = ExerciseId::synthesize("Dips", "triceps");
        assert_ne!(chest, triceps);
    }

    #[test]
    fn test_synthesize_fits_signed_range() {
        for name in ["a", "barbell curl", "incline hammer curls", "z"] {
            let id = ExerciseId::synthesize(name, "biceps");
            assert!(i64::try_from(id.get()).is_ok());
        }
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ExerciseId::new(101)).unwrap();
        assert_eq!(json, "101");
    }
}
