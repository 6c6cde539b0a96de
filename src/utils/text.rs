// ABOUTME: Free-text cleanup for provider names and descriptions
// ABOUTME: Strips HTML tags, decodes entities, collapses whitespace, and builds cache keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ExerciseId;
use fitforge_core::models::record::placeholder_name;

static TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());

/// Collapse every whitespace run to a single space and trim both ends
#[must_use]
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove markup from a provider text field
///
/// Tags become spaces so `a<br>b` reads `a b`, entities are decoded, and
/// whitespace is collapsed.
#[must_use]
pub fn strip_html(input: &str) -> String {
    let without_tags = TAG_PATTERN.as_ref().map_or_else(
        || strip_tags_by_scan(input),
        |pattern| pattern.replace_all(input, " ").into_owned(),
    );
    let decoded = html_escape::decode_html_entities(&without_tags);
    collapse_whitespace(&decoded)
}

fn strip_tags_by_scan(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                output.push(' ');
            }
            _ if !in_tag => output.push(ch),
            _ => {}
        }
    }
    output
}

/// Normalize a free-text query into an image cache key
#[must_use]
pub fn normalize_query(input: &str) -> String {
    collapse_whitespace(input).to_lowercase()
}

/// Display title for a record, falling back to `"Exercise {id}"` when blank
#[must_use]
pub fn display_name(raw: &str, id: ExerciseId) -> String {
    let cleaned = strip_html(raw);
    if cleaned.is_empty() {
        placeholder_name(id)
    } else {
        cleaned
    }
}
