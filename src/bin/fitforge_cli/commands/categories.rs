// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Category listing command for fitforge-cli
// ABOUTME: Prints the muscle-group keys the wger provider accepts

use fitforge::providers::wger::{known_categories, muscle_id};

/// Print every known category key with its wger muscle id
pub fn run() {
    println!("{:<12} WGER MUSCLE ID", "CATEGORY");
    for category in known_categories() {
        let id = muscle_id(category).map_or_else(|| "-".to_owned(), |id| id.to_string());
        println!("{category:<12} {id}");
    }
}
