// ABOUTME: Provider names, API base URLs, and fixed request parameters
// ABOUTME: Covers wger, API Ninjas, and Pexels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Provider name constants used in logs and errors
pub mod names {
    /// wger exercise database
    pub const WGER: &str = "wger";
    /// API Ninjas exercises endpoint
    pub const NINJAS: &str = "api-ninjas";
    /// Pexels photo search
    pub const PEXELS: &str = "pexels";
    /// In-memory provider used in tests and offline runs
    pub const SYNTHETIC: &str = "synthetic";
}

/// wger REST API
pub mod wger {
    /// Default API base URL
    pub const BASE_URL: &str = "https://wger.de/api/v2";
    /// Language id for English content
    pub const LANGUAGE_ENGLISH: u32 = 2;
}

/// API Ninjas REST API
pub mod ninjas {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.api-ninjas.com/v1";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "X-Api-Key";
}

/// Pexels photo search API
pub mod pexels {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.pexels.com/v1";
    /// Suffix appended to the exercise name when searching
    pub const QUERY_SUFFIX: &str = "gym exercise";
    /// Orientation hint sent with every search
    pub const ORIENTATION: &str = "landscape";
    /// Results requested per search
    pub const PER_PAGE: u32 = 1;
}
