// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides aggregator builders over the synthetic providers and key helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitforge`
//!
//! Everything here runs against the synthetic providers or a loopback
//! responder; no test touches the network.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use fitforge::aggregator::{Aggregator, ImageLookup};
use fitforge::cache::ImageCache;
use fitforge::config::AggregatorConfig;
use fitforge::models::Record;
use fitforge::providers::{
    ExerciseSource, ImageSource, SyntheticExerciseSource, SyntheticImageSource,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Per-call timeout used by tests; scripted delays above it count as timeouts
pub const TEST_TIMEOUT: Duration = Duration::from_millis(250);

/// Owned category keys
pub fn keys(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|k| (*k).to_owned()).collect()
}

/// Aggregator config with a short per-call timeout
pub fn test_config() -> AggregatorConfig {
    AggregatorConfig::default().with_request_timeout(TEST_TIMEOUT)
}

/// Aggregator over a synthetic primary, with optional synthetic images
pub fn aggregator(
    source: &Arc<SyntheticExerciseSource>,
    images: Option<&Arc<SyntheticImageSource>>,
) -> Aggregator {
    aggregator_with_cache(source, images, ImageCache::new())
}

/// Same as [`aggregator`] with an explicit (possibly shared) image cache
pub fn aggregator_with_cache(
    source: &Arc<SyntheticExerciseSource>,
    images: Option<&Arc<SyntheticImageSource>>,
    cache: ImageCache,
) -> Aggregator {
    let image_source = images.map(|i| Arc::clone(i) as Arc<dyn ImageSource>);
    Aggregator::new(
        Arc::clone(source) as Arc<dyn ExerciseSource>,
        ImageLookup::new(image_source, cache, TEST_TIMEOUT),
        test_config(),
    )
}

/// The chest/biceps catalog: 101 and 102 under chest, 102 and 103 under biceps
pub fn chest_biceps_source() -> SyntheticExerciseSource {
    SyntheticExerciseSource::new()
        .with_ids("chest", &[101, 102])
        .with_ids("biceps", &[102, 103])
        .with_text(101, "Push-up", "<p>Keep your body straight.</p>")
        .with_text(102, "bench press", "Press the bar &amp; lock out.")
        .with_text(103, "Concentration Curl", "Brace the elbow.")
}

/// Identifier → category tags of a result set
pub fn tags_by_id(records: &[Record]) -> BTreeMap<u64, Vec<String>> {
    records
        .iter()
        .map(|r| (r.id.get(), r.category_tags.iter().cloned().collect()))
        .collect()
}

/// Identifiers of a result set in output order
pub fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id.get()).collect()
}

/// One canned reply: request-target prefix, status line, JSON body
pub type Route = (&'static str, &'static str, &'static str);

/// HTTP client that never goes through a proxy, for loopback responders
pub fn loopback_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a loopback HTTP server answering from `routes` and return its base URL
///
/// The first route whose prefix matches the request target wins; anything
/// else gets a 404.
pub async fn canned_http_server(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(answer(stream, Arc::clone(&routes)));
        }
    });
    format!("http://{addr}")
}

async fn answer(mut stream: TcpStream, routes: Arc<Vec<Route>>) {
    let mut request = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&request);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let (status_line, body) = routes
        .iter()
        .find(|(prefix, _, _)| target.starts_with(prefix))
        .map_or(("404 Not Found", ""), |(_, status, body)| (*status, *body));
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
