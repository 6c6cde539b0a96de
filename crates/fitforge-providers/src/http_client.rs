// ABOUTME: Shared HTTP client with connection pooling for provider API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

use crate::constants::aggregation::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{ProviderError, ProviderResult};

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(Duration, Duration)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before any adapter takes the shared client.
/// If not called, the defaults from `constants::aggregation` are used.
pub fn initialize_shared_client(timeout: Duration, connect_timeout: Duration) {
    let _ = CLIENT_TIMEOUTS.set((timeout, connect_timeout));
}

/// Falls back to a default client if the TLS backend cannot be initialized
/// with the requested settings
fn build_client(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("fitforge/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Get the shared HTTP client for provider API calls
///
/// This client uses connection pooling and configured timeouts.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS.get().copied().unwrap_or((
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        ));
        build_client(timeout, connect_timeout)
    })
}

/// Send a GET request and decode its JSON body
///
/// A 404 yields `Ok(None)`. Any other non-success status, an empty body, or a
/// body that does not decode into `T` is an error.
pub(crate) async fn get_json<T>(
    request: RequestBuilder,
    provider: &'static str,
    context: &str,
) -> ProviderResult<Option<T>>
where
    T: DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, context, &e))?;

    let status = response.status();
    debug!(provider, context, status = status.as_u16(), "Provider response received");

    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            provider,
            context: context.to_owned(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, context, &e))?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ProviderError::Decode {
            provider,
            context: context.to_owned(),
            message: "empty response body".to_owned(),
        });
    }

    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| ProviderError::Decode {
            provider,
            context: context.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve the same raw HTTP response to every connection, return the base URL
    async fn serve(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut chunk = [0_u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    async fn fetch(base_url: &str) -> ProviderResult<Option<Value>> {
        let client = Client::builder().no_proxy().build().unwrap();
        let request = client.get(format!("{base_url}/exerciseinfo/7/"));
        get_json(request, "wger", "exerciseinfo/7").await
    }

    #[tokio::test]
    async fn test_success_decodes_body() {
        let base = serve("200 OK", r#"{"id": 7}"#).await;
        let value = fetch(&base).await.unwrap();
        assert_eq!(value, Some(serde_json::json!({ "id": 7 })));
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let base = serve("404 Not Found", r#"{"detail": "Not found."}"#).await;
        assert!(fetch(&base).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_other_status_is_http_status_error() {
        let base = serve("503 Service Unavailable", "").await;
        let err = fetch(&base).await.unwrap_err();
        assert!(
            matches!(
                err,
                ProviderError::HttpStatus {
                    provider: "wger",
                    status: 503,
                    ..
                }
            ),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_empty_body_is_decode_error() {
        let base = serve("200 OK", "  ").await;
        let err = fetch(&base).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }), "{err:?}");
        assert!(err.to_string().contains("empty response body"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let base = serve("200 OK", r#"{"results": [{"id": "#).await;
        let err = fetch(&base).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch(&format!("http://{addr}")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport { .. }), "{err:?}");
    }
}
