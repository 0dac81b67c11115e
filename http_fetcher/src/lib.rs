pub mod mock;
pub mod ops;
pub mod reqwest_ops;

use std::time::Duration;

use core_types::RemoteApiSummary;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::ops::HttpOps;

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("HTTP request failed: {0}")]
    Network(String),
    #[error("HTTP request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("Failed to read response body: {0}")]
    BodyRead(String),
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

/// Fetch a JSON document with a single GET request and decode it.
///
/// The response body is read to the end and released before decoding. When
/// the request itself fails there is no response, so nothing is read or
/// released.
///
/// # Errors
///
/// * `FetchError::InvalidRequest`, `FetchError::Network` or
///   `FetchError::Timeout` when the request cannot be sent or answered.
/// * `FetchError::HttpStatus` when the status is not 2xx.
/// * `FetchError::BodyRead` or `FetchError::Timeout` when reading the body fails.
/// * `FetchError::Decode` when the body is not the expected JSON.
pub fn fetch_json<T: DeserializeOwned>(http: &dyn HttpOps, url: &str) -> Result<T, FetchError> {
    let mut response = http.get(url)?;

    let status = response.status();
    tracing::debug!(url, status, "Received response");
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus(status));
    }

    let body = response.read_body()?;
    drop(response);

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(url, error = %e, body_len = body.len(), "Response body is not valid JSON");
        FetchError::Decode(e.to_string())
    })
}

/// Fetch the summary document from the root of the remote API.
pub fn fetch_api_summary(http: &dyn HttpOps, url: &str) -> Result<RemoteApiSummary, FetchError> {
    fetch_json(http, url)
}
