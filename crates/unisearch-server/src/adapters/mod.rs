//! Infrastructure Adapters
//!
//! Implementations of the `SearchProvider` port for upstream search APIs.

pub mod google;
pub mod naver;

// Re-exports
pub use google::GoogleSearch;
pub use naver::NaverSearch;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use std::time::Duration;

use unisearch::ProviderError;

/// Number of results requested from each provider
pub const RESULTS_PER_PROVIDER: u32 = 10;

/// Build the HTTP client shared by all adapters.
///
/// `timeout` bounds every provider round trip.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("unisearch/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn map_request_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::RequestFailed(err.to_string())
    }
}

/// Body read or decode failure; a deadline hit mid-body is still a timeout
fn map_body_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::ParseError(err.to_string())
    }
}

/// Item field that is `None` unless the upstream sent a JSON string.
///
/// One oddly typed field must not sink the whole response.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Turn a non-2xx response into a `ProviderError`, preferring the message
/// `extract` finds in a JSON error body over the raw body text.
fn map_http_error<F>(status: StatusCode, body: String, extract: F) -> ProviderError
where
    F: Fn(&serde_json::Value) -> Option<String>,
{
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| extract(&json))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body
            }
        });

    ProviderError::ApiError {
        status: status.as_u16(),
        message,
    }
}
