//! Unisearch API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;

use unisearch::{SearchQuery, SearchResult};

const API_KEY_HEADER: &str = "key";

/// API Client for Unisearch
pub struct UnisearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl UnisearchClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection and key with the health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .context("Failed to connect to Unisearch API")?;
        Ok(resp.status().is_success())
    }

    /// Run a unified search
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(url = %url, query = %query.query, "Sending search request");

        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(query)
            .send()
            .await
            .context("Failed to connect to Unisearch API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, error_message(&body));
        }

        let results: Vec<SearchResult> = resp.json().await.context("Failed to parse response")?;

        Ok(results)
    }
}

/// Pull `detail` or `error` out of an error body, else return it as-is
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .or_else(|| json.get("error"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
