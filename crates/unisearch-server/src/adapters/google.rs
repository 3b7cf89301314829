//! Google Custom Search JSON API adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use unisearch::{ProviderError, SearchProvider, SearchResult, SearchSource};

use super::{
    lenient_string, map_body_error, map_http_error, map_request_error, RESULTS_PER_PROVIDER,
};
use crate::config::GoogleConfig;

/// Google Custom Search (`customsearch/v1`) client
#[derive(Clone)]
pub struct GoogleSearch {
    client: Client,
    config: GoogleConfig,
}

impl GoogleSearch {
    pub fn new(client: Client, config: GoogleConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    fn source(&self) -> SearchSource {
        SearchSource::GoogleSearch
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if !self.config.has_credentials() {
            return Err(ProviderError::MissingCredentials(
                "GOOGLE_API_KEY / GOOGLE_CSE_ID".to_string(),
            ));
        }

        tracing::debug!(query = %query, "Google search request");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&GoogleQuery {
                key: &self.config.api_key,
                cx: &self.config.cse_id,
                q: query,
                num: RESULTS_PER_PROVIDER,
            })
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body, |json| {
                json.get("error")
                    .and_then(|err| err.get("message"))
                    .and_then(|msg| msg.as_str())
                    .map(|msg| msg.to_string())
            }));
        }

        let payload: GoogleResponse = response
            .json()
            .await
            .map_err(map_body_error)?;

        Ok(payload
            .items
            .unwrap_or_default()
            .into_iter()
            .map(SearchResult::from)
            .collect())
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct GoogleQuery<'a> {
    key: &'a str,
    cx: &'a str,
    q: &'a str,
    num: u32,
}

#[derive(Deserialize)]
struct GoogleResponse {
    items: Option<Vec<GoogleItem>>,
}

#[derive(Deserialize)]
struct GoogleItem {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    snippet: Option<String>,
}

impl From<GoogleItem> for SearchResult {
    fn from(item: GoogleItem) -> Self {
        Self {
            title: item.title,
            url: item.link,
            content: item.snippet,
            source: SearchSource::GoogleSearch,
        }
    }
}
