//! Search Application Service (Use Case)
//!
//! Fans one query out to Naver blog, Naver news and Google, then
//! concatenates the results in that fixed order.

use async_trait::async_trait;
use std::sync::Arc;

use unisearch::{
    DomainError, NaverKind, ProviderError, SearchProvider, SearchQuery, SearchResult,
    SearchSource, UnifiedSearch,
};

use crate::adapters::{build_client, GoogleSearch, NaverSearch};
use crate::config::AppConfig;

/// Aggregator over the three provider adapters
#[derive(Clone)]
pub struct SearchService {
    naver_blog: Arc<dyn SearchProvider>,
    naver_news: Arc<dyn SearchProvider>,
    google: Arc<dyn SearchProvider>,
}

impl SearchService {
    pub fn new(
        naver_blog: Arc<dyn SearchProvider>,
        naver_news: Arc<dyn SearchProvider>,
        google: Arc<dyn SearchProvider>,
    ) -> Self {
        Self {
            naver_blog,
            naver_news,
            google,
        }
    }

    /// Wire the real adapters around one shared HTTP client
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(config.provider_timeout)?;

        Ok(Self::new(
            Arc::new(NaverSearch::new(
                client.clone(),
                config.naver.clone(),
                NaverKind::Blog,
            )),
            Arc::new(NaverSearch::new(
                client.clone(),
                config.naver.clone(),
                NaverKind::News,
            )),
            Arc::new(GoogleSearch::new(client, config.google.clone())),
        ))
    }

    /// Run the enabled providers and merge their results.
    ///
    /// Providers run concurrently; the output is always blog, then news,
    /// then Google, each in the provider's own order.
    pub async fn search_results(&self, query: &SearchQuery) -> Vec<SearchResult> {
        let (blog, news, google) = tokio::join!(
            run_provider(self.naver_blog.as_ref(), query.use_naver_blog, &query.query),
            run_provider(self.naver_news.as_ref(), query.use_naver_news, &query.query),
            run_provider(self.google.as_ref(), query.use_google_search, &query.query),
        );

        tracing::info!(
            query = %query.query,
            naver_blog = blog.len(),
            naver_news = news.len(),
            google = google.len(),
            "Unified search completed"
        );

        let mut results = Vec::with_capacity(blog.len() + news.len() + google.len());
        results.extend(blog);
        results.extend(news);
        results.extend(google);
        results
    }
}

#[async_trait]
impl UnifiedSearch for SearchService {
    async fn search(&self, query: &SearchQuery) -> Result<String, DomainError> {
        let results = self.search_results(query).await;
        Ok(serde_json::to_string_pretty(&results)?)
    }
}

/// Call one provider, absorbing its failure into an empty list
async fn run_provider(
    provider: &dyn SearchProvider,
    enabled: bool,
    query: &str,
) -> Vec<SearchResult> {
    if !enabled {
        return Vec::new();
    }

    match provider.search(query).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!("{}", provider_failure_message(provider.source(), &err));
            Vec::new()
        }
    }
}

/// Log line for a failed provider call
fn provider_failure_message(source: SearchSource, err: &ProviderError) -> String {
    match source {
        SearchSource::GoogleSearch => format!("{} error: {}", source, err),
        SearchSource::NaverBlog | SearchSource::NaverNews => {
            format!("{} search error: {}", source, err)
        }
    }
}
