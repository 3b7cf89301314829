//! SearchSource - which adapter produced a result

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag identifying the adapter that produced a [`SearchResult`](crate::SearchResult).
///
/// Serialized as one of exactly three literal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SearchSource {
    #[serde(rename = "Naver Blog")]
    NaverBlog,
    #[serde(rename = "Naver News")]
    NaverNews,
    #[serde(rename = "Google Search")]
    GoogleSearch,
}

impl SearchSource {
    /// All sources in aggregation order.
    pub const ALL: [SearchSource; 3] = [
        SearchSource::NaverBlog,
        SearchSource::NaverNews,
        SearchSource::GoogleSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::NaverBlog => "Naver Blog",
            SearchSource::NaverNews => "Naver News",
            SearchSource::GoogleSearch => "Google Search",
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
