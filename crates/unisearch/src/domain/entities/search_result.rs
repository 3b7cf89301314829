//! SearchResult - the unified record every provider is mapped into

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::SearchSource;

/// One search hit, normalized across providers.
///
/// Field order here is the serialized field order. Missing provider fields
/// stay `None` and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub source: SearchSource,
}

impl SearchResult {
    pub fn new(source: SearchSource) -> Self {
        Self {
            title: None,
            url: None,
            content: None,
            source,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
