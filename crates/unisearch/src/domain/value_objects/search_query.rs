//! SearchQuery - one aggregation request

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use super::SearchSource;
use crate::domain::errors::DomainError;

/// Query text plus per-provider toggles.
///
/// Every toggle defaults to `true` when omitted. Used as both the JSON body
/// of `POST /search` and the query string of `GET /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search keyword (required, non-empty)
    pub query: String,
    /// Include Naver blog results (default: true)
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_naver_blog: bool,
    /// Include Naver news results (default: true)
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_naver_news: bool,
    /// Include Google Custom Search results (default: true)
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_google_search: bool,
}

fn default_true() -> bool {
    true
}

/// Toggle parser shared by the JSON body and the query string.
///
/// Accepts real booleans, `0`/`1`, and the case-insensitive spellings
/// `true`/`false`, `t`/`f`, `yes`/`no`, `y`/`n`, `on`/`off`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct ToggleVisitor;

    impl<'de> de::Visitor<'de> for ToggleVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean, 0/1, or one of true/false/yes/no/on/off/t/f/y/n")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
                "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(ToggleVisitor)
}

impl SearchQuery {
    /// Create a query with every provider enabled
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            use_naver_blog: true,
            use_naver_news: true,
            use_google_search: true,
        }
    }

    pub fn with_naver_blog(mut self, enabled: bool) -> Self {
        self.use_naver_blog = enabled;
        self
    }

    pub fn with_naver_news(mut self, enabled: bool) -> Self {
        self.use_naver_news = enabled;
        self
    }

    pub fn with_google_search(mut self, enabled: bool) -> Self {
        self.use_google_search = enabled;
        self
    }

    /// Whether results from `source` were requested
    pub fn is_enabled(&self, source: SearchSource) -> bool {
        match source {
            SearchSource::NaverBlog => self.use_naver_blog,
            SearchSource::NaverNews => self.use_naver_news,
            SearchSource::GoogleSearch => self.use_google_search,
        }
    }

    /// Sources to query, in aggregation order
    pub fn enabled_sources(&self) -> Vec<SearchSource> {
        SearchSource::ALL
            .into_iter()
            .filter(|source| self.is_enabled(*source))
            .collect()
    }

    /// Reject blank query text
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.query.trim().is_empty() {
            return Err(DomainError::validation("query must not be empty"));
        }
        Ok(())
    }
}
