//! Search Provider Port
//!
//! Abstract interface for a single upstream search API.

use async_trait::async_trait;

use crate::domain::entities::SearchResult;
use crate::domain::errors::ProviderError;
use crate::domain::value_objects::SearchSource;

/// One upstream search API bound to a single [`SearchSource`].
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Label attached to every result this provider returns
    fn source(&self) -> SearchSource;

    /// Search for `query`, returning hits in provider order
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;
}
