//! Unified Search Port
//!
//! The aggregation entry point consumed by the HTTP layer.

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::SearchQuery;

/// Fan a query out to the enabled providers and merge the results.
#[async_trait]
pub trait UnifiedSearch: Send + Sync {
    /// Returns the merged results as JSON text (an array of `SearchResult`).
    ///
    /// Provider failures are absorbed; an `Err` means the merge itself failed.
    async fn search(&self, query: &SearchQuery) -> Result<String, DomainError>;
}
