//! Unisearch Domain Library
//!
//! Core types and interfaces for the Unisearch aggregation service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types with no I/O
//!   - `entities/`: The unified [`SearchResult`] record
//!   - `value_objects/`: [`SearchSource`], [`NaverKind`], [`SearchQuery`]
//!   - `errors/`: [`DomainError`] and [`ProviderError`]
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - [`SearchProvider`]: one upstream search API
//!   - [`UnifiedSearch`]: the fan-out aggregator consumed by the HTTP layer
//!
//! # Usage
//!
//! ```rust,ignore
//! use unisearch::{SearchQuery, UnifiedSearch};
//!
//! let query = SearchQuery::new("인공지능").with_google_search(false);
//! let json = service.search(&query).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, NaverKind, ProviderError, SearchQuery, SearchResult, SearchSource};
pub use ports::{SearchProvider, UnifiedSearch};
