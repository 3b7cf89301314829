//! Application Layer (Use Cases)
//!
//! Orchestrates the provider adapters into a single search.

mod search_service;

pub use search_service::SearchService;
