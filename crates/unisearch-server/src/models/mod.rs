//! API Data Models
//!
//! Request and response bodies of the HTTP API. The search payload types
//! themselves come from the domain crate.

mod health;
mod responses;

pub use health::*;
pub use responses::*;

pub use unisearch::{SearchQuery, SearchResult, SearchSource};
