//! Service Ports
//!
//! Abstract interfaces for external services.

mod search_provider;
mod unified_search;

pub use search_provider::*;
pub use unified_search::*;
