//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the aggregation logic
//! interacts with upstream search APIs and how the HTTP layer
//! reaches the aggregator.
//!
//! Implementations of these traits live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
