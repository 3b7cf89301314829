//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod naver_kind;
mod search_query;
mod search_source;

pub use naver_kind::*;
pub use search_query::*;
pub use search_source::*;
