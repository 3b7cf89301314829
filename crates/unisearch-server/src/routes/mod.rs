//! Unisearch API Routes
//!
//! - /search - Unified search across Naver blog, Naver news and Google
//! - /swagger-ui - OpenAPI documentation

pub mod search;
pub mod swagger;
