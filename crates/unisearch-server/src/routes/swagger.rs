//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorDetail, ErrorMessage, HealthCheck, SearchQuery, SearchResult, SearchSource};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::search::search_post,
        super::search::search_get,
    ),
    info(
        title = "Unisearch API",
        version = "0.1.0",
        description = "Unified search over Naver blog, Naver news and Google Custom Search.\n\nEvery request must carry the pre-shared API key in the `key` header.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Search", description = "Search - Fan-out over Naver and Google"),
    ),
    components(
        schemas(
            HealthCheck,
            SearchQuery,
            SearchResult,
            SearchSource,
            ErrorDetail,
            ErrorMessage,
        )
    )
)]
pub struct ApiDoc;
