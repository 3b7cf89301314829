//! Search Routes - Unified search across Naver and Google

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use unisearch::{SearchQuery, SearchResult};

use crate::error::ApiError;
use crate::models::{ErrorDetail, ErrorMessage};
use crate::AppState;

/// Search with a JSON body
#[utoipa::path(
    post,
    path = "/search",
    params(("key" = String, Header, description = "Pre-shared API key")),
    request_body = SearchQuery,
    responses(
        (status = 200, description = "Merged results: Naver blog, then Naver news, then Google", body = Vec<SearchResult>),
        (status = 403, description = "Invalid API key", body = ErrorDetail),
        (status = 422, description = "Missing key header or invalid request", body = ErrorDetail),
        (status = 500, description = "Aggregation failed", body = ErrorMessage)
    ),
    tag = "Search"
)]
pub async fn search_post(
    State(state): State<AppState>,
    payload: Result<Json<SearchQuery>, JsonRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Json(query) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    run_search(&state, query).await
}

/// Search with query-string parameters
#[utoipa::path(
    get,
    path = "/search",
    params(
        SearchQuery,
        ("key" = String, Header, description = "Pre-shared API key")
    ),
    responses(
        (status = 200, description = "Merged results: Naver blog, then Naver news, then Google", body = Vec<SearchResult>),
        (status = 403, description = "Invalid API key", body = ErrorDetail),
        (status = 422, description = "Missing key header or invalid request", body = ErrorDetail),
        (status = 500, description = "Aggregation failed", body = ErrorMessage)
    ),
    tag = "Search"
)]
pub async fn search_get(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Query(query) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    run_search(&state, query).await
}

async fn run_search(
    state: &AppState,
    query: SearchQuery,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    query
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let json = state
        .search
        .search(&query)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let results: Vec<SearchResult> =
        serde_json::from_str(&json).map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("🔍 Search: {} -> {} results", query.query, results.len());

    Ok(Json(results))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_get).post(search_post))
}
