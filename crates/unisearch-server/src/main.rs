use axum::{middleware, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use unisearch::UnifiedSearch;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod error;
mod models;
mod routes;

use application::SearchService;
use config::AppConfig;
use models::HealthCheck;

/// Application state shared across all routes (read-only after start-up)
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn UnifiedSearch>,
    /// Pre-shared key expected in the `key` header
    pub api_key: Arc<str>,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    params(("key" = String, Header, description = "Pre-shared API key")),
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Unisearch API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the router; every route sits behind the API key check
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::search::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🔎 Unisearch API initializing...");

    let config = AppConfig::from_secrets(&secrets)?;
    tracing::info!("🔐 API key authentication enabled");

    let search = SearchService::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
    tracing::info!(
        timeout_secs = config.provider_timeout.as_secs(),
        "🌐 Search providers initialized (Naver Blog, Naver News, Google Search)"
    );

    let state = AppState {
        search: Arc::new(search),
        api_key: Arc::from(config.api_key.as_str()),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Unisearch API ready");

    Ok(router.into())
}
