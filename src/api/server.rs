//! HTTP surface: router construction and server startup
//!
//! Routes: `POST /fetch` (fetch and rewrite a page), `GET /health`
//! (liveness), and the static front-end served from the configured public
//! directory at `/`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::errors::{ApiErrorResponse, FetchRequest, FetchResponse};
use crate::config::ServerConfig;
use crate::service::ProxyService;

#[derive(Clone)]
struct AppState {
    service: Arc<ProxyService>,
}

/// Build the application router.
///
/// Split out from [`start_server`] so tests can drive the router in-process
/// without binding a socket.
pub fn build_router(service: Arc<ProxyService>, public_dir: &str) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(health_handler))
        .route("/fetch", post(fetch_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured port and serve until shutdown.
pub async fn start_server(
    config: &ServerConfig,
    service: Arc<ProxyService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(service, &config.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Faleproxy listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(json!({ "status": "ok" }))
}

async fn fetch_handler(
    State(state): State<AppState>,
    Json(request): Json<FetchRequest>,
) -> impl IntoResponse {
    match state.service.process_url(&request.url).await {
        Ok(page) => axum::response::Json(FetchResponse {
            success: true,
            content: page.html,
            title: page.title,
            original_url: page.original_url,
        })
        .into_response(),
        Err(e) => ApiErrorResponse(e).into_response(),
    }
}
