// Web server — Axum-based JSON API over the engine and AI producer.
//
// All routes serve JSON. The API is unauthenticated: it exposes no user
// data, only the stateless analyzers. CORS is open so a static frontend
// can call it from anywhere.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ai::gemini::GeminiProducer;
use crate::ai::VerdictProducer;
use crate::config::Config;
use crate::engine::ScamEngine;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScamEngine>,
    /// None when GEMINI_API_KEY is unset — the AI route then serves the
    /// engine's verdict directly.
    pub producer: Option<Arc<dyn VerdictProducer>>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, engine: ScamEngine, port: u16, bind: &str) -> Result<()> {
    let producer: Option<Arc<dyn VerdictProducer>> = if config.gemini_api_key.is_empty() {
        info!("GEMINI_API_KEY not set — /api/ai-check will use the rule engine");
        None
    } else {
        Some(Arc::new(GeminiProducer::new(
            config.gemini_api_url.clone(),
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        )))
    };

    let state = AppState {
        engine: Arc::new(engine),
        producer,
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Kavach API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so the test suite can drive it with `oneshot`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/scam-check", post(handlers::analyze::scam_check))
        .route("/api/ai-check", post(handlers::ai::ai_check))
        .route("/api/patterns", get(handlers::patterns::list_patterns))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deploy health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
