// POST /api/ai-check — AI-derived verdict with engine fallback.
//
// When the producer is configured, provider errors degrade to the rule
// engine's verdict; when it isn't, the engine answers directly. Either
// way the response carries the shared verdict shape and never 5xxs on
// provider trouble.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::ai::{self, AiVerdict};
use crate::web::{api_error, AppState};

use super::analyze::AnalyzeRequest;

/// POST /api/ai-check — generative analysis with deterministic fallback.
pub async fn ai_check(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Message is required");
    }

    let verdict = match &state.producer {
        Some(producer) => {
            ai::check_with_fallback(producer.as_ref(), &state.engine, &request.message).await
        }
        None => AiVerdict::from(&state.engine.analyze(&request.message)),
    };

    Json(verdict).into_response()
}
