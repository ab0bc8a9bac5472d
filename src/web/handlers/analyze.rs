// POST /api/scam-check — run the rule engine on one message.
//
// Returns the flat Assessment JSON. Empty or whitespace-only messages are
// rejected with 400 before the engine is invoked.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/scam-check — deterministic analysis.
pub async fn scam_check(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Message is required");
    }

    Json(state.engine.analyze(&request.message)).into_response()
}
