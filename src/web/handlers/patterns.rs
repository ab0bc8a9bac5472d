// GET /api/patterns — expose the rule registry.

use axum::extract::State;
use axum::Json;

use crate::engine::Registry;
use crate::web::AppState;

/// GET /api/patterns — the full registry as JSON.
pub async fn list_patterns(State(state): State<AppState>) -> Json<Registry> {
    Json(state.engine.registry().clone())
}
