use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /health: lightweight health probe
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let turns = match state.turns.len().await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(error = %e, "health: turn store unreadable");
            None
        }
    };
    Json(serde_json::json!({
        "status": if turns.is_some() { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "turns": turns,
        "providers": state.llm.list_providers(),
    }))
}
