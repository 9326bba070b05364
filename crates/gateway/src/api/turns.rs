//! Saved-chat routes: save, list and fetch stored turns.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use ag_turns::{group_by_date, DateGroups};

use crate::error::ApiError;
use crate::runtime::recorder;
use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /save_chat
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
pub struct SaveChatBody {
    #[serde(default)]
    pub chat: String,
}

pub async fn save_chat(
    State(state): State<AppState>,
    body: Result<Json<SaveChatBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    if body.chat.is_empty() {
        return Err(ApiError::Validation("chat is empty, not saved".into()));
    }
    let turn = recorder::record_raw(state.turns.as_ref(), body.chat).await?;
    tracing::debug!(turn_id = turn.id, "chat saved");
    Ok(Json(json!({ "status": "chat saved" })))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /get_chats
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// All turns, newest first, grouped by local date.
pub async fn get_chats(State(state): State<AppState>) -> Result<Json<DateGroups>, ApiError> {
    let turns = state.turns.list_descending().await?;
    Ok(Json(group_by_date(&turns, state.tz)))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /get_chat_content/:id
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn get_chat_content(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    match state.turns.get(id).await? {
        Some(turn) => Ok(Json(json!({ "chat_content": turn.text }))),
        None => Err(ApiError::NotFound(format!("chat {id} not found"))),
    }
}
