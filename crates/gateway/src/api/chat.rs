//! `POST /chat`: one exchange with the assistant.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::api::auth;
use crate::error::ApiError;
use crate::runtime::{self, chat::require_message};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = body?;
    let message = require_message(&body.message)?;
    let credential = auth::resolve_credential(&state, &headers)?;

    let response = runtime::run_chat(&state, message, &credential).await?;
    Ok(Json(ChatReply { response }))
}
