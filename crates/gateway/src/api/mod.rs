pub mod auth;
pub mod chat;
pub mod digest;
pub mod health;
pub mod turns;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full API router. The caller supplies state with
/// [`Router::with_state`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/save_chat", post(turns::save_chat))
        .route("/get_chats", get(turns::get_chats))
        .route("/get_chat_content/:id", get(turns::get_chat_content))
        .route("/generate_summary", get(digest::generate_summary))
        .route("/find_appointments", get(digest::find_appointments))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
